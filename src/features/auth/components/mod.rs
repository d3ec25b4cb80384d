pub mod authenticated_header;
pub mod session_gate;

pub use authenticated_header::*;
pub use session_gate::*;
