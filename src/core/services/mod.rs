pub mod fetch;
pub mod http;
pub mod navigation;
pub mod session;
pub mod storage;

pub use fetch::FetchBackend;
pub use http::{ApiClient, Method};
pub use navigation::{redirect_to_sign_in, SIGN_IN_PATH};
pub use session::{restore_session, sign_out};
pub use storage::BrowserCredentialStore;
