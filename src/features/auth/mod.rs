pub mod components;
pub mod hooks;
