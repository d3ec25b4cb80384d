pub mod use_chat;

pub use use_chat::*;
