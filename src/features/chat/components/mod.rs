pub mod chat_interface;
pub mod chat_panel;
pub mod chat_sidebar;
pub mod message_bubble;

pub use chat_interface::ChatInterface;
pub use chat_sidebar::ChatSidebar;
