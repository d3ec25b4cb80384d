pub mod chat;
pub mod session;
pub mod task;
pub mod timestamp;

pub use chat::{ChatMessage, ChatReply, ChatRequest, ChatRole, ConversationHandle};
pub use session::{Credential, CurrentUser, Session};
pub use task::{FieldUpdate, NewTask, Task, TaskPatch};
