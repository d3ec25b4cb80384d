use crate::core::error::ClientError;
use crate::core::models::{ChatMessage, ChatReply, ChatRole, ConversationHandle, Task};

/// Longest message the chat backend accepts.
pub const MAX_MESSAGE_CHARS: usize = 2000;

const FULL_PAGE_WELCOME: &str = "Hi! I'm your todo assistant. I can help you manage your tasks through natural conversation. Try saying things like:\n\n• \"Add buy groceries\"\n• \"Show my tasks\"\n• \"Mark the first one as done\"\n• \"What do I need to do?\"\n\nWhat would you like to do?";
const SIDEBAR_WELCOME: &str = "Hi! I'm your AI task assistant. I can help you add, delete, or mark tasks as complete. Just tell me what you need!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVariant {
    FullPage,
    Sidebar,
}

impl PanelVariant {
    pub fn welcome(&self) -> &'static str {
        match self {
            PanelVariant::FullPage => FULL_PAGE_WELCOME,
            PanelVariant::Sidebar => SIDEBAR_WELCOME,
        }
    }

    /// The sidebar sits next to the task list, which the assistant may have
    /// changed behind the dashboard's back.
    pub fn reloads_tasks(&self) -> bool {
        matches!(self, PanelVariant::Sidebar)
    }

    pub fn injects_task_context(&self) -> bool {
        matches!(self, PanelVariant::Sidebar)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    Sending,
}

/// What to put on the wire for an accepted send.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMessage {
    pub text: String,
    pub conversation: Option<ConversationHandle>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// Blank input or a send already in flight. Nothing changed.
    Skipped,
    /// Input refused locally; a notice was appended instead.
    Rejected,
    Sent(OutgoingMessage),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeEffect {
    None,
    ReloadTasks,
}

/// Message log and send state of one chat panel.
///
/// `Idle -> Sending` on an accepted send, back to `Idle` when the reply or the
/// failure arrives. Only one send is ever outstanding.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    variant: PanelVariant,
    state: PanelState,
    messages: Vec<ChatMessage>,
    conversation: Option<ConversationHandle>,
    last_error: Option<String>,
}

impl ChatSession {
    pub fn new(variant: PanelVariant) -> Self {
        Self {
            variant,
            state: PanelState::Idle,
            messages: vec![ChatMessage::assistant(variant.welcome())],
            conversation: None,
            last_error: None,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == PanelState::Sending
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn conversation(&self) -> Option<&ConversationHandle> {
        self.conversation.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Accept user input. `tasks` is only read by variants that send task context.
    pub fn begin_send(&mut self, input: &str, tasks: &[Task]) -> SendOutcome {
        let input = input.trim();
        if input.is_empty() || self.is_sending() {
            return SendOutcome::Skipped;
        }

        let length = input.chars().count();
        if length > MAX_MESSAGE_CHARS {
            self.messages.push(ChatMessage::assistant(format!(
                "That message is too long ({} characters). Please keep it under {} characters.",
                length, MAX_MESSAGE_CHARS
            )));
            return SendOutcome::Rejected;
        }

        self.messages.push(ChatMessage::user(input));
        self.state = PanelState::Sending;
        self.last_error = None;

        let text = if self.variant.injects_task_context() {
            with_task_context(input, tasks)
        } else {
            input.to_string()
        };
        // The limit covers the whole outgoing text. When the task list pushes
        // it over, send the input alone; the assistant can still look tasks up.
        let text = if text.chars().count() > MAX_MESSAGE_CHARS {
            log::debug!("Task context for {} tasks exceeds the message limit; omitting it", tasks.len());
            input.to_string()
        } else {
            text
        };

        SendOutcome::Sent(OutgoingMessage {
            text,
            conversation: self.conversation.clone(),
        })
    }

    /// Record the outcome of the outstanding send.
    pub fn complete(&mut self, result: Result<ChatReply, ClientError>) -> ExchangeEffect {
        if !self.is_sending() {
            log::warn!("Chat reply arrived with no send outstanding; ignoring");
            return ExchangeEffect::None;
        }
        self.state = PanelState::Idle;

        match result {
            Ok(reply) => {
                match &self.conversation {
                    None => {
                        log::info!("Conversation {} started", reply.conversation_id.as_str());
                        self.conversation = Some(reply.conversation_id.clone());
                    }
                    Some(current) if current != &reply.conversation_id => {
                        log::warn!(
                            "Backend answered with conversation {} while {} is active; keeping {}",
                            reply.conversation_id.as_str(),
                            current.as_str(),
                            current.as_str()
                        );
                    }
                    Some(_) => {}
                }
                let received_at = reply.received_at();
                self.messages
                    .push(ChatMessage::new(ChatRole::Assistant, reply.response, received_at));

                if self.variant.reloads_tasks() {
                    ExchangeEffect::ReloadTasks
                } else {
                    ExchangeEffect::None
                }
            }
            Err(e) => {
                let detail = e.user_message();
                let detail = detail.trim_end_matches('.');
                self.messages.push(ChatMessage::assistant(format!(
                    "Sorry, I encountered an error: {}. Please try again.",
                    detail
                )));
                self.last_error = Some(detail.to_string());
                ExchangeEffect::None
            }
        }
    }
}

fn with_task_context(input: &str, tasks: &[Task]) -> String {
    let summaries: Vec<_> = tasks.iter().map(Task::summary).collect();
    let encoded = serde_json::to_string(&summaries).unwrap_or_else(|_| "[]".to_string());
    format!("{}\n\nCurrent tasks: {}", input, encoded)
}
