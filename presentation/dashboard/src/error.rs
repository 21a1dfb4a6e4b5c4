/// Failure of a call to the product API, as seen by the dashboard.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("client.validation: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("client.not_found: {0}")]
    NotFound(String),
    #[error("client.server: {0}")]
    Server(String),
    #[error("client.unexpected_response: status {0}")]
    UnexpectedResponse(u16),
    #[error("client.transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("client.task: {0}")]
    Task(String),
}

impl ClientError {
    /// Messages suitable for a notice. Empty when the server sent nothing
    /// readable and the caller should fall back to its own text.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ClientError::Validation(messages) => messages.clone(),
            ClientError::NotFound(message) | ClientError::Server(message) => {
                vec![message.clone()]
            }
            ClientError::UnexpectedResponse(_)
            | ClientError::Transport(_)
            | ClientError::Task(_) => Vec::new(),
        }
    }
}

/// A `set` command named a field the form does not have.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("form.unknown_field: {0}")]
pub struct UnknownField(pub String);
