/// Where the form is in its submit cycle
///
/// Each variant carries at most one message, so the page never shows a
/// stale message next to a pending submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// One-time informational notice (return from provider authorization)
    Notice(String),
    /// Request in flight
    Submitting,
    /// Meeting created
    Succeeded(String),
    /// Validation, backend or transport failure
    Failed(String),
}

impl FormStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }

    /// Text for the page's message region
    pub fn message(&self) -> Option<&str> {
        match self {
            FormStatus::Idle | FormStatus::Submitting => None,
            FormStatus::Notice(message)
            | FormStatus::Succeeded(message)
            | FormStatus::Failed(message) => Some(message),
        }
    }
}

