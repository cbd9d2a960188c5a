//! Error types for the chat companion.

/// Errors from the companion widget's input edges.
///
/// The resolver and session tracker are total; these only describe input
/// the controller refuses, which callers treat as a no-op.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("companion widget has been torn down")]
    WidgetDisposed,
    #[error("no quick question at index {0}")]
    UnknownQuickQuestion(usize),
    #[error("quiz is already complete")]
    QuizComplete,
    #[error("option {index} out of range for a question with {len} options")]
    InvalidOption { index: usize, len: usize },
    #[error("no classifier feature at index {0}")]
    UnknownFeature(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        assert_eq!(ChatError::EmptyMessage.to_string(), "message cannot be empty");
        assert_eq!(
            ChatError::WidgetDisposed.to_string(),
            "companion widget has been torn down"
        );
        assert_eq!(
            ChatError::UnknownQuickQuestion(12).to_string(),
            "no quick question at index 12"
        );
        assert_eq!(ChatError::QuizComplete.to_string(), "quiz is already complete");
        assert_eq!(
            ChatError::InvalidOption { index: 7, len: 4 }.to_string(),
            "option 7 out of range for a question with 4 options"
        );
        assert_eq!(
            ChatError::UnknownFeature(3).to_string(),
            "no classifier feature at index 3"
        );
    }
}
