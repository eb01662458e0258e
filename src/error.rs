use thiserror::Error;

/// Errors a single advice submission can end in.
///
/// The `Display` text is safe to show to the user as-is; diagnostic detail
/// (status codes, raw bodies) is carried in the payload and only logged.
#[derive(Debug, Error)]
pub enum AdviceError {
    /// A required field was missing. Handled locally, no request is made.
    #[error("Please fill in the required fields: {0}")]
    Validation(String),

    /// The request could not be sent, or the endpoint returned a non-2xx
    /// status.
    #[error("Error connecting to the advice service. Please try again.")]
    Transport(String),

    /// The endpoint answered, but the body contained no recognized answer.
    #[error("The advice service could not generate a response. Please try again.")]
    Format(String),

    /// The configuration could not be loaded or is incomplete.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdviceError {
    /// Diagnostic detail for the log, never for the user.
    pub fn detail(&self) -> &str {
        match self {
            AdviceError::Validation(d)
            | AdviceError::Transport(d)
            | AdviceError::Format(d)
            | AdviceError::Config(d) => d,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_hides_diagnostic_detail() {
        let err = AdviceError::Transport("HTTP 500: upstream quota exceeded".to_string());
        let shown = err.to_string();
        assert!(!shown.contains("500"));
        assert!(!shown.contains("quota"));
        assert_eq!(err.detail(), "HTTP 500: upstream quota exceeded");
    }

    #[test]
    fn validation_message_names_the_field() {
        let err = AdviceError::Validation("name".to_string());
        assert!(err.to_string().contains("name"));
    }
}
