//! Submission state for the query controller.

use crate::error::WidgetError;

/// Lifecycle of one submission. Terminal phases behave like `Idle` for the
/// controls; only `Submitting` keeps them locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

impl QueryPhase {
    pub fn is_busy(self) -> bool {
        matches!(self, QueryPhase::Submitting)
    }
}

/// Trim the raw input, rejecting prompts with no visible characters.
pub fn normalize_prompt(input: &str) -> Result<String, WidgetError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(WidgetError::Validation(
            "Please write a prompt before submitting.".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_prompt_is_rejected() {
        assert!(normalize_prompt("").is_err());
        assert!(normalize_prompt("   \t\n").is_err());
    }

    #[test]
    fn test_prompt_is_trimmed() {
        assert_eq!(
            normalize_prompt("  best pizza place  ").unwrap(),
            "best pizza place"
        );
    }

    #[test]
    fn test_only_submitting_is_busy() {
        assert!(QueryPhase::Submitting.is_busy());
        assert!(!QueryPhase::Idle.is_busy());
        assert!(!QueryPhase::Success.is_busy());
        assert!(!QueryPhase::Failed.is_busy());
    }
}
