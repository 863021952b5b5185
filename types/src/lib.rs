pub mod attendance;
mod error;
pub mod roster;
pub mod settings;

pub use error::{Error, Result};

/// `Some(trimmed)` when the input has non-whitespace content.
///
/// Used by the forms to gate network calls on required fields.
pub fn non_empty_trimmed(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::non_empty_trimmed;

    #[test]
    fn non_empty_trimmed_rejects_blank_input() {
        assert_eq!(non_empty_trimmed(""), None);
        assert_eq!(non_empty_trimmed("   "), None);
        assert_eq!(non_empty_trimmed("\t\n"), None);
    }

    #[test]
    fn non_empty_trimmed_strips_whitespace() {
        assert_eq!(non_empty_trimmed("  u1  "), Some("u1"));
        assert_eq!(non_empty_trimmed("Alice"), Some("Alice"));
    }
}
