// SelectionGuard - copy interception with attribution
//
// Event-driven: the guard runs when the user triggers the copy action, not
// on a poll. Short selections pass through untouched; long selections get
// their clipboard payload rewritten to a short excerpt plus an attribution
// line, and a citation dialog opens so the user can copy the full citation
// through an explicit gesture (for clipboard APIs that refuse event-time
// writes).
//
// The decision logic is pure (`inspect`); the clipboard write happens at
// the call site so the policy is testable without a clipboard.

use crate::util::excerpt;

/// Selections longer than this many characters are intercepted
pub const INTERCEPT_THRESHOLD: usize = 30;

/// Characters of the selection kept in the rewritten payload
pub const EXCERPT_LEN: usize = 20;

/// What the guard decided for one copy action
#[derive(Debug, Clone, PartialEq)]
pub enum CopyOutcome {
    /// Selection is short enough: copy it verbatim
    PassThrough(String),
    /// Selection exceeds the threshold: rewrite the clipboard and show
    /// the citation dialog
    Intercepted {
        /// Replacement clipboard payload: excerpt + ellipsis + attribution
        payload: String,
        /// Full citation text shown in the dialog
        citation: String,
    },
}

/// Guards copy actions over article text
#[derive(Debug, Clone)]
pub struct SelectionGuard {
    /// Attribution target: site name plus bundle location
    source: String,
}

impl SelectionGuard {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Classify a copy action over the given selection
    ///
    /// Exactly 30 characters passes through; 31 triggers interception.
    /// The rewritten payload starts with the selection's first 20
    /// characters so a pasted excerpt still reads as the original text.
    pub fn inspect(&self, selection: &str) -> CopyOutcome {
        if selection.chars().count() <= INTERCEPT_THRESHOLD {
            return CopyOutcome::PassThrough(selection.to_string());
        }

        let short = excerpt(selection, EXCERPT_LEN);
        CopyOutcome::Intercepted {
            payload: format!("{}\n[source: {}]", short, self.source),
            citation: format!(
                "\"{}\"\nFrom: {}\nAll rights reserved. Contact the author before reprinting.",
                short, self.source
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> SelectionGuard {
        SelectionGuard::new("Fieldnotes (https://example.org)")
    }

    #[test]
    fn test_exactly_threshold_passes_through() {
        let selection = "x".repeat(30);
        assert_eq!(
            guard().inspect(&selection),
            CopyOutcome::PassThrough(selection.clone())
        );
    }

    #[test]
    fn test_one_over_threshold_intercepts() {
        let selection = "x".repeat(31);
        assert!(matches!(
            guard().inspect(&selection),
            CopyOutcome::Intercepted { .. }
        ));
    }

    #[test]
    fn test_payload_starts_with_first_twenty_chars() {
        let selection = "The quick brown fox jumps over the lazy dog";
        let expected_prefix: String = selection.chars().take(EXCERPT_LEN).collect();

        match guard().inspect(selection) {
            CopyOutcome::Intercepted { payload, .. } => {
                let prefix: String = payload.chars().take(EXCERPT_LEN).collect();
                assert_eq!(prefix, expected_prefix);
                assert!(payload.contains('…'));
                assert!(payload.contains("[source: Fieldnotes (https://example.org)]"));
            }
            other => panic!("expected interception, got {:?}", other),
        }
    }

    #[test]
    fn test_threshold_counts_chars_not_bytes() {
        // 15 three-byte chars = 45 bytes but only 15 chars: pass through
        let selection = "語".repeat(15);
        assert!(matches!(
            guard().inspect(&selection),
            CopyOutcome::PassThrough(_)
        ));
    }

    #[test]
    fn test_citation_names_the_source() {
        let selection = "a".repeat(40);
        match guard().inspect(&selection) {
            CopyOutcome::Intercepted { citation, .. } => {
                assert!(citation.contains("From: Fieldnotes (https://example.org)"));
                assert!(citation.starts_with('"'));
            }
            other => panic!("expected interception, got {:?}", other),
        }
    }
}
