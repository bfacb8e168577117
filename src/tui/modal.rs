// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return
// actions. App just holds Option<Modal>; input routing acts on the
// returned ModalAction.

use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

/// How long the citation dialog's copy feedback stays before reverting
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// Actions returned by modal input handling
#[derive(Debug, Clone)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Scroll up in content
    ScrollUp,
    /// Scroll down in content
    ScrollDown,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Copy the citation dialog's exact text (explicit user gesture)
    CopyCitation,
    /// Copy the viewed article's text (goes through the SelectionGuard)
    CopySelection,
}

/// Available modal types
#[derive(Debug, Clone)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// Article detail view - index into the visible card list
    Detail(usize),
    /// Citation dialog opened by the SelectionGuard
    Citation {
        /// Exact text the "copy citation" action writes to the clipboard
        text: String,
        /// Transient button feedback: when it was set and whether the
        /// copy succeeded. Reverts after COPY_FEEDBACK_DURATION.
        feedback: Option<(Instant, bool)>,
    },
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    pub fn detail(index: usize) -> Self {
        Modal::Detail(index)
    }

    pub fn citation(text: impl Into<String>) -> Self {
        Modal::Citation {
            text: text.into(),
            feedback: None,
        }
    }

    /// Handle keyboard input, return action for the caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Detail(_) => match key {
                KeyCode::Esc | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Up | KeyCode::Char('k') => ModalAction::ScrollUp,
                KeyCode::Down | KeyCode::Char('j') => ModalAction::ScrollDown,
                KeyCode::PageUp => ModalAction::PageUp,
                KeyCode::PageDown => ModalAction::PageDown,
                KeyCode::Char('y') => ModalAction::CopySelection,
                _ => ModalAction::None,
            },
            Modal::Citation { .. } => match key {
                // Dismissal is idempotent: closing never touches the
                // clipboard or the selection
                KeyCode::Esc | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Char('c') | KeyCode::Enter => ModalAction::CopyCitation,
                _ => ModalAction::None,
            },
        }
    }

    /// Record the outcome of the explicit "copy citation" action
    pub fn mark_citation_copied(&mut self, success: bool) {
        if let Modal::Citation { feedback, .. } = self {
            *feedback = Some((Instant::now(), success));
        }
    }

    /// Current button label for the citation dialog
    pub fn citation_button_label(&self) -> &'static str {
        match self {
            Modal::Citation {
                feedback: Some((at, ok)),
                ..
            } if at.elapsed() < COPY_FEEDBACK_DURATION => {
                if *ok {
                    "Copied!"
                } else {
                    "Copy failed"
                }
            }
            _ => "[c] Copy citation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_copy_and_close_keys() {
        let mut modal = Modal::citation("text");
        assert!(matches!(
            modal.handle_input(KeyCode::Char('c')),
            ModalAction::CopyCitation
        ));
        assert!(matches!(modal.handle_input(KeyCode::Esc), ModalAction::Close));
        // Closing again still just closes - dismissal is idempotent
        assert!(matches!(modal.handle_input(KeyCode::Esc), ModalAction::Close));
    }

    #[test]
    fn test_citation_feedback_label_reverts_conceptually() {
        let mut modal = Modal::citation("text");
        assert_eq!(modal.citation_button_label(), "[c] Copy citation");
        modal.mark_citation_copied(true);
        assert_eq!(modal.citation_button_label(), "Copied!");
        modal.mark_citation_copied(false);
        assert_eq!(modal.citation_button_label(), "Copy failed");
    }

    #[test]
    fn test_detail_scrolls_and_copies() {
        let mut modal = Modal::detail(0);
        assert!(matches!(
            modal.handle_input(KeyCode::Down),
            ModalAction::ScrollDown
        ));
        assert!(matches!(
            modal.handle_input(KeyCode::Char('y')),
            ModalAction::CopySelection
        ));
    }
}
