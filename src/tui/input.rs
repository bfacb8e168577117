// Input handling system with configurable key behaviors
//
// Supports two behaviors:
// - State-change only keys (trigger once per press)
// - Repeatable keys (trigger on press, then repeat while held)

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Trigger only on state change (press then release)
    /// Use for: Enter, Esc, single-action keys
    StateChange,

    /// Trigger on press, then repeat after initial delay
    /// Use for: arrow keys, PageUp/Down, navigation
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Standard navigation key behavior (like arrow keys)
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(500),
            repeat_interval: Duration::from_millis(50),
        }
    }
}

/// Tracks the state of a single key
#[derive(Debug)]
struct KeyState {
    is_pressed: bool,
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

impl KeyState {
    fn new() -> Self {
        Self {
            is_pressed: false,
            press_started: None,
            last_triggered: None,
        }
    }

    fn release(&mut self) {
        self.is_pressed = false;
        self.press_started = None;
        self.last_triggered = None;
    }
}

/// Input handler that manages key behaviors
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.key_behaviors.insert(*key, behavior);
        }
    }

    /// Handle a key press event
    /// Returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);

        let state = self.key_states.entry(key).or_insert_with(KeyState::new);

        if state.is_pressed {
            match behavior {
                KeyBehavior::StateChange => {
                    // Debounce for terminals that never send Release events
                    if let Some(last) = state.last_triggered {
                        if now.duration_since(last) >= Duration::from_millis(150) {
                            state.last_triggered = Some(now);
                            return true;
                        }
                    }
                    false
                }
                KeyBehavior::Repeatable {
                    initial_delay,
                    repeat_interval,
                } => {
                    if let (Some(press_start), Some(last_trigger)) =
                        (state.press_started, state.last_triggered)
                    {
                        let since_press = now.duration_since(press_start);
                        let since_last = now.duration_since(last_trigger);

                        if since_press >= initial_delay && since_last >= repeat_interval {
                            state.last_triggered = Some(now);
                            return true;
                        }
                    }
                    false
                }
            }
        } else {
            // New key press - always trigger
            state.is_pressed = true;
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            true
        }
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.release();
        }
    }

    /// Default configuration for the reader's key map
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        // Navigation keys - repeatable
        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
                KeyCode::PageUp,
                KeyCode::PageDown,
            ],
            KeyBehavior::navigation(),
        );

        // Action keys - state change only (trigger once per press)
        handler.configure_keys(
            &[
                KeyCode::Enter,
                KeyCode::Esc,
                KeyCode::Char(' '),
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
                KeyCode::Char('/'),
                KeyCode::Char('y'),
                KeyCode::Char('r'),
                KeyCode::Char('a'),
                KeyCode::Char('c'),
                KeyCode::Char('?'),
            ],
            KeyBehavior::StateChange,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_state_change_no_repeat() {
        let mut handler = InputHandler::new();
        handler.configure_keys(&[KeyCode::Enter], KeyBehavior::StateChange);

        // First press triggers
        assert!(handler.handle_key_press(KeyCode::Enter));

        // Subsequent presses while held don't trigger
        assert!(!handler.handle_key_press(KeyCode::Enter));
        assert!(!handler.handle_key_press(KeyCode::Enter));

        handler.handle_key_release(KeyCode::Enter);

        // Next press triggers again
        assert!(handler.handle_key_press(KeyCode::Enter));
    }

    #[test]
    fn test_repeatable_with_delay() {
        let mut handler = InputHandler::new();
        handler.configure_keys(
            &[KeyCode::Down],
            KeyBehavior::Repeatable {
                initial_delay: Duration::from_millis(100),
                repeat_interval: Duration::from_millis(50),
            },
        );

        assert!(handler.handle_key_press(KeyCode::Down));
        assert!(!handler.handle_key_press(KeyCode::Down));

        thread::sleep(Duration::from_millis(110));
        assert!(handler.handle_key_press(KeyCode::Down));

        thread::sleep(Duration::from_millis(60));
        assert!(handler.handle_key_press(KeyCode::Down));
    }
}
