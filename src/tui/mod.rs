// TUI module - Terminal User Interface
//
// Manages the terminal with ratatui: initialization and cleanup, the event
// loop (keyboard input, animation ticks, bundle load results), and the
// layered key dispatch (Modal -> search input -> Global -> List).

pub mod app;
pub mod clipboard;
pub mod components;
pub mod guard;
pub mod input;
pub mod markdown;
pub mod modal;
pub mod ui;

use crate::config::Config;
use crate::consent::ConsentStore;
use crate::content::{self, BundleSource, ContentBundle, LoadError};
use crate::demo;
use crate::logging::LogBuffer;
use crate::theme::Theme;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use guard::CopyOutcome;
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Rows reserved for the hero banner; the particle viewport matches it
const BANNER_HEIGHT: f64 = 8.0;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// exit. `source` is `None` in demo mode; reloads then re-serve the
/// built-in sample bundle.
pub async fn run_tui(
    mut load_rx: mpsc::Receiver<Result<ContentBundle, LoadError>>,
    load_tx: mpsc::Sender<Result<ContentBundle, LoadError>>,
    source: Option<BundleSource>,
    log_buffer: LogBuffer,
    config: Config,
    consent: Option<ConsentStore>,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let source_label = match &source {
        Some(src) => src.to_string(),
        None => "built-in demo data".to_string(),
    };

    let mut app = App::new(
        log_buffer,
        Theme::by_name(&config.theme),
        consent,
        source_label,
    );
    app.use_theme_background = config.use_theme_background;

    // Start the banner simulation at the current viewport width
    let size = terminal.size().context("Failed to read terminal size")?;
    app.restart_banner(size.width as f64, BANNER_HEIGHT);

    let result = run_event_loop(
        &mut terminal,
        &mut app,
        &mut load_rx,
        &load_tx,
        &source,
        config.tick_ms,
    )
    .await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// tokio::select! waits on three things at once: keyboard/resize input,
/// the animation tick, and bundle load results arriving on the channel.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    load_rx: &mut mpsc::Receiver<Result<ContentBundle, LoadError>>,
    load_tx: &mpsc::Sender<Result<ContentBundle, LoadError>>,
    source: &Option<BundleSource>,
    tick_ms: u64,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(tick_ms));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input and resize
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => {
                            handle_key_event(app, key_event, load_tx, source);
                        }
                        Ok(Event::Resize(width, _)) => {
                            // Stop the running simulation before a new one
                            // starts over the resized surface
                            app.restart_banner(width as f64, BANNER_HEIGHT);
                        }
                        _ => {}
                    }
                }
            } => {}

            // Animation tick
            _ = tick_interval.tick() => {
                app.tick_banner();
                app.clear_expired_toast();
            }

            // Bundle load results
            Some(result) = load_rx.recv() => {
                app.bundle_loaded(result);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Layered key dispatch: Modal -> search input -> Global -> List
fn handle_key_event(
    app: &mut App,
    key_event: KeyEvent,
    load_tx: &mpsc::Sender<Result<ContentBundle, LoadError>>,
    source: &Option<BundleSource>,
) {
    // Layer 1: an open modal captures all input
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: search input mode captures raw characters
    if app.search_mode {
        handle_search_input(app, &key_event);
        return;
    }

    // Layer 3: global keys
    if handle_global_keys(app, &key_event, load_tx, source) {
        return;
    }

    // Layer 4: list navigation and article actions
    let key = key_event.code;
    match key_event.kind {
        KeyEventKind::Press => {
            if !app.handle_key_press(key) {
                return;
            }
            match key {
                KeyCode::Left => app.cycle_category(false),
                KeyCode::Right => app.cycle_category(true),
                KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                KeyCode::Enter => {
                    if app.card_count() > 0 {
                        app.detail_scroll = 0;
                        app.modal = Some(Modal::detail(app.selected));
                    }
                }
                KeyCode::Char(' ') => app.toggle_like(),
                KeyCode::Char('/') => {
                    app.search_input.clear();
                    app.search_mode = true;
                }
                _ => {}
            }
        }
        KeyEventKind::Release => {
            app.handle_key_release(key);
        }
        _ => {}
    }
}

/// Handle modal input - returns true if a modal absorbed the event
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if app.modal.is_none() {
        return false;
    }

    // Release events still reach the InputHandler so keys don't stay
    // stuck in "pressed" state after the modal closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }
    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    let action = match &mut app.modal {
        Some(modal) => modal.handle_input(key_event.code),
        None => return false,
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => {
            app.detail_scroll = 0;
            app.modal = None;
        }
        ModalAction::ScrollUp => {
            app.detail_scroll = app.detail_scroll.saturating_sub(1);
        }
        ModalAction::ScrollDown => {
            app.detail_scroll = app.detail_scroll.saturating_add(1);
        }
        ModalAction::PageUp => {
            app.detail_scroll = app.detail_scroll.saturating_sub(10);
        }
        ModalAction::PageDown => {
            app.detail_scroll = app.detail_scroll.saturating_add(10);
        }
        ModalAction::CopyCitation => {
            // Explicit gesture: this write is allowed to report its outcome
            let ok = match &app.modal {
                Some(Modal::Citation { text, .. }) => {
                    clipboard::copy_to_clipboard(text).is_ok()
                }
                _ => false,
            };
            if let Some(modal) = &mut app.modal {
                modal.mark_citation_copied(ok);
            }
        }
        ModalAction::CopySelection => copy_selection(app),
    }

    true
}

/// Raw character capture for the search prompt
fn handle_search_input(app: &mut App, key_event: &KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }
    match key_event.code {
        KeyCode::Enter => app.apply_search(),
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => app.search_input.push(c),
        _ => {}
    }
}

/// Handle global keys - returns true if handled
fn handle_global_keys(
    app: &mut App,
    key_event: &KeyEvent,
    load_tx: &mpsc::Sender<Result<ContentBundle, LoadError>>,
    source: &Option<BundleSource>,
) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::help());
            }
            true
        }
        KeyCode::Char('y') => {
            if app.handle_key_press(key) {
                copy_selection(app);
            }
            true
        }
        KeyCode::Char('r') => {
            if app.handle_key_press(key) && !app.reloading {
                app.reloading = true;
                tracing::info!("Reloading content bundle");
                match source {
                    Some(src) => {
                        let src = src.clone();
                        let tx = load_tx.clone();
                        tokio::spawn(async move {
                            let _ = tx.send(content::load(&src).await).await;
                        });
                    }
                    None => {
                        let _ = load_tx.try_send(Ok(demo::sample_bundle()));
                    }
                }
            }
            true
        }
        KeyCode::Char('a') => {
            if app.handle_key_press(key) && app.consent_visible {
                app.accept_consent();
            }
            true
        }
        _ => false,
    }
}

/// Run a copy action through the SelectionGuard
///
/// Short selections copy verbatim with a visible confirmation. Long
/// selections get the rewritten payload silently (no toast on failure)
/// and open the citation dialog for an explicit follow-up copy.
fn copy_selection(app: &mut App) {
    let Some(text) = app.selection_text() else {
        return;
    };
    let outcome = match &app.guard {
        Some(guard) => guard.inspect(&text),
        None => return,
    };

    match outcome {
        CopyOutcome::PassThrough(payload) => {
            if clipboard::copy_to_clipboard(&payload).is_ok() {
                app.show_toast("✓ Copied to clipboard");
            } else {
                app.show_toast("✗ Failed to copy");
            }
        }
        CopyOutcome::Intercepted { payload, citation } => {
            if clipboard::copy_to_clipboard(&payload).is_err() {
                tracing::debug!("Automatic clipboard rewrite failed");
            }
            app.modal = Some(Modal::citation(citation));
        }
    }
}
