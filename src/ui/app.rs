//! Main application state and UI loop
//!
//! Contains the App struct, key mapping and the main event loop

use crate::consts::cli_consts::{SPLASH_DURATION_MS, UI_POLL_INTERVAL_MS};
use crate::events::Event as WorkerEvent;
use crate::firestore::DocumentSource;
use crate::store::LocalStore;
use crate::ui::portfolio::{PortfolioView, Tab, ViewAction, render_portfolio};
use crate::ui::splash::render_splash;
use crate::workers::EventSender;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The mounted portfolio view.
    Portfolio(Box<PortfolioView>),
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Quit,
    View(ViewAction),
}

/// Maps a key to the intent it carries on the portfolio screen.
pub fn intent_for_key(code: KeyCode) -> Option<KeyIntent> {
    let action = match code {
        KeyCode::Esc | KeyCode::Char('q') => return Some(KeyIntent::Quit),
        KeyCode::Char('1') => ViewAction::SelectTab(Tab::Projects),
        KeyCode::Char('2') => ViewAction::SelectTab(Tab::Certificates),
        KeyCode::Char('3') => ViewAction::SelectTab(Tab::TechStack),
        KeyCode::Left | KeyCode::Char('h') => ViewAction::SwipePrevious,
        KeyCode::Right | KeyCode::Char('l') => ViewAction::SwipeNext,
        KeyCode::Up | KeyCode::Char('k') => ViewAction::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => ViewAction::ScrollDown,
        KeyCode::Tab => ViewAction::CycleNext,
        KeyCode::BackTab => ViewAction::CyclePrevious,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('m') => ViewAction::ActivateToggle,
        _ => return None,
    };
    Some(KeyIntent::View(action))
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Remote collections the portfolio view reads on mount.
    source: Arc<dyn DocumentSource>,

    /// Local persistent store the fetched collections are mirrored into.
    store: LocalStore,

    /// Handed to the fetch task started on mount.
    event_sender: EventSender,

    /// Receives events from background tasks.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Whether to paint background colors
    with_background_color: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        source: Arc<dyn DocumentSource>,
        store: LocalStore,
        event_sender: EventSender,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        with_background_color: bool,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            source,
            store,
            event_sender,
            event_receiver,
            with_background_color,
        }
    }

    /// Leaves the splash screen and mounts the portfolio view.
    fn show_portfolio(&mut self) {
        let view = PortfolioView::mount(
            self.source.clone(),
            self.store.clone(),
            self.event_sender.clone(),
            self.with_background_color,
        );
        self.current_screen = Screen::Portfolio(Box::new(view));
    }

    /// Unmounts the portfolio view, if it is showing.
    fn shutdown(&mut self) {
        if let Screen::Portfolio(view) = &mut self.current_screen {
            view.unmount();
        }
        self.current_screen = Screen::Splash;
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    loop {
        // Queue all incoming events for display
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Portfolio(view) = &mut app.current_screen {
                view.add_to_activity_log(event);
            }
        }

        if let Screen::Portfolio(view) = &mut app.current_screen {
            view.poll_fetch();
        }

        terminal.draw(|f| render(f, &mut app.current_screen))?;

        if matches!(app.current_screen, Screen::Splash) && splash_start.elapsed() >= splash_duration
        {
            app.show_portfolio();
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                let intent = intent_for_key(key.code);
                if intent == Some(KeyIntent::Quit) {
                    app.shutdown();
                    return Ok(());
                }

                if let Screen::Portfolio(view) = &mut app.current_screen {
                    if let Some(KeyIntent::View(action)) = intent {
                        view.perform(action);
                    }
                } else {
                    // Any other key skips the splash screen
                    app.show_portfolio();
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &mut Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Portfolio(view) => render_portfolio(f, view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_keys_select_tabs() {
        assert_eq!(
            intent_for_key(KeyCode::Char('2')),
            Some(KeyIntent::View(ViewAction::SelectTab(Tab::Certificates)))
        );
        assert_eq!(
            intent_for_key(KeyCode::Char('3')),
            Some(KeyIntent::View(ViewAction::SelectTab(Tab::TechStack)))
        );
        assert_eq!(intent_for_key(KeyCode::Char('4')), None);
    }

    #[test]
    fn test_arrows_swipe() {
        assert_eq!(
            intent_for_key(KeyCode::Left),
            Some(KeyIntent::View(ViewAction::SwipePrevious))
        );
        assert_eq!(
            intent_for_key(KeyCode::Char('l')),
            Some(KeyIntent::View(ViewAction::SwipeNext))
        );
    }

    #[test]
    fn test_vertical_keys_scroll() {
        assert_eq!(
            intent_for_key(KeyCode::Down),
            Some(KeyIntent::View(ViewAction::ScrollDown))
        );
        assert_eq!(
            intent_for_key(KeyCode::Char('k')),
            Some(KeyIntent::View(ViewAction::ScrollUp))
        );
    }

    #[test]
    fn test_quit_and_toggle_keys() {
        assert_eq!(intent_for_key(KeyCode::Esc), Some(KeyIntent::Quit));
        assert_eq!(intent_for_key(KeyCode::Char('q')), Some(KeyIntent::Quit));
        assert_eq!(
            intent_for_key(KeyCode::Enter),
            Some(KeyIntent::View(ViewAction::ActivateToggle))
        );
    }
}
