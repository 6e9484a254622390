//! src/controller/event_loop.rs
//! ============================================================================
//! # Controller: Event Source, Key Mapping and Dispatch
//!
//! The Controller merges terminal events with a periodic tick, maps keys to
//! [`Action`]s according to the current mode and overlay, and applies actions
//! to [`AppState`]. All state changes happen on the caller's task; nothing
//! here is shared across threads.

use std::time::Duration;

use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::time::{Interval, MissedTickBehavior, interval};
use tracing::{debug, trace, warn};

use crate::controller::actions::Action;
use crate::model::app_state::AppState;
use crate::model::ui_state::UIOverlay;
use crate::view::components::detail_view::DetailView;

const TICK_RATE: Duration = Duration::from_millis(250);

pub struct Controller {
    events: EventStream,
    tick: Interval,
}

impl Controller {
    pub fn new() -> Self {
        let mut tick = interval(TICK_RATE);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            events: EventStream::new(),
            tick,
        }
    }

    /// Waits for the next terminal event or tick and maps it to an action.
    /// Returns `None` once the terminal event stream has ended.
    pub async fn next_action(&mut self, app: &AppState) -> Option<Action> {
        loop {
            tokio::select! {
                _ = self.tick.tick() => return Some(Action::Tick),

                maybe_event = self.events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if let Some(action) = Self::map_event(app, event) {
                                return Some(action);
                            }
                        }
                        Some(Err(e)) => warn!("Terminal event error: {}", e),
                        None => return None,
                    }
                }
            }
        }
    }

    #[must_use]
    pub fn map_event(app: &AppState, event: TermEvent) -> Option<Action> {
        match event {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => Self::map_key(app, key),
            TermEvent::Resize(width, height) => Some(Action::Resize(width, height)),
            _ => None,
        }
    }

    /// Mode- and overlay-aware key bindings.
    #[must_use]
    pub fn map_key(app: &AppState, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }

        match app.ui.overlay {
            UIOverlay::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('h' | '?' | 'q') | KeyCode::F(1) => {
                    Some(Action::ToggleHelp)
                }
                _ => None,
            },

            UIOverlay::FilterMenu => match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(Action::FilterMenuUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::FilterMenuDown),
                KeyCode::Enter => Some(Action::ApplyFilterSelection),
                KeyCode::Esc | KeyCode::Char('f' | 'q') => Some(Action::CloseOverlay),
                _ => None,
            },

            UIOverlay::Detail => match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollDetailUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDetailDown),
                KeyCode::Char('d') | KeyCode::Delete => Some(Action::RequestDelete),
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter | KeyCode::Char('q') => {
                    Some(Action::CloseOverlay)
                }
                _ => None,
            },

            UIOverlay::ConfirmDelete => match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Action::ConfirmDelete),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::CancelDelete),
                _ => None,
            },

            UIOverlay::None if app.ui.is_searching() => match key.code {
                KeyCode::Char(c) => Some(Action::SearchInput(c)),
                KeyCode::Backspace => Some(Action::SearchBackspace),
                KeyCode::Enter => Some(Action::SubmitSearch),
                KeyCode::Esc => Some(Action::ClearSearch),
                KeyCode::Up => Some(Action::MoveSelectionUp),
                KeyCode::Down => Some(Action::MoveSelectionDown),
                _ => None,
            },

            UIOverlay::None => match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveSelectionUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveSelectionDown),
                KeyCode::PageUp => Some(Action::PageUp),
                KeyCode::PageDown => Some(Action::PageDown),
                KeyCode::Enter => Some(Action::OpenDetail),
                KeyCode::Char('/') => Some(Action::EnterSearch),
                KeyCode::Char('s') => Some(Action::ToggleSort),
                KeyCode::Char('f') => Some(Action::OpenFilterMenu),
                KeyCode::Char('r') => Some(Action::ResetFilter),
                KeyCode::Char('d') | KeyCode::Delete => Some(Action::RequestDelete),
                KeyCode::Char('h' | '?') | KeyCode::F(1) => Some(Action::ToggleHelp),
                KeyCode::Esc if app.ui.notification.is_some() => {
                    Some(Action::DismissNotification)
                }
                KeyCode::Esc if !app.query().search.is_empty() => Some(Action::ClearSearch),
                _ => None,
            },
        }
    }

    /// Applies one action. Returns `false` when the application should exit.
    pub fn dispatch(app: &mut AppState, action: Action) -> bool {
        if !matches!(action, Action::Tick) {
            debug!("Dispatching action: {:?}", action);
        }

        match action {
            Action::Quit => return false,

            Action::Resize(width, height) => {
                trace!("Resize to {}x{}", width, height);
                // header, borders and footer take five rows
                app.ui.page_size = usize::from(height.saturating_sub(5)).max(1);
                app.redraw = true;
            }

            Action::Tick => {
                if app.ui.update_notification() {
                    app.redraw = true;
                }
            }

            Action::MoveSelectionUp => {
                let len = app.visible().len();
                app.ui.move_selection_up(len);
                app.redraw = true;
            }
            Action::MoveSelectionDown => {
                let len = app.visible().len();
                app.ui.move_selection_down(len);
                app.redraw = true;
            }
            Action::PageUp => {
                let len = app.visible().len();
                app.ui.page_up(len);
                app.redraw = true;
            }
            Action::PageDown => {
                let len = app.visible().len();
                app.ui.page_down(len);
                app.redraw = true;
            }

            Action::OpenDetail => app.open_detail(),
            Action::ScrollDetailUp => {
                app.ui.scroll_detail_up();
                app.redraw = true;
            }
            Action::ScrollDetailDown => {
                let max = app.detail_predator().map_or(0, DetailView::max_scroll);
                app.ui.scroll_detail_down(max);
                app.redraw = true;
            }

            Action::CloseOverlay => app.close_overlay(),
            Action::ToggleHelp => {
                app.ui.toggle_help_overlay();
                app.redraw = true;
            }
            Action::DismissNotification => {
                app.ui.dismiss_notification();
                app.clear_msgs();
            }

            Action::EnterSearch => {
                app.ui.enter_search_mode();
                app.redraw = true;
            }
            Action::SearchInput(c) => app.push_search_char(c),
            Action::SearchBackspace => app.pop_search_char(),
            Action::SubmitSearch => {
                app.ui.exit_search_mode();
                app.redraw = true;
            }
            Action::ClearSearch => {
                app.clear_search();
                app.ui.exit_search_mode();
                app.redraw = true;
            }

            Action::ToggleSort => app.toggle_sort(),

            Action::OpenFilterMenu => app.open_filter_menu(),
            Action::FilterMenuUp => {
                app.ui.menu_up();
                app.redraw = true;
            }
            Action::FilterMenuDown => {
                app.ui.menu_down(app.menu_options.len());
                app.redraw = true;
            }
            Action::ApplyFilterSelection => app.apply_menu_selection(),
            Action::ResetFilter => app.reset_filter(),

            Action::RequestDelete => app.request_delete(),
            Action::ConfirmDelete => app.confirm_delete(),
            Action::CancelDelete => app.cancel_delete(),
        }

        true
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
