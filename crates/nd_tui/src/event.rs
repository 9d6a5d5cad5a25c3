use crossterm::event::{Event as CrosstermEvent, KeyEvent, MouseEvent};

use crate::state::FetchOutcome;

/// Everything the shell loop reacts to, fanned into one channel.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    CategoriesReady,
    FetchDone {
        generation: u64,
        outcome: FetchOutcome,
    },
}

/// Maps a terminal event onto the shell's event type. Mouse events are
/// dropped while capture is off so a late burst cannot reach the state
/// machine after the dropdown closed.
pub fn convert_event(event: CrosstermEvent, mouse_enabled: bool) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) => Some(Event::Key(key)),
        CrosstermEvent::Mouse(mouse) if mouse_enabled => Some(Event::Mouse(mouse)),
        CrosstermEvent::Mouse(_) => None,
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}
