use crate::github::types::LookupResult;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// Outcome of a submitted lookup, reported back by the fetch task.
    FetchDone(Result<LookupResult, crate::error::HublookError>),
    /// A reset timer fired: clear the input, keep the mode.
    ResetTimer,
}
