use crate::error::HublookError;
use crate::github::types::LookupResult;
use crate::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    User,
    Repo,
}

impl QueryMode {
    pub fn toggled(self) -> Self {
        match self {
            QueryMode::User => QueryMode::Repo,
            QueryMode::Repo => QueryMode::User,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QueryMode::User => "User",
            QueryMode::Repo => "Repo",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            QueryMode::User => "Username...",
            QueryMode::Repo => "owner/repo...",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Success,
    Failed,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Submitting => "submitting",
            Phase::Success => "success",
            Phase::Failed => "failed",
        }
    }
}

/// The one in-memory form session: field values, transition phase, and the
/// transient result/error from the last lookup.
pub struct FormState {
    pub mode: QueryMode,
    pub input: String,
    pub phase: Phase,
    pub result: Option<LookupResult>,
    pub error: Option<String>,
    pub validation: Option<&'static str>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            mode: QueryMode::User,
            input: String::new(),
            phase: Phase::Idle,
            result: None,
            error: None,
            validation: None,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switching mode wipes the whole session: input, result, error, and any
    /// inline message go away immediately.
    pub fn set_mode(&mut self, mode: QueryMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.input.clear();
        self.phase = Phase::Idle;
        self.result = None;
        self.error = None;
        self.validation = None;
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.revalidate();
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.revalidate();
    }

    // Live message while editing: an empty field shows nothing yet, but
    // can_submit still gates it.
    fn revalidate(&mut self) {
        self.validation = if self.input.is_empty() {
            None
        } else {
            validate::validate(self.mode, &self.input).err()
        };
    }

    pub fn can_submit(&self) -> bool {
        validate::validate(self.mode, &self.input).is_ok()
    }

    /// Attempts a submit. On valid input this clears the previous outcome,
    /// moves to Submitting, and hands back the input to look up; otherwise
    /// the failing rule's message becomes the inline error and nothing else
    /// changes. In-flight requests are not guarded against resubmits.
    pub fn submit(&mut self) -> Option<String> {
        match validate::validate(self.mode, &self.input) {
            Ok(()) => {
                self.validation = None;
                self.result = None;
                self.error = None;
                self.phase = Phase::Submitting;
                Some(self.input.clone())
            }
            Err(message) => {
                self.validation = Some(message);
                None
            }
        }
    }

    pub fn fetch_done(&mut self, outcome: Result<LookupResult, HublookError>) {
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                self.phase = Phase::Success;
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.phase = Phase::Failed;
            }
        }
    }

    /// The timed reset: input cleared, mode retained, the displayed
    /// result/error left in place until the next submit or mode change.
    /// Idempotent, so racing timers from rapid resubmits are harmless.
    pub fn reset_input(&mut self) {
        self.input.clear();
        self.validation = None;
        self.phase = Phase::Idle;
    }
}
