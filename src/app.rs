use crate::config::Config;
use crate::event::AppEvent;
use crate::form::FormState;
use crate::github::types;
use crate::ui::{
    form_view::FormView,
    input::{self, Action},
    result_panel::ResultPanel,
    status_bar::StatusBar,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub struct App {
    pub config: Config,
    pub form: FormState,

    /// URL of a lookup the main loop still has to spawn.
    pending_fetch: Option<String>,
    /// A completed lookup still needs its reset timer scheduled.
    pending_reset: bool,

    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            form: FormState::new(),
            pending_fetch: None,
            pending_reset: false,
            should_quit: false,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key);
                self.handle_action(action);
            }
            AppEvent::FetchDone(outcome) => {
                self.form.fetch_done(outcome);
                self.pending_reset = true;
            }
            AppEvent::ResetTimer => self.form.reset_input(),
            AppEvent::Resize => {}
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleMode => self.form.toggle_mode(),
            Action::InputChar(c) => self.form.push_char(c),
            Action::InputBackspace => self.form.backspace(),
            Action::Submit => {
                if let Some(input) = self.form.submit() {
                    self.pending_fetch =
                        Some(types::lookup_url(&self.config.api_base, self.form.mode, &input));
                }
            }
            Action::None => {}
        }
    }

    pub fn take_pending_fetch(&mut self) -> Option<String> {
        self.pending_fetch.take()
    }

    pub fn take_pending_reset(&mut self) -> bool {
        std::mem::take(&mut self.pending_reset)
    }

    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(size);

        let form = FormView {
            mode: self.form.mode,
            input: &self.form.input,
            validation: self.form.validation,
            phase: self.form.phase,
            can_submit: self.form.can_submit(),
        };
        frame.render_widget(form, chunks[0]);

        let result = ResultPanel {
            result: self.form.result.as_ref(),
            error: self.form.error.as_deref(),
            phase: self.form.phase,
        };
        frame.render_widget(result, chunks[1]);

        let status = StatusBar {
            mode: self.form.mode,
            phase: self.form.phase,
            api_base: &self.config.api_base,
        };
        frame.render_widget(status, chunks[2]);
    }
}
