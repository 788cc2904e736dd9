use crate::form::{Phase, QueryMode};
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    pub mode: QueryMode,
    pub phase: Phase,
    pub api_base: &'a str,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let phase_fg = match self.phase {
            Phase::Failed => theme::ERROR_FG,
            Phase::Success => theme::SUCCESS_FG,
            _ => theme::ACCENT,
        };

        let separator = Span::styled(
            "\u{2502}",
            Style::default().fg(theme::BORDER_COLOR).bg(theme::STATUS_BG),
        );

        let line = Line::from(vec![
            Span::styled(
                format!(" mode: {} ", self.mode.label()),
                Style::default().bg(theme::STATUS_BG).add_modifier(Modifier::BOLD),
            ),
            separator.clone(),
            Span::styled(
                format!(" {} ", self.phase.label()),
                Style::default().fg(phase_fg).bg(theme::STATUS_BG),
            ),
            separator,
            Span::styled(
                format!(" {} ", self.api_base),
                Style::default().fg(theme::DIM_TEXT).bg(theme::STATUS_BG),
            ),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
