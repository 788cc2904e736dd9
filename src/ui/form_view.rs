use crate::form::{Phase, QueryMode};
use crate::ui::{theme, truncate_with_ellipsis};
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// The form itself: mode selector, text input with cursor, inline validation
/// message, and the submit control.
pub struct FormView<'a> {
    pub mode: QueryMode,
    pub input: &'a str,
    pub validation: Option<&'a str>,
    pub phase: Phase,
    pub can_submit: bool,
}

impl<'a> FormView<'a> {
    fn mode_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            "Query: ",
            Style::default().fg(theme::DIM_TEXT),
        )];
        for mode in [QueryMode::User, QueryMode::Repo] {
            let style = if mode == self.mode {
                Style::default()
                    .fg(theme::ACCENT)
                    .bg(theme::SELECTED_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::DIM_TEXT)
            };
            spans.push(Span::styled(format!(" {} ", mode.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            "(Tab or \u{2190}\u{2192} switches)",
            Style::default().fg(theme::DIM_TEXT),
        ));
        Line::from(spans)
    }

    fn input_line(&self, width: usize) -> Line<'static> {
        if self.input.is_empty() {
            return Line::from(vec![
                Span::raw("> "),
                Span::styled(
                    self.mode.placeholder().to_string(),
                    Style::default().fg(theme::DIM_TEXT),
                ),
                Span::styled("\u{258c}", Style::default().fg(theme::CURSOR_FG)),
            ]);
        }
        let text = truncate_with_ellipsis(self.input, width.saturating_sub(4));
        Line::from(vec![
            Span::raw("> "),
            Span::raw(text),
            Span::styled("\u{258c}", Style::default().fg(theme::CURSOR_FG)),
        ])
    }

    fn submit_line(&self) -> Line<'static> {
        if self.phase == Phase::Submitting {
            return Line::from(Span::styled(
                "[ fetching\u{2026} ]",
                Style::default().fg(theme::ACCENT),
            ));
        }
        let style = if self.can_submit {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::DIM_TEXT)
        };
        // An untouched empty field is merely disabled, not at fault.
        let hint = if self.can_submit {
            "  Enter"
        } else if self.validation.is_some() {
            "  (fix input first)"
        } else {
            ""
        };
        Line::from(vec![
            Span::styled("[ Submit ]", style),
            Span::styled(hint, Style::default().fg(theme::DIM_TEXT)),
        ])
    }
}

impl<'a> Widget for FormView<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_COLOR))
            .title(" hublook ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let bottom = inner.bottom();
        let mut y = inner.y;
        let mut put = |line: &Line, buf: &mut Buf| {
            if y < bottom {
                buf.set_line(inner.x + 1, y, line, inner.width.saturating_sub(1));
            }
            y += 1;
        };

        put(&self.mode_line(), buf);
        put(&self.input_line(inner.width as usize), buf);

        if let Some(message) = self.validation {
            put(
                &Line::from(Span::styled(
                    message.to_string(),
                    Style::default().fg(theme::ERROR_FG),
                )),
                buf,
            );
        } else {
            put(&Line::default(), buf);
        }

        put(&self.submit_line(), buf);
    }
}
