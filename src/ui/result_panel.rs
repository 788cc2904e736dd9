use crate::form::Phase;
use crate::github::types::LookupResult;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// Conditional result/error display under the form.
pub struct ResultPanel<'a> {
    pub result: Option<&'a LookupResult>,
    pub error: Option<&'a str>,
    pub phase: Phase,
}

impl<'a> ResultPanel<'a> {
    fn lines(&self) -> Vec<Line<'static>> {
        if let Some(error) = self.error {
            return vec![Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(theme::ERROR_FG),
            ))];
        }

        match self.result {
            Some(LookupResult::User(user)) => vec![
                field_line("Full Name: ", user.login.clone()),
                field_line("Repositories: ", user.public_repos.to_string()),
            ],
            Some(LookupResult::Repo(repo)) => vec![
                field_line("Repository Name: ", repo.full_name.clone()),
                field_line("Stars: ", repo.stargazers_count.to_string()),
            ],
            None => {
                let hint = if self.phase == Phase::Submitting {
                    "Waiting for GitHub\u{2026}"
                } else {
                    "No result yet"
                };
                vec![Line::from(Span::styled(
                    hint,
                    Style::default().fg(theme::DIM_TEXT),
                ))]
            }
        }
    }
}

fn field_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(theme::DIM_TEXT)),
        Span::styled(
            value,
            Style::default()
                .fg(theme::SUCCESS_FG)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

impl<'a> Widget for ResultPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_COLOR))
            .title(" result ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 {
            return;
        }

        for (i, line) in self.lines().iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            buf.set_line(inner.x + 1, y, line, inner.width.saturating_sub(1));
        }
    }
}
