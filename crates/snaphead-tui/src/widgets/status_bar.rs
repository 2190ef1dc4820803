use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let status_text = app.status_line();

        let help_hint = " q:quit j/k/wheel:scroll +/-:header ";
        let padding_len = area.width.saturating_sub(
            status_text.len() as u16 + help_hint.len() as u16,
        ) as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg1).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.grey2).bg(theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
