use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::theme::blend;

pub struct HeaderWidget;

impl HeaderWidget {
    /// Draw the header over the top of `area`, shifted up by the current
    /// translation and faded toward the body background.
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let style = app.frame.style;
        let rows = app.header_rows();
        let hidden = (-style.translate_y).round().clamp(0.0, f64::from(rows)) as u16;
        let visible = rows.saturating_sub(hidden).min(area.height);
        if visible == 0 {
            return;
        }

        let theme = &app.theme;
        let bg = blend(theme.header_bg, theme.bg0, style.opacity);
        let fg = blend(theme.header_fg, theme.bg0, style.opacity);

        let inset = app.config.header.safe_area_top.round().max(0.0) as u16;
        let bar = rows.saturating_sub(inset);
        let title_row = inset + bar.saturating_sub(1) / 2;

        let lines: Vec<Line<'_>> = (0..rows)
            .map(|row| {
                if row == title_row {
                    Line::from(Span::styled(
                        app.config.header.title.as_str(),
                        Style::default().fg(fg).add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::default()
                }
            })
            .collect();

        let rect = Rect {
            height: visible,
            ..area
        };
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(bg))
            .scroll((hidden, 0));

        frame.render_widget(Clear, rect);
        frame.render_widget(paragraph, rect);
    }
}
