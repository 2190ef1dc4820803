use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Text},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Blank rows between the resting header and the first paragraph
const BODY_PADDING: u16 = 1;

pub struct BodyWidget;

impl BodyWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let offset = app.scroll_y().round().max(0.0) as u16;
        frame.render_widget(Self::paragraph(app).scroll((offset, 0)), area);
    }

    /// The full body, starting with the header reservation.
    ///
    /// Also used for layout, so the wrapped row count matches what is drawn.
    pub fn paragraph(app: &App) -> Paragraph<'_> {
        let reserved = app.header_rows() + BODY_PADDING;
        let mut lines: Vec<Line<'_>> = (0..reserved).map(|_| Line::default()).collect();

        for (i, paragraph) in app.paragraphs.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(paragraph.as_str()));
        }
        lines.extend((0..BODY_PADDING).map(|_| Line::default()));

        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(app.theme.fg0).bg(app.theme.bg0))
    }
}
