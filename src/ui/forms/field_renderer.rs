//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one input: bordered box plus the inline error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a single-line input with its inline error below it.
///
/// `area` should be [`FIELD_HEIGHT`] rows tall; the last row holds the error.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    error: Option<&str>,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(content.block(block), input_area);

    if let Some(message) = error {
        if area.height > 3 {
            let error_area = Rect {
                y: area.y + 3,
                height: 1,
                ..area
            };
            draw_message(frame, error_area, message, Color::Red);
        }
    }
}

/// Draw a one-line colored message (inline errors, banners)
pub fn draw_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let paragraph = Paragraph::new(Span::styled(message, Style::default().fg(color)));
    frame.render_widget(paragraph, area);
}
