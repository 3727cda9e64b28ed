//! Layout and status bar

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Focus, SubmissionStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the main area and a one-row status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Keyboard hints for the current focus
fn get_hints(focus: Focus) -> String {
    match focus {
        Focus::Field(_) => format!(
            "Tab:next  Enter:next  {SUBMIT_SHORTCUT}:sign up  {RESET_SHORTCUT}:reset  Esc:quit"
        ),
        Focus::Buttons => "←/→:select  Enter:press  Tab:next  Esc:quit".to_string(),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        get_hints(app.state.focus),
        Style::default().fg(Color::White),
    )];

    let status = match app.state.form.status() {
        SubmissionStatus::Idle if !app.state.form.errors().is_empty() => {
            Some(("Fix the highlighted fields", Color::Red))
        }
        SubmissionStatus::Idle => None,
        SubmissionStatus::InProgress => Some(("Submitting…", Color::Yellow)),
        SubmissionStatus::Succeeded => Some(("Signed up", Color::Green)),
    };
    if let Some((msg, color)) = status {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldName;

    #[test]
    fn test_field_hints_mention_shortcuts() {
        let hints = get_hints(Focus::Field(FieldName::Email));
        assert!(hints.contains(SUBMIT_SHORTCUT));
        assert!(hints.contains(RESET_SHORTCUT));
    }

    #[test]
    fn test_button_hints() {
        assert!(get_hints(Focus::Buttons).contains("Enter:press"));
    }

    #[test]
    fn test_create_layout_reserves_status_row() {
        let (main, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(main.height, 23);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
    }
}
