//! Sign-up form rendering

use super::field_renderer::{draw_field, draw_message, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FieldName, Focus, FormButton};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const CARD_WIDTH: u16 = 60;

/// Card height: fields, general error, success banner, buttons, borders
const CARD_HEIGHT: u16 = FIELD_HEIGHT * FieldName::ALL.len() as u16 + 1 + 1 + BUTTON_HEIGHT + 2;

/// Center a `width` x `height` rect inside `area`, clamped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the sign-up card
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let card = centered(area, CARD_WIDTH, CARD_HEIGHT);
    let form = &app.state.form;

    let block = Block::default()
        .title(" Sign Up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut constraints: Vec<Constraint> = FieldName::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.extend([
        Constraint::Length(1),             // General error
        Constraint::Length(1),             // Success message
        Constraint::Length(BUTTON_HEIGHT), // Buttons
        Constraint::Min(0),
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (name, chunk) in FieldName::ALL.iter().zip(chunks.iter()) {
        let value = form.fields().display_value(*name, app.mask_passwords());
        let error = form.errors().message(*name);
        draw_field(
            frame,
            *chunk,
            name.label(),
            &value,
            error.as_deref(),
            app.state.focus == Focus::Field(*name),
        );
    }

    let rest = FieldName::ALL.len();
    if let Some(general) = form.errors().general() {
        draw_message(frame, chunks[rest], general, Color::Red);
    }
    if let Some(success) = form.success() {
        draw_message(frame, chunks[rest + 1], success, Color::Green);
    }

    draw_buttons(frame, chunks[rest + 2], app);
}

/// Draw the Sign Up / Reset row
fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let on_buttons = app.state.focus == Focus::Buttons;
    let enabled = !app.state.form.is_busy();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (button, chunk, accent) in [
        (FormButton::SignUp, chunks[0], Color::Green),
        (FormButton::Reset, chunks[1], Color::Gray),
    ] {
        render_action_button(
            frame,
            chunk,
            button.label(),
            on_buttons && app.state.selected_button == button,
            enabled,
            Some(accent),
        );
    }
}
