//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_signup(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::{FieldName, SUCCESS_MESSAGE};
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

    fn render_buffer(app: &App) -> Buffer {
        let backend = TestBackend::new(80, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn render(app: &App) -> String {
        let buffer = render_buffer(app);
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    /// Foreground color of the lowest "Sign Up" on screen, which is the button label
    fn sign_up_button_fg(buffer: &Buffer) -> Option<Color> {
        let label: Vec<String> = "Sign Up".chars().map(String::from).collect();
        let area = buffer.area;
        (0..area.height).rev().find_map(|y| {
            let row: Vec<&str> = (0..area.width).map(|x| buffer[(x, y)].symbol()).collect();
            row.windows(label.len())
                .position(|w| w.iter().zip(&label).all(|(a, b)| *a == b.as_str()))
                .map(|x| buffer[(x as u16, y)].fg)
        })
    }

    fn filled_app(config: TuiConfig) -> App {
        let mut app = App::new(config);
        app.state.form.set_field(FieldName::FirstName, "Ada");
        app.state.form.set_field(FieldName::LastName, "Lovelace");
        app.state.form.set_field(FieldName::Email, "ada@example.com");
        app.state.form.set_field(FieldName::Password, "secret1");
        app.state.form.set_field(FieldName::ConfirmPassword, "secret1");
        app
    }

    #[test]
    fn test_renders_labels_and_buttons() {
        let screen = render(&App::new(TuiConfig::default()));
        for name in FieldName::ALL {
            assert!(screen.contains(name.label()), "missing {}", name.label());
        }
        assert!(screen.contains("Sign Up"));
        assert!(screen.contains("Reset"));
    }

    #[test]
    fn test_renders_inline_errors_after_failed_submit() {
        let mut app = App::new(TuiConfig::default());
        app.state.form.submit();
        let screen = render(&app);
        assert!(screen.contains("First name is required."));
        assert!(screen.contains("Confirm password is required."));
    }

    #[test]
    fn test_renders_success_message() {
        let mut app = filled_app(TuiConfig::default());
        app.state.form.submit();
        assert!(render(&app).contains(SUCCESS_MESSAGE));
    }

    #[test]
    fn test_passwords_masked_by_default() {
        let screen = render(&filled_app(TuiConfig::default()));
        assert!(screen.contains("Lovelace"));
        assert!(!screen.contains("secret1"));
        assert!(screen.contains("•••••••"));
    }

    #[test]
    fn test_passwords_visible_when_masking_disabled() {
        let config = TuiConfig {
            mask_passwords: Some(false),
            ..Default::default()
        };
        assert!(render(&filled_app(config)).contains("secret1"));
    }

    #[test]
    fn test_buttons_render_disabled_while_busy() {
        let mut app = App::new(TuiConfig::default());
        assert_eq!(sign_up_button_fg(&render_buffer(&app)), Some(Color::Green));

        app.state.form.begin_submission();
        let buffer = render_buffer(&app);
        assert_eq!(sign_up_button_fg(&buffer), Some(Color::DarkGray));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let backend = TestBackend::new(10, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = App::new(TuiConfig::default());
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
