//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, FieldName, Focus, FormButton, SubmissionStatus};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        Self {
            state: AppState::default(),
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn mask_passwords(&self) -> bool {
        self.config.mask_passwords()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_buttons = self.state.focus == Focus::Buttons;

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.focus = self.state.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.state.focus = self.state.focus.prev(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('r')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::RESET_MODIFIER) =>
            {
                self.reset()
            }
            // Button row navigation
            KeyCode::Left | KeyCode::Right if on_buttons => {
                self.state.selected_button = self.state.selected_button.toggle();
            }
            KeyCode::Enter if on_buttons => match self.state.selected_button {
                FormButton::SignUp => self.submit(),
                FormButton::Reset => self.reset(),
            },
            // Form field input (only when a field has focus)
            KeyCode::Enter => {
                if self.state.focus == Focus::Field(FieldName::ConfirmPassword) {
                    self.submit();
                } else {
                    self.state.focus = self.state.focus.next();
                }
            }
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                if let Some(field) = self.state.focus.field() {
                    self.state.form.push_char(field, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.focus.field() {
                    self.state.form.pop_char(field);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// "Sign Up" activation
    fn submit(&mut self) {
        if self.state.form.is_busy() {
            tracing::debug!("Ignoring submit while busy");
            return;
        }
        match self.state.form.submit() {
            SubmissionStatus::Succeeded => tracing::info!("Signup form submitted successfully"),
            status => {
                let failed: Vec<_> = self
                    .state
                    .form
                    .errors()
                    .failed_fields()
                    .iter()
                    .map(|f| f.label())
                    .collect();
                tracing::info!(?status, ?failed, "Signup form failed validation");
            }
        }
    }

    /// "Reset" activation
    fn reset(&mut self) {
        if self.state.form.is_busy() {
            tracing::debug!("Ignoring reset while busy");
            return;
        }
        self.state.form.reset();
        self.state.focus = Focus::default();
        self.state.selected_button = FormButton::default();
        tracing::info!("Signup form reset");
    }
}
