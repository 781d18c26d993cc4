//! Application state management

use bmi_dial::BmiResult;

/// Main application state
pub struct AppState {
    /// Raw text inputs
    pub inputs: InputState,

    /// Last successful computation; None until the first Calculate
    pub result: Option<BmiResult>,

    /// UI state
    pub ui: UiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            inputs: InputState::default(),
            result: None,
            ui: UiState::default(),
        }
    }
}

/// Text field contents
#[derive(Default)]
pub struct InputState {
    pub weight: String,
    pub height: String,
}

/// UI-specific state
pub struct UiState {
    /// Modal error dialog text; the form is disabled while set
    pub error: Option<String>,

    /// Severe-obesity advisory dialog is open
    pub show_advisory: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            error: None,
            show_advisory: false,
        }
    }
}
