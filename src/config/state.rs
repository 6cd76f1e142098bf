// src/config/state.rs
use super::options::ViewOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Export text field; mapped onto `ViewOptions::export_path` on export
    pub export_path_text: String,
    pub export_path_dirty: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 720.0,
            window_h: 640.0,
            export_path_text: s!(),
            export_path_dirty: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: ViewOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: ViewOptions) -> Self {
        let gui = GuiState {
            export_path_text: options.export_path.to_string_lossy().into_owned(),
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
