// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Text in the input path field
    pub input_text: String,
    /// Text in the output path field; blank means default location
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub window_w: u32,
    pub window_h: u32,

    /// Preview table → show only the source column plus extracted columns
    pub compact_preview: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            input_text: s!(),
            out_path_text: s!(),
            out_path_dirty: false,
            window_w: 1100,
            window_h: 700,
            compact_preview: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
