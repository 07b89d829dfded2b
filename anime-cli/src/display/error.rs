// ABOUTME: Error taxonomy for the terminal rendering engine
// ABOUTME: Decode, layout and terminal configuration failures plus output I/O

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to decode cover image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Terminal unavailable: {0}")]
    Configuration(String),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            RenderError::Configuration(_) => {
                Some("Set `terminal_columns` in anime-list.toml when output is not a terminal")
            }
            RenderError::Layout(_) => Some("Try a wider terminal window"),
            _ => None,
        }
    }
}
