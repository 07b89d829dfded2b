// ABOUTME: Terminal rendering engine for covers and metadata text
// ABOUTME: Exposes the Renderable capability and terminal width lookup

use std::io::Write;

pub mod detail;
pub mod error;
pub mod fields;
pub mod list;
pub mod list_item;
pub mod pixels;
pub mod producer;
pub mod wrap;

pub use detail::DetailRenderer;
pub use error::RenderError;
pub use fields::{FieldKey, FieldSpec, FieldValue, MetadataRecord, DETAIL_FIELDS, LIST_FIELDS};
pub use list::ListDisplayer;
pub use list_item::{ListItemRenderer, OverflowPolicy};
pub use pixels::{Downsampler, PixelGrid, Rgb};
pub use producer::{Cursor, Overflow, RowSynchronizedProducer};

/// Something that can print itself to a terminal-like writer.
///
/// Output may be partially written when an error is returned.
pub trait Renderable {
    fn render_info(&self, out: &mut dyn Write) -> Result<(), RenderError>;
}

/// Current terminal width in columns.
pub fn terminal_columns() -> Result<usize, RenderError> {
    let (columns, _rows) = crossterm::terminal::size()
        .map_err(|e| RenderError::Configuration(e.to_string()))?;
    if columns == 0 {
        return Err(RenderError::Configuration(
            "terminal reported zero columns".to_string(),
        ));
    }
    Ok(columns as usize)
}

/// Uses the configured width when set, otherwise asks the terminal.
pub fn resolve_columns(configured: Option<usize>) -> Result<usize, RenderError> {
    match configured {
        Some(columns) if columns > 0 => Ok(columns),
        _ => terminal_columns(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_columns_win() {
        assert_eq!(resolve_columns(Some(120)).unwrap(), 120);
    }

    #[test]
    fn test_renderers_are_object_safe() {
        let renderers: Vec<Box<dyn Renderable>> = vec![
            Box::new(ListDisplayer::new("Genres", ["Drama"])),
            Box::new(ListDisplayer::new("Tags", ["To Watch", "Watched"])),
        ];
        let mut out = Vec::new();
        for renderer in &renderers {
            renderer.render_info(&mut out).unwrap();
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Genres:\n- Drama\nTags:\n- To Watch\n- Watched\n"
        );
    }
}
