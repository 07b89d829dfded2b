// ABOUTME: Compact list-view renderer pairing cover rows with metadata lines
// ABOUTME: Each output row is pixels, a separator, then one producer line

use std::io::Write;

use crate::constants::display::{DEFAULT_GLYPH, DIVIDER, SEPARATOR};
use crate::display::fields::{FieldSpec, MetadataRecord, LIST_FIELDS};
use crate::display::pixels::{write_pixels, PixelGrid};
use crate::display::producer::RowSynchronizedProducer;
use crate::display::{RenderError, Renderable};

/// What to do when the fields need more rows than the cover has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Stop at the last image row and log the clipped field
    #[default]
    Clip,
    /// Refuse to render; nothing is written
    Fail,
}

pub struct ListItemRenderer<'a> {
    record: &'a dyn MetadataRecord,
    grid: PixelGrid,
    fields: &'a [FieldSpec],
    columns: usize,
    glyph: char,
    overflow_policy: OverflowPolicy,
}

impl<'a> ListItemRenderer<'a> {
    pub fn new(record: &'a dyn MetadataRecord, grid: PixelGrid, columns: usize) -> Self {
        Self {
            record,
            grid,
            fields: &LIST_FIELDS,
            columns,
            glyph: DEFAULT_GLYPH,
            overflow_policy: OverflowPolicy::default(),
        }
    }

    pub fn with_fields(mut self, fields: &'a [FieldSpec]) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Columns left for text once the image and separator are placed.
    pub fn pad_width(&self) -> Result<usize, RenderError> {
        self.columns
            .checked_sub(self.grid.width() + 1)
            .filter(|pad| *pad > 0)
            .ok_or_else(|| {
                RenderError::Layout(format!(
                    "{} columns cannot fit a {}-column cover and its text",
                    self.columns,
                    self.grid.width()
                ))
            })
    }

    /// Text for every image row, computed before anything is written.
    fn text_rows(&self) -> Result<Vec<String>, RenderError> {
        let height = self.grid.height();
        let mut producer =
            RowSynchronizedProducer::new(self.record, self.fields, self.pad_width()?, height);
        let rows = producer.take_rows(height)?;

        if let Some(overflow) = producer.overflow() {
            match self.overflow_policy {
                OverflowPolicy::Clip => log::warn!(
                    "Clipped '{}' and {} later field(s) after {} rows",
                    overflow.label,
                    overflow.remaining_fields - 1,
                    height
                ),
                OverflowPolicy::Fail => {
                    return Err(RenderError::Layout(format!(
                        "'{}' does not fit beside a {height}-row cover",
                        overflow.label
                    )))
                }
            }
        }

        Ok(rows)
    }
}

impl Renderable for ListItemRenderer<'_> {
    fn render_info(&self, out: &mut dyn Write) -> Result<(), RenderError> {
        let rows = self.text_rows()?;

        for (pixels, text) in self.grid.rows().zip(&rows) {
            write_pixels(out, pixels, self.glyph)?;
            writeln!(out, "{SEPARATOR}{text}")?;
        }
        writeln!(out, "{}", DIVIDER.to_string().repeat(self.columns))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::pixels::Rgb;
    use tmdb_sdk::AnimeListItem;

    fn item(overview: &str) -> AnimeListItem {
        AnimeListItem {
            api_id: 1429,
            title: "Attack on Titan".to_string(),
            overview: overview.to_string(),
            genres: vec!["Animation".to_string()],
            release_date: "2013-04-07".to_string(),
            cover_url: None,
        }
    }

    fn render(renderer: &ListItemRenderer<'_>) -> Result<String, RenderError> {
        let mut out = Vec::new();
        renderer.render_info(&mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_row_layout() {
        let item = item("Titans.");
        let grid = PixelGrid::filled(2, 5, Rgb::new(9, 8, 7)).unwrap();
        let output = render(&ListItemRenderer::new(&item, grid, 40).with_glyph('#')).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 6);
        let pixel = "\x1b[38;2;9;8;7m#\x1b[0m";
        assert_eq!(lines[0], format!("{pixel}{pixel}|ID: 1429"));
        assert_eq!(lines[3], format!("{pixel}{pixel}|Release Date: 2013-04-07"));
        assert_eq!(lines[4], format!("{pixel}{pixel}|Genres: Animation"));
        assert_eq!(lines[5], "-".repeat(40));
    }

    #[test]
    fn test_clip_policy_emits_one_line_per_row() {
        let item = item(&"lorem ipsum ".repeat(40));
        let grid = PixelGrid::filled(30, 4, Rgb::new(0, 0, 0)).unwrap();
        let output = render(&ListItemRenderer::new(&item, grid, 50)).unwrap();

        assert_eq!(output.lines().filter(|l| l.contains('|')).count(), 4);
        assert!(!output.contains("Genres"));
    }

    #[test]
    fn test_fail_policy_writes_nothing() {
        let item = item(&"lorem ipsum ".repeat(40));
        let grid = PixelGrid::filled(30, 4, Rgb::new(0, 0, 0)).unwrap();
        let renderer =
            ListItemRenderer::new(&item, grid, 50).with_overflow_policy(OverflowPolicy::Fail);

        let mut out = Vec::new();
        let result = renderer.render_info(&mut out);
        assert!(matches!(result, Err(RenderError::Layout(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_terminal_too_narrow() {
        let item = item("x");
        let grid = PixelGrid::filled(30, 2, Rgb::new(0, 0, 0)).unwrap();
        let renderer = ListItemRenderer::new(&item, grid, 31);
        assert!(matches!(renderer.pad_width(), Err(RenderError::Layout(_))));
        assert!(render(&renderer).is_err());
    }
}
