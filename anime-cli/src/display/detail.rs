// ABOUTME: Detail-view renderer printing every field then the centered cover
// ABOUTME: Text uses the full terminal width; trailers print one per line

use std::io::Write;

use crate::constants::display::DEFAULT_GLYPH;
use crate::display::fields::{FieldKey, FieldSpec, FieldValue, MetadataRecord, DETAIL_FIELDS};
use crate::display::pixels::{write_pixels, PixelGrid};
use crate::display::wrap::layout_field;
use crate::display::{RenderError, Renderable};

pub struct DetailRenderer<'a> {
    record: &'a dyn MetadataRecord,
    grid: PixelGrid,
    fields: &'a [FieldSpec],
    columns: usize,
    glyph: char,
}

impl<'a> DetailRenderer<'a> {
    pub fn new(record: &'a dyn MetadataRecord, grid: PixelGrid, columns: usize) -> Self {
        Self {
            record,
            grid,
            fields: &DETAIL_FIELDS,
            columns,
            glyph: DEFAULT_GLYPH,
        }
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    fn write_field(&self, out: &mut dyn Write, spec: &FieldSpec) -> Result<(), RenderError> {
        let value = self.record.value(spec.key).ok_or_else(|| {
            RenderError::Layout(format!("record has no value for '{}'", spec.key))
        })?;

        if let (FieldKey::Trailers, FieldValue::Trailers(trailers)) = (spec.key, &value) {
            writeln!(out, "{}:", spec.label)?;
            for trailer in trailers {
                writeln!(out, "{}: {}", trailer.name, trailer.link)?;
            }
            return Ok(());
        }

        for line in layout_field(spec, &value, self.columns)? {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Blank columns on each side of the cover.
    fn margin(&self) -> usize {
        self.columns.saturating_sub(self.grid.width()) / 2
    }
}

impl Renderable for DetailRenderer<'_> {
    fn render_info(&self, out: &mut dyn Write) -> Result<(), RenderError> {
        for spec in self.fields {
            self.write_field(out, spec)?;
        }

        let margin = " ".repeat(self.margin());
        for row in self.grid.rows() {
            write!(out, "{margin}")?;
            write_pixels(out, row, self.glyph)?;
            writeln!(out, "{margin}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::pixels::Rgb;
    use tmdb_sdk::{AnimeDetails, AnimeListItem, Trailer};

    fn details(trailers: Vec<Trailer>) -> AnimeDetails {
        AnimeDetails {
            summary: AnimeListItem {
                api_id: 1429,
                title: "Attack on Titan".to_string(),
                overview: "Humans fight Titans behind three walls.".to_string(),
                genres: vec!["Animation".to_string(), "Drama".to_string()],
                release_date: "2013-04-07".to_string(),
                cover_url: None,
            },
            episodes_count: 94,
            seasons_count: 4,
            status: "Ended".to_string(),
            trailers,
        }
    }

    fn render(renderer: &DetailRenderer<'_>) -> String {
        let mut out = Vec::new();
        renderer.render_info(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_block_precedes_cover() {
        let details = details(vec![
            Trailer {
                name: "Official Trailer".to_string(),
                site: "YouTube".to_string(),
                link: "https://www.youtube.com/watch?v=MGRm4IzK1SQ".to_string(),
            },
            Trailer {
                name: "Final Season PV".to_string(),
                site: "YouTube".to_string(),
                link: "https://www.youtube.com/watch?v=SlNpRThS9t8".to_string(),
            },
        ]);
        let grid = PixelGrid::filled(4, 2, Rgb::new(1, 1, 1)).unwrap();
        let output = render(&DetailRenderer::new(&details, grid, 80));
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(
            &lines[..11],
            &[
                "ID: 1429",
                "Title: Attack on Titan",
                "Overview: Humans fight Titans behind three walls.",
                "Release Date: 2013-04-07",
                "Genres: Animation, Drama",
                "Number of episodes: 94",
                "Number of seasons: 4",
                "Status: Ended",
                "Trailers:",
                "Official Trailer: https://www.youtube.com/watch?v=MGRm4IzK1SQ",
                "Final Season PV: https://www.youtube.com/watch?v=SlNpRThS9t8",
            ]
        );
        assert_eq!(lines.len(), 13);
    }

    #[test]
    fn test_cover_is_centered() {
        let details = details(vec![]);
        let grid = PixelGrid::filled(30, 1, Rgb::new(0, 0, 0)).unwrap();
        let output = render(&DetailRenderer::new(&details, grid, 80).with_glyph('x'));
        let cover = output.lines().last().unwrap();

        let margin = " ".repeat(25);
        assert!(cover.starts_with(&format!("{margin}\x1b[38;2;0;0;0mx")));
        assert!(cover.ends_with(&format!("\x1b[0m{margin}")));
        assert_eq!(cover.matches("\x1b[0m").count(), 30);
    }

    #[test]
    fn test_fields_wrap_at_terminal_width() {
        let mut details = details(vec![]);
        details.summary.overview = "word ".repeat(30);
        let grid = PixelGrid::filled(4, 1, Rgb::new(0, 0, 0)).unwrap();
        let output = render(&DetailRenderer::new(&details, grid, 40));

        let overview: Vec<_> = output
            .lines()
            .skip_while(|l| !l.starts_with("Overview: "))
            .take_while(|l| !l.starts_with("Release Date: "))
            .collect();
        assert!(overview.len() > 1);
        assert!(overview.iter().all(|l| l.chars().count() <= 40));
    }

    #[test]
    fn test_narrow_terminal_margin_saturates() {
        let details = details(vec![]);
        let grid = PixelGrid::filled(30, 1, Rgb::new(0, 0, 0)).unwrap();
        let renderer = DetailRenderer::new(&details, grid, 20);
        assert_eq!(renderer.margin(), 0);
    }
}
