// ABOUTME: Row-synchronized text producer for the compact list view
// ABOUTME: Emits one text line per image row from an ordered field table

use crate::display::fields::{FieldKey, FieldSpec, MetadataRecord};
use crate::display::wrap::layout_field;
use crate::display::RenderError;

/// Progress through the field table for one render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub field_index: usize,
    pub line_index: usize,
    pub rows_emitted: usize,
}

/// Field content that did not fit beside the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overflow {
    pub label: &'static str,
    pub remaining_fields: usize,
}

#[derive(Debug)]
struct RenderField {
    lines: Vec<String>,
}

pub struct RowSynchronizedProducer<'a, R: MetadataRecord + ?Sized> {
    record: &'a R,
    fields: &'a [FieldSpec],
    pad_width: usize,
    grid_height: usize,
    cursor: Cursor,
    current: Option<RenderField>,
}

impl<'a, R: MetadataRecord + ?Sized> RowSynchronizedProducer<'a, R> {
    pub fn new(
        record: &'a R,
        fields: &'a [FieldSpec],
        pad_width: usize,
        grid_height: usize,
    ) -> Self {
        Self {
            record,
            fields,
            pad_width,
            grid_height,
            cursor: Cursor::default(),
            current: None,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns the text for the next image row.
    ///
    /// Before the first release date line a blank row is emitted while at
    /// least two rows remain below, so the trailing fields sit at the bottom
    /// of the image. Once every field is exhausted, rows are blank.
    pub fn next_line(&mut self) -> Result<String, RenderError> {
        loop {
            let Some(spec) = self.fields.get(self.cursor.field_index).copied() else {
                return Ok(self.emit(String::new()));
            };

            let field = match self.current.take() {
                Some(field) => field,
                None => RenderField {
                    lines: self.layout(&spec)?,
                },
            };

            if field.lines.is_empty() {
                self.advance_field();
                continue;
            }

            if spec.key == FieldKey::ReleaseDate
                && self.cursor.line_index == 0
                && self.cursor.rows_emitted + 2 < self.grid_height
            {
                self.current = Some(field);
                return Ok(self.emit(String::new()));
            }

            let line = field.lines[self.cursor.line_index].clone();
            self.cursor.line_index += 1;
            if self.cursor.line_index >= field.lines.len() {
                self.advance_field();
            } else {
                self.current = Some(field);
            }
            return Ok(self.emit(line));
        }
    }

    /// Produces the next `rows` lines.
    pub fn take_rows(&mut self, rows: usize) -> Result<Vec<String>, RenderError> {
        (0..rows).map(|_| self.next_line()).collect()
    }

    /// Reports the first field not fully emitted, if any.
    pub fn overflow(&self) -> Option<Overflow> {
        self.fields
            .get(self.cursor.field_index)
            .map(|spec| Overflow {
                label: spec.label,
                remaining_fields: self.fields.len() - self.cursor.field_index,
            })
    }

    fn layout(&self, spec: &FieldSpec) -> Result<Vec<String>, RenderError> {
        let value = self.record.value(spec.key).ok_or_else(|| {
            RenderError::Layout(format!("record has no value for '{}'", spec.key))
        })?;
        layout_field(spec, &value, self.pad_width)
    }

    fn advance_field(&mut self) {
        self.cursor.field_index += 1;
        self.cursor.line_index = 0;
        self.current = None;
    }

    fn emit(&mut self, line: String) -> String {
        self.cursor.rows_emitted += 1;
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::fields::{FieldValue, LIST_FIELDS};
    use std::collections::HashMap;

    struct Record(HashMap<FieldKey, FieldValue>);

    impl MetadataRecord for Record {
        fn value(&self, key: FieldKey) -> Option<FieldValue> {
            self.0.get(&key).cloned()
        }
    }

    fn record(overview: &str) -> Record {
        Record(HashMap::from([
            (FieldKey::ApiId, FieldValue::from("1429")),
            (FieldKey::Title, FieldValue::from("Attack on Titan")),
            (FieldKey::Overview, FieldValue::from(overview)),
            (FieldKey::ReleaseDate, FieldValue::from("2013-04-07")),
            (
                FieldKey::Genres,
                FieldValue::List(vec!["Animation".to_string(), "Drama".to_string()]),
            ),
        ]))
    }

    #[test]
    fn test_trailing_fields_align_to_image_bottom() {
        let record = record("Humans fight Titans.");
        let mut producer = RowSynchronizedProducer::new(&record, &LIST_FIELDS, 60, 23);
        let lines = producer.take_rows(23).unwrap();

        assert_eq!(lines[0], "ID: 1429");
        assert_eq!(lines[1], "Title: Attack on Titan");
        assert_eq!(lines[2], "Overview: Humans fight Titans.");
        assert!(lines[3..21].iter().all(|l| l.is_empty()));
        assert_eq!(lines[21], "Release Date: 2013-04-07");
        assert_eq!(lines[22], "Genres: Animation, Drama");
        assert_eq!(producer.overflow(), None);
        assert_eq!(producer.cursor().rows_emitted, 23);
    }

    #[test]
    fn test_release_date_not_delayed_on_short_grid() {
        let record = record("x");
        let fields = [FieldSpec::new("Release Date", FieldKey::ReleaseDate, 1)];
        let mut producer = RowSynchronizedProducer::new(&record, &fields, 40, 2);
        assert_eq!(
            producer.take_rows(2).unwrap(),
            vec!["Release Date: 2013-04-07", ""]
        );
    }

    #[test]
    fn test_blank_rows_after_fields_exhausted() {
        let record = record("x");
        let fields = [FieldSpec::new("ID", FieldKey::ApiId, 1)];
        let mut producer = RowSynchronizedProducer::new(&record, &fields, 40, 3);

        assert_eq!(producer.take_rows(3).unwrap(), vec!["ID: 1429", "", ""]);
        assert_eq!(producer.next_line().unwrap(), "");
    }

    #[test]
    fn test_multi_line_field_advances_line_cursor() {
        let record = record("aaaa bbbb cccc dddd");
        let fields = [FieldSpec::new("Overview", FieldKey::Overview, 17)];
        let mut producer = RowSynchronizedProducer::new(&record, &fields, 15, 4);

        assert_eq!(producer.next_line().unwrap(), "Overview: aaaa");
        assert_eq!(
            producer.cursor(),
            Cursor {
                field_index: 0,
                line_index: 1,
                rows_emitted: 1
            }
        );
        assert_eq!(producer.next_line().unwrap(), "bbbb cccc dddd");
        assert_eq!(producer.cursor().field_index, 1);
        assert_eq!(producer.cursor().line_index, 0);
    }

    #[test]
    fn test_overflow_reports_unreached_field() {
        let overview = "word ".repeat(60);
        let record = record(&overview);
        let mut producer = RowSynchronizedProducer::new(&record, &LIST_FIELDS, 20, 5);
        let lines = producer.take_rows(5).unwrap();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "Title: Attack on");
        assert_eq!(lines[2], "Titan");
        assert!(lines[3].starts_with("Overview: "));
        assert_eq!(
            producer.overflow(),
            Some(Overflow {
                label: "Overview",
                remaining_fields: 3
            })
        );
    }

    #[test]
    fn test_missing_value_is_layout_error() {
        let record = Record(HashMap::new());
        let mut producer = RowSynchronizedProducer::new(&record, &LIST_FIELDS, 40, 23);
        assert!(matches!(producer.next_line(), Err(RenderError::Layout(_))));
    }

    #[test]
    fn test_zero_line_budget_skips_field() {
        let record = record("x");
        let fields = [
            FieldSpec::new("Title", FieldKey::Title, 0),
            FieldSpec::new("ID", FieldKey::ApiId, 1),
        ];
        let mut producer = RowSynchronizedProducer::new(&record, &fields, 40, 2);
        assert_eq!(producer.take_rows(2).unwrap(), vec!["ID: 1429", ""]);
    }
}
