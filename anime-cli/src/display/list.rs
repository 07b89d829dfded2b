// ABOUTME: Bullet-list renderer for plain name lists such as genres or tags
// ABOUTME: Prints a title line followed by one "- item" line per entry

use std::io::Write;

use crate::display::{RenderError, Renderable};

pub struct ListDisplayer {
    title: String,
    items: Vec<String>,
}

impl ListDisplayer {
    pub fn new<I, S>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl Renderable for ListDisplayer {
    fn render_info(&self, out: &mut dyn Write) -> Result<(), RenderError> {
        writeln!(out, "{}:", self.title)?;
        for item in &self.items {
            writeln!(out, "- {item}")?;
        }
        Ok(())
    }
}
