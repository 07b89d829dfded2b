// ABOUTME: Centralized CLI output utilities for consistent user-facing messages
// ABOUTME: Colors stderr diagnostics and attaches help text for known failures

use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::display::RenderError;
use tmdb_sdk::TmdbError;

pub struct CliOutput {
    use_color: bool,
}

impl CliOutput {
    /// Colors only when stderr is a terminal and `--no-color` was not given
    pub fn new(no_color: bool) -> Self {
        Self {
            use_color: !no_color && std::io::stderr().is_terminal(),
        }
    }

    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    pub fn error(&self, message: &str) {
        eprintln!("{}", self.label("error:", message));
    }

    pub fn warning(&self, message: &str) {
        eprintln!("{}", self.label("warning:", message));
    }

    pub fn info(&self, message: &str) {
        eprintln!("{}", self.label("info:", message));
    }

    pub fn success(&self, message: &str) {
        eprintln!("{}", self.label("success:", message));
    }

    /// Prints an error chain, followed by a hint when the root cause has one
    pub fn report(&self, error: &anyhow::Error) {
        self.error(&format!("{error:#}"));
        if let Some(help) = help_for(error) {
            eprintln!("{}", self.label("help:", help));
        }
    }

    fn label(&self, tag: &str, message: &str) -> String {
        if !self.use_color {
            return format!("{tag} {message}");
        }
        let tag = match tag {
            "error:" => tag.red().bold().to_string(),
            "warning:" => tag.yellow().bold().to_string(),
            "success:" => tag.green().bold().to_string(),
            "help:" => tag.cyan().bold().to_string(),
            _ => tag.blue().bold().to_string(),
        };
        format!("{tag} {message}")
    }
}

impl Default for CliOutput {
    fn default() -> Self {
        Self::new(false)
    }
}

fn help_for(error: &anyhow::Error) -> Option<&'static str> {
    error.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<TmdbError>() {
            e.help_text()
        } else if let Some(e) = cause.downcast_ref::<RenderError>() {
            e.help_text()
        } else {
            None
        }
    })
}
