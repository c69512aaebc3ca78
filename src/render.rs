//! Terminal rendering for session output.
//!
//! Regular output stays plain so it can be piped and compared. Failures may be
//! colorized with owo_colors when the config asks for it.

use crate::commands::Failure;
use owo_colors::OwoColorize;

/// Extension trait for rendering with optional color.
pub trait Render {
    fn render(&self, color: bool) -> String;
}

impl Render for Failure {
    fn render(&self, color: bool) -> String {
        if color {
            self.to_string().red().to_string()
        } else {
            self.to_string()
        }
    }
}
