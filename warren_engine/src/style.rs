//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn banner_style(&self) -> ColoredString;
    fn room_style(&self) -> ColoredString;
    fn room_titlebar_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn reply_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn engine_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn banner_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
    fn room_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10)
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn reply_style(&self) -> ColoredString {
        self.truecolor(220, 220, 220)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn engine_style(&self) -> ColoredString {
        self.dimmed().truecolor(150, 150, 150)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(220, 180, 40)
    }
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
}

impl GameStyle for String {
    fn banner_style(&self) -> ColoredString {
        self.as_str().banner_style()
    }
    fn room_style(&self) -> ColoredString {
        self.as_str().room_style()
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.as_str().room_titlebar_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn reply_style(&self) -> ColoredString {
        self.as_str().reply_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn engine_style(&self) -> ColoredString {
        self.as_str().engine_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
}
