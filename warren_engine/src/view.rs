//! View module.
//! This contains the view to the game world / messages.
//! Handlers return plain text; the REPL pushes it here, and the view adds
//! color and wrapping when the turn's output is flushed.
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::style::GameStyle;

/// Which block of the frame an item is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    System,
    Environment,
    DirectResult,
}

/// Something to show the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    Banner(String),
    Intro(String),
    RoomName(String),
    RoomDescription(String),
    Reply(String),
    Error(String),
    EngineMessage(String),
}

impl ViewItem {
    pub fn section(&self) -> Section {
        match self {
            ViewItem::Banner(_) | ViewItem::Intro(_) | ViewItem::EngineMessage(_) => Section::System,
            ViewItem::RoomName(_) | ViewItem::RoomDescription(_) => Section::Environment,
            ViewItem::Reply(_) | ViewItem::Error(_) => Section::DirectResult,
        }
    }

    /// Styled, wrapped text for this item.
    pub fn render(&self, width: usize) -> String {
        match self {
            ViewItem::Banner(text) => format!("{:^width$}", text.banner_style()),
            ViewItem::Intro(text) | ViewItem::RoomDescription(text) => fill(text, width).description_style().to_string(),
            ViewItem::RoomName(text) => text.room_titlebar_style().to_string(),
            ViewItem::Reply(text) => fill(text, width).reply_style().to_string(),
            ViewItem::Error(text) => fill(text, width).error_style().to_string(),
            ViewItem::EngineMessage(text) => fill(text, width).engine_style().to_string(),
        }
    }
}

/// View aggregates what to display on each pass through the REPL and then
/// organizes and prints it.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render pending items grouped by section, in push order within a section.
    pub fn render(&self) -> Vec<String> {
        let mut ordered: Vec<&ViewItem> = self.items.iter().collect();
        ordered.sort_by_key(|item| item.section());
        ordered.iter().map(|item| item.render(self.width)).collect()
    }

    /// Print and clear everything pending for this turn.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        for block in self.render() {
            println!("{block}");
        }
        self.items.clear();
    }
}
