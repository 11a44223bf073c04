//! Randomized flavor text.
//!
//! A few replies (wandering about, not understanding a command) are drawn from
//! a weighted `Spinner` so the game doesn't say the same thing every time.
//! Each spinner type has a built-in fallback line for when no data overrides it.

use gametools::{Spinner, Wedge};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpinnerType {
    Wander,
    UnrecognizedCommand,
    EntityNotFound,
    EmptyStatement,
}

impl SpinnerType {
    pub const ALL: [SpinnerType; 4] = [
        SpinnerType::Wander,
        SpinnerType::UnrecognizedCommand,
        SpinnerType::EntityNotFound,
        SpinnerType::EmptyStatement,
    ];

    /// Key used for this spinner in TOML data.
    pub fn toml_key(self) -> &'static str {
        match self {
            SpinnerType::Wander => "wander",
            SpinnerType::UnrecognizedCommand => "unrecognizedCommand",
            SpinnerType::EntityNotFound => "entityNotFound",
            SpinnerType::EmptyStatement => "emptyStatement",
        }
    }

    pub fn from_toml_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.toml_key() == key)
    }

    /// Line used when no spinner of this type is loaded.
    pub fn default_line(self) -> &'static str {
        match self {
            SpinnerType::Wander => "You wander about the room.",
            SpinnerType::UnrecognizedCommand => "I don't know how to do that.",
            SpinnerType::EntityNotFound => "You don't see that here.",
            SpinnerType::EmptyStatement => "Say something, or type 'help' for a list of commands.",
        }
    }

    /// Built-in lines and weights for this spinner.
    pub fn default_values(self) -> &'static [(&'static str, usize)] {
        match self {
            SpinnerType::Wander => &[
                ("You wander about the room.", 4),
                ("You pace from one wall to the other.", 1),
                ("You take a slow lap of the room.", 1),
            ],
            SpinnerType::UnrecognizedCommand => &[
                ("I don't know how to do that.", 4),
                ("That doesn't make any sense to me.", 1),
                ("Try saying that another way.", 1),
            ],
            SpinnerType::EntityNotFound => &[("You don't see that here.", 3), ("There's nothing like that here.", 1)],
            SpinnerType::EmptyStatement => &[("Say something, or type 'help' for a list of commands.", 1)],
        }
    }

    /// Spinner built from the built-in lines.
    pub fn default_spinner(self) -> Spinner<String> {
        let wedges = self
            .default_values()
            .iter()
            .map(|(line, width)| Wedge::new_weighted((*line).to_string(), *width))
            .collect();
        Spinner::new(wedges)
    }
}
