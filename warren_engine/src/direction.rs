//! module: direction
//!
//! The ten directions a room can face: eight compass points plus up and down.
//! A direction's ordinal addresses its slot in a room's wall table, so the
//! order of `Direction::ALL` is fixed.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
    Up,
    Down,
}

impl Direction {
    pub const COUNT: usize = 10;

    pub const ALL: [Direction; Direction::COUNT] = [
        Direction::North,
        Direction::Northeast,
        Direction::East,
        Direction::Southeast,
        Direction::South,
        Direction::Southwest,
        Direction::West,
        Direction::Northwest,
        Direction::Up,
        Direction::Down,
    ];

    /// Slot of this direction in a room's wall table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        self.aliases()[0]
    }

    /// Every word that resolves to this direction, canonical name first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Direction::North => &["north", "n"],
            Direction::Northeast => &["northeast", "ne"],
            Direction::East => &["east", "e"],
            Direction::Southeast => &["southeast", "se"],
            Direction::South => &["south", "s"],
            Direction::Southwest => &["southwest", "sw"],
            Direction::West => &["west", "w"],
            Direction::Northwest => &["northwest", "nw"],
            Direction::Up => &["up", "ceiling"],
            Direction::Down => &["down", "floor"],
        }
    }

    /// Resolve a word (canonical name or alias, any case) to a direction.
    ///
    /// ```
    /// use warren_engine::Direction;
    ///
    /// assert_eq!(Direction::from_string("NE"), Some(Direction::Northeast));
    /// assert_eq!(Direction::from_string("ceiling"), Some(Direction::Up));
    /// assert_eq!(Direction::from_string("sideways"), None);
    /// ```
    pub fn from_string(word: &str) -> Option<Direction> {
        let key = word.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|dir| dir.aliases().contains(&key.as_str()))
    }

    /// All words equivalent to `word`. A word that is not a direction is
    /// returned on its own (lowercased) so callers can match it literally.
    pub fn aliases_for(word: &str) -> Vec<String> {
        match Self::from_string(word) {
            Some(dir) => dir.aliases().iter().map(|alias| (*alias).to_string()).collect(),
            None if word.trim().is_empty() => Vec::new(),
            None => vec![word.trim().to_lowercase()],
        }
    }

    /// True if `word` resolves to this direction.
    pub fn matches(self, word: &str) -> bool {
        Self::from_string(word) == Some(self)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
