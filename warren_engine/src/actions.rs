//! Action handlers.
//!
//! Each handler takes the game and the statement's argument tokens, may
//! change the game, and returns the message to show the player. Handlers are
//! free to strip filler words from the argument list before reading it.

pub mod door;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod system;

/// Filler words around a direction: "go to the north".
pub const MOBILITY_WORDS: &[&str] = &["to", "the", "towards", "near"];

/// Filler words around something being looked at: "look at the rock".
pub const VISIBILITY_WORDS: &[&str] = &["at", "around", "into", "over", "about"];

/// Words that mean the player themself.
pub const SELF_WORDS: &[&str] = &["me", "myself", "i", "self"];

/// Filler words around containers: "put the rock into my pack".
pub const LOCATION_WORDS: &[&str] = &["to", "from", "into", "in", "the", "my"];

/// Remove every token that is one of `words` (case-insensitive).
pub fn strip_words(args: &mut Vec<String>, words: &[&str]) {
    args.retain(|arg| !words.contains(&arg.to_lowercase().as_str()));
}

/// True if `word` refers to the player.
pub fn is_self_word(word: &str) -> bool {
    SELF_WORDS.contains(&word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filler_words_are_stripped_in_place() {
        let mut args: Vec<String> = ["To", "THE", "north"].iter().map(|s| (*s).to_string()).collect();
        strip_words(&mut args, MOBILITY_WORDS);
        assert_eq!(args, vec!["north"]);
    }

    #[test]
    fn self_words_ignore_case() {
        assert!(is_self_word("Myself"));
        assert!(is_self_word("I"));
        assert!(!is_self_word("rock"));
    }
}
