//! Turning a line of player input into a `Statement`.
//!
//! Input is split on whitespace. The interpreter walks the tokens in order
//! and, for each token, walks the command table in order; the first command
//! whose name or alias equals the token wins. The rest of the tokens become
//! the statement's arguments.

use log::debug;

use crate::command::{Command, CommandTable};
use crate::error::StatementError;

/// A parsed line of input.
#[derive(Debug, Clone)]
pub struct Statement {
    pub raw: String,
    pub tokens: Vec<String>,
    pub verb: Command,
    /// The word the player actually typed for the command (possibly an alias).
    pub action_word: String,
    /// Every token except the action word, in input order.
    pub args: Vec<String>,
}

impl Statement {
    /// Parse a raw line against a command table.
    ///
    /// # Errors
    /// - `Empty` if the line has no tokens
    /// - `CommandNotFound` if no token names a command
    pub fn parse(raw: &str, commands: &CommandTable) -> Result<Self, StatementError> {
        let tokens: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
        if tokens.is_empty() {
            return Err(StatementError::Empty);
        }
        let (position, verb) = identify_verb(&tokens, commands)
            .ok_or_else(|| StatementError::CommandNotFound(raw.trim().to_string()))?;
        let action_word = tokens[position].clone();
        let args = tokens
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != position)
            .map(|(_, token)| token.clone())
            .collect();
        debug!("statement '{raw}': verb '{}' via '{action_word}'", verb.name);
        Ok(Self {
            raw: raw.to_string(),
            tokens,
            verb: verb.clone(),
            action_word,
            args,
        })
    }
}

/// First (token, command) pair that matches, scanning tokens then commands.
fn identify_verb<'a>(tokens: &[String], commands: &'a CommandTable) -> Option<(usize, &'a Command)> {
    tokens.iter().enumerate().find_map(|(position, token)| {
        commands
            .iter()
            .find(|cmd| cmd.matches_token(token))
            .map(|cmd| (position, cmd))
    })
}

/// Holds the command table and prepares statements from input lines.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    commands: CommandTable,
}

impl Interpreter {
    pub fn new(commands: CommandTable) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    /// Parse a raw line.
    ///
    /// # Errors
    /// - see [`Statement::parse`]
    pub fn prepare(&self, raw: &str) -> Result<Statement, StatementError> {
        Statement::parse(raw, &self.commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ActionResult;
    use crate::game::Game;

    fn noop(_game: &mut Game, _args: &mut Vec<String>) -> ActionResult {
        Ok(None)
    }

    fn interpreter() -> Interpreter {
        let mut table = CommandTable::new();
        table
            .add_command(Command::new("move", "walk", "", &["go", "walk"], "move", noop))
            .unwrap();
        table.add_command(Command::new("pick", "take", "", &["take"], "pick", noop)).unwrap();
        table.add_command(Command::new("go", "shadowed", "", &[], "move", noop)).unwrap();
        Interpreter::new(table)
    }

    #[test]
    fn verb_and_args_split_out() {
        let stmt = interpreter().prepare("go north").unwrap();
        assert_eq!(stmt.verb.name, "move");
        assert_eq!(stmt.action_word, "go");
        assert_eq!(stmt.args, vec!["north"]);
        assert_eq!(stmt.tokens, vec!["go", "north"]);
    }

    #[test]
    fn earlier_table_entries_win() {
        // "go" is an alias of move and also a later command of its own
        let stmt = interpreter().prepare("go").unwrap();
        assert_eq!(stmt.verb.name, "move");
    }

    #[test]
    fn earliest_token_wins() {
        let stmt = interpreter().prepare("please take the rock and walk").unwrap();
        assert_eq!(stmt.verb.name, "pick");
        assert_eq!(stmt.action_word, "take");
        assert_eq!(stmt.args, vec!["please", "the", "rock", "and", "walk"]);
    }

    #[test]
    fn repeated_action_word_keeps_later_copies() {
        let stmt = interpreter().prepare("walk walk").unwrap();
        assert_eq!(stmt.args, vec!["walk"]);
    }

    #[test]
    fn case_is_ignored_but_preserved() {
        let stmt = interpreter().prepare("  GO   North ").unwrap();
        assert_eq!(stmt.verb.name, "move");
        assert_eq!(stmt.action_word, "GO");
        assert_eq!(stmt.args, vec!["North"]);
    }

    #[test]
    fn empty_and_unknown_input_fail() {
        let interp = interpreter();
        assert_eq!(interp.prepare("   ").unwrap_err(), StatementError::Empty);
        assert_eq!(
            interp.prepare("xyzzy").unwrap_err(),
            StatementError::CommandNotFound("xyzzy".into())
        );
    }
}
