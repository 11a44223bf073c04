//! Command module
//!
//! A `Command` is one entry of the command table: a name, aliases, help text,
//! and the action handler that runs when the player uses it. The table itself
//! is data; handlers are looked up by key in an `ActionRegistry` when the
//! table is built.
use std::collections::HashMap;
use std::fmt;

use warren_data::CommandDef;

use crate::actions;
use crate::error::{GameError, WorldError};
use crate::game::Game;

/// What an action returns: a message for the player, or nothing to say.
pub type ActionResult = Result<Option<String>, GameError>;

/// An action handler. Receives the game and the statement's arguments.
pub type Action = fn(&mut Game, &mut Vec<String>) -> ActionResult;

/// A command the player can issue.
#[derive(Clone)]
pub struct Command {
    pub name: String,
    pub desc: String,
    pub help_text: String,
    pub aliases: Vec<String>,
    pub action_key: String,
    action: Action,
}

impl Command {
    pub fn new(name: &str, desc: &str, help_text: &str, aliases: &[&str], action_key: &str, action: Action) -> Self {
        Self {
            name: name.to_string(),
            desc: desc.to_string(),
            help_text: help_text.to_string(),
            aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
            action_key: action_key.to_string(),
            action,
        }
    }

    /// True if `token` is this command's name or one of its aliases (any case).
    pub fn matches_token(&self, token: &str) -> bool {
        self.name.eq_ignore_ascii_case(token) || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(token))
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Run the command's handler.
    ///
    /// # Errors
    /// - whatever the handler reports
    pub fn do_action(&self, game: &mut Game, args: &mut Vec<String>) -> ActionResult {
        (self.action)(game, args)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("action_key", &self.action_key)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.desc)
    }
}

/// Commands are equal when their names are, ignoring case.
impl PartialEq for Command {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl Eq for Command {}

impl PartialEq<str> for Command {
    fn eq(&self, other: &str) -> bool {
        self.name.eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for Command {
    fn eq(&self, other: &&str) -> bool {
        self.name.eq_ignore_ascii_case(other)
    }
}

/// Maps action keys used in command data to handler functions.
#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Action>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in action handler.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("move", actions::movement::move_handler);
        registry.register("pick", actions::inventory::pick_handler);
        registry.register("drop", actions::inventory::drop_handler);
        registry.register("throw", actions::inventory::throw_handler);
        registry.register("swap", actions::inventory::swap_handler);
        registry.register("open", actions::door::open_handler);
        registry.register("close", actions::door::close_handler);
        registry.register("examine", actions::look::examine_handler);
        registry.register("look", actions::look::look_handler);
        registry.register("search", actions::look::search_handler);
        registry.register("inventory", actions::system::inventory_handler);
        registry.register("help", actions::system::help_handler);
        registry.register("quit", actions::system::quit_handler);
        registry
    }

    /// Add or replace a handler.
    pub fn register(&mut self, key: &str, action: Action) {
        self.actions.insert(key.to_lowercase(), action);
    }

    pub fn get(&self, key: &str) -> Option<Action> {
        self.actions.get(&key.to_lowercase()).copied()
    }

    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.actions.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRegistry").field("keys", &self.keys()).finish()
    }
}

/// The ordered command table. Order matters: when a statement contains more
/// than one command word, the earliest matching entry wins.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    commands: Vec<Command>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from command data, resolving each action key.
    ///
    /// # Errors
    /// - `UnknownAction` if a command names a handler the registry doesn't have
    /// - `DuplicateCommand` if two entries share a name
    pub fn from_defs(defs: &[CommandDef], registry: &ActionRegistry) -> Result<Self, WorldError> {
        let mut table = Self::new();
        for def in defs {
            let action = registry.get(&def.action).ok_or_else(|| WorldError::UnknownAction {
                command: def.name.clone(),
                action: def.action.clone(),
            })?;
            let aliases: Vec<&str> = def.aliases.iter().map(String::as_str).collect();
            table.add_command(Command::new(
                &def.name,
                &def.desc,
                &def.help_text,
                &aliases,
                &def.action,
                action,
            ))?;
        }
        Ok(table)
    }

    /// Append a command to the end of the table.
    ///
    /// # Errors
    /// - `DuplicateCommand` if one with the same name exists
    pub fn add_command(&mut self, command: Command) -> Result<(), WorldError> {
        if self.has_command(&command.name) {
            return Err(WorldError::DuplicateCommand(command.name));
        }
        self.commands.push(command);
        Ok(())
    }

    /// Look up a command by name or alias.
    pub fn get_command(&self, word: &str) -> Option<&Command> {
        self.commands.iter().find(|cmd| cmd.matches_token(word))
    }

    /// True if a command with exactly this name exists (any case).
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.iter().any(|cmd| *cmd == name)
    }

    pub fn list_commands(&self) -> Vec<&str> {
        self.commands.iter().map(|cmd| cmd.name.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<'a> IntoIterator for &'a CommandTable {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_game: &mut Game, _args: &mut Vec<String>) -> ActionResult {
        Ok(None)
    }

    fn def(name: &str, aliases: &[&str], action: &str) -> CommandDef {
        CommandDef {
            name: name.into(),
            desc: format!("{name} things"),
            help_text: String::new(),
            aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
            action: action.into(),
        }
    }

    #[test]
    fn commands_compare_by_name_ignoring_case() {
        let a = Command::new("Move", "walk", "", &["go"], "move", noop);
        let b = Command::new("move", "run", "", &[], "move", noop);
        assert_eq!(a, b);
        assert!(a == "MOVE");
        assert!(a != "go");
        assert!(a.matches_token("GO"));
        assert!(!a.matches_token("goes"));
    }

    #[test]
    fn table_resolves_names_and_aliases() {
        let registry = ActionRegistry::builtin();
        let table = CommandTable::from_defs(
            &[def("move", &["go", "walk"], "move"), def("drop", &[], "drop")],
            &registry,
        )
        .unwrap();
        assert_eq!(table.list_commands(), vec!["move", "drop"]);
        assert_eq!(table.get_command("walk").map(|c| c.name.as_str()), Some("move"));
        assert!(table.has_command("DROP"));
        assert!(!table.has_command("go"));
        assert!(table.get_command("xyzzy").is_none());
    }

    #[test]
    fn unknown_action_keys_are_rejected() {
        let err = CommandTable::from_defs(&[def("dance", &[], "boogie")], &ActionRegistry::builtin()).unwrap_err();
        assert_eq!(
            err,
            WorldError::UnknownAction {
                command: "dance".into(),
                action: "boogie".into()
            }
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut table = CommandTable::new();
        table.add_command(Command::new("look", "", "", &[], "look", noop)).unwrap();
        let err = table.add_command(Command::new("LOOK", "", "", &[], "look", noop)).unwrap_err();
        assert_eq!(err, WorldError::DuplicateCommand("LOOK".into()));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn builtin_registry_covers_every_verb() {
        let registry = ActionRegistry::builtin();
        for key in [
            "move", "pick", "drop", "throw", "swap", "open", "close", "examine", "look", "search", "inventory", "help",
            "quit",
        ] {
            assert!(registry.get(key).is_some(), "missing action '{key}'");
        }
    }
}
