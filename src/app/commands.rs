use crate::domain::model::CharacterId;
use crate::utils::error::TeamError;
use std::str::FromStr;

/// One user action read from the input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Team,
    Toggle(CharacterId),
    Remove(CharacterId),
    /// Optional file name; the configured export name otherwise.
    Export(Option<String>),
    Import(String),
    Theme,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  list              show every character in the catalog
  team              show the current team
  toggle <id>       add a character to the team, or remove it if already there
  remove <id>       remove a character from the team
  export [file]     save the team as JSON
  import <file>     load a team from a JSON file
  theme             switch between light and dark
  help              show this message
  quit              leave";

impl FromStr for Command {
    type Err = TeamError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let unknown = || TeamError::UnknownCommand {
            input: trimmed.to_string(),
        };

        // Everything after the verb is one argument, so paths may contain spaces.
        let (verb, argument) = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, Some(rest.trim())),
            None => (trimmed, None),
        };
        if verb.is_empty() {
            return Err(unknown());
        }

        let id = |arg: Option<&str>| -> Result<CharacterId, TeamError> {
            arg.and_then(|a| a.parse().ok()).ok_or_else(unknown)
        };

        match (verb.to_ascii_lowercase().as_str(), argument) {
            ("list" | "ls", None) => Ok(Self::List),
            ("team", None) => Ok(Self::Team),
            ("toggle" | "t", arg) => Ok(Self::Toggle(id(arg)?)),
            ("remove" | "rm", arg) => Ok(Self::Remove(id(arg)?)),
            ("export", arg) => Ok(Self::Export(arg.map(str::to_string))),
            ("import", Some(path)) => Ok(Self::Import(path.to_string())),
            ("theme", None) => Ok(Self::Theme),
            ("help" | "?", None) => Ok(Self::Help),
            ("quit" | "exit" | "q", None) => Ok(Self::Quit),
            _ => Err(unknown()),
        }
    }
}
