//! Turns one input line into an interaction.
//!
//!   "open door"     -> Command::Interact { action: "open", object: "door" }
//!   "use key door"  -> Command::Use { item: "key", object: "door" }
//!   anything else   -> Command::Invalid
//!
//! Words are split on single spaces only, so "open  door" is three words.

use tracing::debug;

use crate::engine::player::Player;
use crate::world::{ESCAPE_MESSAGE, Room};

pub const WIN_BANNER: &str = "YOUR'E FREE";
pub const INVALID_COMMAND: &str = "invalid command";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Interact { action: String, object: String },
    Use { item: String, object: String },
    Invalid,
}

pub fn parse_command(input: &str) -> Command {
    let line = input.trim_end_matches(['\r', '\n']);
    let words: Vec<&str> = line.split(' ').collect();

    let cmd = match words.as_slice() {
        [action, object] => Command::Interact {
            action: action.to_lowercase(),
            object: object.to_lowercase(),
        },
        // the keyword itself is not case-folded
        ["use", item, object] => Command::Use {
            item: item.to_lowercase(),
            object: object.to_lowercase(),
        },
        _ => Command::Invalid,
    };

    debug!(?cmd, "parsed command");
    cmd
}

/// Run a command against the player and the room they are in, returning the message to show.
pub fn execute(cmd: &Command, player: &mut Player, room: &mut Room) -> String {
    match cmd {
        Command::Interact { action, object } => {
            let message = player.interact_with_object(room, object, action);
            if message == ESCAPE_MESSAGE {
                WIN_BANNER.to_string()
            } else {
                message
            }
        }
        Command::Use { item, object } => player.use_item(room, item, object),
        Command::Invalid => INVALID_COMMAND.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interact(action: &str, object: &str) -> Command {
        Command::Interact {
            action: action.into(),
            object: object.into(),
        }
    }

    #[test]
    fn two_words_interact() {
        assert_eq!(parse_command("Open DOOR"), interact("open", "door"));
        assert_eq!(parse_command("open door\r\n"), interact("open", "door"));
    }

    #[test]
    fn two_words_starting_with_use_still_interact() {
        assert_eq!(parse_command("use key"), interact("use", "key"));
    }

    #[test]
    fn use_with_three_words() {
        assert_eq!(
            parse_command("use Key DOOR"),
            Command::Use {
                item: "key".into(),
                object: "door".into()
            }
        );
    }

    #[test]
    fn use_keyword_is_case_sensitive() {
        assert_eq!(parse_command("USE key door"), Command::Invalid);
        assert_eq!(parse_command("Use key door"), Command::Invalid);
    }

    #[test]
    fn other_shapes_are_invalid() {
        assert_eq!(parse_command("foo"), Command::Invalid);
        assert_eq!(parse_command(""), Command::Invalid);
        assert_eq!(parse_command("open the door"), Command::Invalid);
        assert_eq!(parse_command("use a b c"), Command::Invalid);
    }

    #[test]
    fn repeated_spaces_count_as_words() {
        // "open  door" splits into ["open", "", "door"]
        assert_eq!(parse_command("open  door"), Command::Invalid);
        // " door" splits into ["", "door"]
        assert_eq!(parse_command(" door"), interact("", "door"));
    }

    #[test]
    fn invalid_command_changes_nothing() {
        let mut player = Player::new();
        let mut room = Room::new("r", vec![]);
        assert_eq!(
            execute(&Command::Invalid, &mut player, &mut room),
            INVALID_COMMAND
        );
        assert!(player.items.is_empty());
    }
}
