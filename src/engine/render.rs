use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::world::Room;

/// Compose the full screen: help, room contents, inventory, latest message, prompt.
/// The message block is left out entirely when there is none.
pub fn render_view(
    out: &mut Output,
    title: &str,
    room: &Room,
    player: &Player,
    message: Option<&str>,
) {
    out.title(format!("--{}--", title));
    out.say("1. [action] [object]");
    out.say("2. use [item] [object]");

    out.section("--You See--", room.object_names());
    out.section("--Your Items--", player.items.iter().map(String::as_str));

    if let Some(m) = message {
        out.message(m);
    }

    out.prompt("--Your Input--");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::RoomObject;

    fn room() -> Room {
        Room::new(
            "r",
            vec![
                RoomObject::new("Door", "", vec![], vec![], vec![]),
                RoomObject::new("Bag", "", vec![], vec![], vec![]),
            ],
        )
    }

    #[test]
    fn first_draw_has_no_message() {
        let mut out = Output::new();
        render_view(&mut out, "Escape the room", &room(), &Player::new(), None);
        assert_eq!(
            out.to_string(),
            "--Escape the room-- \n\
             1. [action] [object] \n\
             2. use [item] [object] \n\
             --You See-- \nDoor\nBag\n\
             --Your Items-- \n\n\
             --Your Input--"
        );
    }

    #[test]
    fn message_sits_between_inventory_and_prompt() {
        let mut player = Player::new();
        player.add_items(vec!["key".to_string(), "map".to_string()]);

        let mut out = Output::new();
        render_view(
            &mut out,
            "Escape the room",
            &room(),
            &player,
            Some("invalid command"),
        );
        let text = out.to_string();
        assert!(text.starts_with("--Escape the room-- \n"));
        assert!(text.ends_with(
            "--Your Items-- \nkey\nmap\n-- message -- \ninvalid command\n--Your Input--"
        ));
    }
}
