use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use super::model::{Room, RoomObject, World};
use crate::error::{EscapeError, EscapeResult};

const DEFAULT_WORLD: &str = include_str!("../../public/escape.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    id: String,
    name: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    #[serde(default)]
    object: Vec<ObjectConfig>, // [[room.object]]
}

#[derive(Deserialize)]
struct ObjectConfig {
    name: String,

    #[serde(default)]
    desc: String,

    #[serde(default)]
    items: Vec<String>,

    #[serde(default)]
    needed_items: Vec<String>,

    #[serde(default)]
    actions: Vec<String>,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> EscapeResult<World> {
    let contents = fs::read_to_string(path)?;
    let world = load_world_from_str(&contents)?;
    info!(path = %path.display(), world = %world.id, "loaded world file");
    Ok(world)
}

/// The single-room world shipped inside the binary.
pub fn default_world() -> EscapeResult<World> {
    load_world_from_str(DEFAULT_WORLD)
}

pub fn load_world_from_str(contents: &str) -> EscapeResult<World> {
    let world_file: WorldFile = toml::from_str(contents)?;

    if world_file.world.id.trim().is_empty() {
        return Err(EscapeError::InvalidWorld(
            "world.id may not be empty".to_string(),
        ));
    }
    if world_file.room.is_empty() {
        return Err(EscapeError::InvalidWorld(format!(
            "world '{}' has no rooms",
            world_file.world.id
        )));
    }

    let mut seen_rooms: HashSet<String> = HashSet::new();
    let mut rooms: Vec<Room> = Vec::with_capacity(world_file.room.len());

    for room_cfg in world_file.room {
        if !seen_rooms.insert(room_cfg.id.clone()) {
            return Err(EscapeError::InvalidWorld(format!(
                "Duplicate room id: {}",
                room_cfg.id
            )));
        }

        let mut objects = Vec::with_capacity(room_cfg.object.len());
        for oc in room_cfg.object {
            let name = oc.name.trim().to_string();
            if name.is_empty() {
                return Err(EscapeError::InvalidWorld(format!(
                    "room '{}' has an object with an empty name",
                    room_cfg.id
                )));
            }

            // typed verbs are lowercased before matching
            let actions = oc
                .actions
                .iter()
                .map(|a| a.trim().to_lowercase())
                .collect();

            objects.push(RoomObject::new(
                name,
                normalize_multiline_desc(&oc.desc),
                oc.items,
                oc.needed_items,
                actions,
            ));
        }

        rooms.push(Room {
            id: room_cfg.id,
            objects,
        });
    }

    Ok(World {
        id: world_file.world.id,
        name: world_file.world.name,
        rooms,
    })
}

fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !result.is_empty() {
            match pending_blank_lines {
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
        }
        result.push_str(trimmed);
        pending_blank_lines = 0;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_world_matches_the_shipped_room() {
        let world = default_world().unwrap();
        assert_eq!(world.id, "escape");
        assert_eq!(world.name, "Escape the room");
        assert_eq!(world.rooms.len(), 1);

        let names: Vec<&str> = world.rooms[0]
            .objects
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(names, vec!["Door", "Drawer", "Bag"]);

        let door = &world.rooms[0].objects[0];
        assert!(door.items.is_empty());
        assert_eq!(door.needed_items, vec!["key"]);
        assert_eq!(door.actions, vec!["open"]);
        assert_eq!(door.desc, "If you can open this, you will set you free");

        let bag = &world.rooms[0].objects[2];
        assert!(bag.needed_items.is_empty());
        assert_eq!(bag.items.len(), 4);
    }

    #[test]
    fn object_desc_is_unwrapped() {
        let world = load_world_from_str(
            r#"
            [world]
            id = "w"
            name = "W"

            [[room]]
            id = "r"

            [[room.object]]
            name = "Safe"
            desc = """
            A heavy safe,
            bolted to the floor.
            """
            "#,
        )
        .unwrap();
        assert_eq!(
            world.rooms[0].objects[0].desc,
            "A heavy safe, bolted to the floor."
        );
    }

    #[test]
    fn actions_are_lowercased() {
        let world = load_world_from_str(
            r#"
            [world]
            id = "w"
            name = "W"

            [[room]]
            id = "r"

            [[room.object]]
            name = "Box"
            actions = [" Open ", "KICK"]
            "#,
        )
        .unwrap();
        assert_eq!(world.rooms[0].objects[0].actions, vec!["open", "kick"]);
    }

    #[test]
    fn rejects_duplicate_rooms() {
        let err = load_world_from_str(
            r#"
            [world]
            id = "w"
            name = "W"

            [[room]]
            id = "r"

            [[room]]
            id = "r"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, EscapeError::InvalidWorld(msg) if msg.contains("Duplicate room id")));
    }

    #[test]
    fn rejects_world_without_rooms() {
        let err = load_world_from_str("[world]\nid = \"w\"\nname = \"W\"\n").unwrap_err();
        assert!(matches!(err, EscapeError::InvalidWorld(_)));
    }

    #[test]
    fn rejects_empty_object_name() {
        let err = load_world_from_str(
            r#"
            [world]
            id = "w"
            name = "W"

            [[room]]
            id = "r"

            [[room.object]]
            name = "  "
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, EscapeError::InvalidWorld(msg) if msg.contains("empty name")));
    }

    #[test]
    fn malformed_toml_is_a_toml_error() {
        let err = load_world_from_str("[world\nid = ").unwrap_err();
        assert!(matches!(err, EscapeError::Toml(_)));
    }

    #[test]
    fn normalize_keeps_paragraphs() {
        let raw = "first line\nwrapped\n\nnew line\n\n\nparagraph";
        assert_eq!(
            normalize_multiline_desc(raw),
            "first line wrapped\nnew line\n\nparagraph"
        );
    }
}
