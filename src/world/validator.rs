use std::collections::HashSet;

use super::model::{DOOR_NAME, World};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Everything any object hands out, across all rooms
    let obtainable: HashSet<&str> = world
        .rooms
        .iter()
        .flat_map(|r| r.objects.iter())
        .flat_map(|o| o.items.iter().map(|i| i.as_str()))
        .collect();

    for room in &world.rooms {
        if room.objects.is_empty() {
            errors.push(ValidationError::new(format!(
                "room '{}' has no objects",
                room.id
            )));
        }

        let mut seen: HashSet<String> = HashSet::new();
        for object in &room.objects {
            // Lookup is case-insensitive and first-match
            if !seen.insert(object.name.to_lowercase()) {
                errors.push(ValidationError::new(format!(
                    "room '{}' object '{}' is shadowed by an earlier object of the same name",
                    room.id, object.name
                )));
            }

            if object.actions.iter().any(|a| a.trim().is_empty()) {
                errors.push(ValidationError::new(format!(
                    "room '{}' object '{}' has an empty action entry",
                    room.id, object.name
                )));
            }

            for needed in &object.needed_items {
                if !obtainable.contains(needed.as_str()) {
                    errors.push(ValidationError::new(format!(
                        "room '{}' object '{}' needs '{}', which no object yields",
                        room.id, object.name, needed
                    )));
                }
            }
        }
    }

    let has_door = world
        .rooms
        .iter()
        .flat_map(|r| r.objects.iter())
        .any(|o| o.name == DOOR_NAME);
    if !has_door {
        errors.push(ValidationError::new(format!(
            "world '{}' has no '{}' object, so it cannot be escaped",
            world.id, DOOR_NAME
        )));
    }

    errors
}
