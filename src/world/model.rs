///////////////////////////////
/// GAME STRUCTS AND CONSTS ///
///////////////////////////////

/// Only an object with exactly this name lets the player out once it is open.
pub const DOOR_NAME: &str = "Door";

pub const ESCAPE_MESSAGE: &str = "You escaped the room!";

/// Runtime world type used by the game loop.
#[derive(Debug, Clone)]
pub struct World {
    pub id: String,
    pub name: String, // shown as the screen title
    pub rooms: Vec<Room>,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub id: String,
    pub objects: Vec<RoomObject>,
}

#[derive(Debug, Clone)]
pub struct RoomObject {
    pub name: String,
    pub desc: String,
    pub items: Vec<String>,        // drained on the first successful interaction
    pub needed_items: Vec<String>, // all cleared by one matching `use`
    pub actions: Vec<String>,      // permitted verbs, lowercase
}

/// Outcome of one interaction with a room object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractResult {
    pub description: String,
    pub items: Option<Vec<String>>,
}

impl InteractResult {
    pub fn new(description: impl Into<String>) -> Self {
        InteractResult {
            description: description.into(),
            items: None,
        }
    }

    pub fn with_items(description: impl Into<String>, items: Vec<String>) -> Self {
        InteractResult {
            description: description.into(),
            items: Some(items),
        }
    }
}

impl RoomObject {
    pub fn new(
        name: impl Into<String>,
        desc: impl Into<String>,
        items: Vec<String>,
        needed_items: Vec<String>,
        actions: Vec<String>,
    ) -> Self {
        RoomObject {
            name: name.into(),
            desc: desc.into(),
            items,
            needed_items,
            actions,
        }
    }
}
