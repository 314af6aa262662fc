mod loader;
mod model;
mod validator;

pub use loader::{default_world, load_world_from_file, load_world_from_str};

pub use model::{DOOR_NAME, ESCAPE_MESSAGE, InteractResult, Room, RoomObject, World};
pub use validator::{ValidationError, validate_world};
