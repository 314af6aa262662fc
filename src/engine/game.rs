use tracing::warn;

use crate::error::{EscapeError, EscapeResult};
use crate::world::Room;

/// Ordered rooms and the one currently being played.
#[derive(Debug, Clone)]
pub struct Game {
    pub rooms: Vec<Room>,
    current_room_index: usize,
}

impl Game {
    /// `rooms` must not be empty.
    pub fn new(rooms: Vec<Room>) -> EscapeResult<Self> {
        if rooms.is_empty() {
            return Err(EscapeError::InvalidWorld(
                "a game needs at least one room".to_string(),
            ));
        }
        Ok(Game {
            rooms,
            current_room_index: 0,
        })
    }

    pub fn current_room_index(&self) -> usize {
        self.current_room_index
    }

    pub fn current_room(&self) -> &Room {
        &self.rooms[self.current_room_index]
    }

    pub fn current_room_mut(&mut self) -> &mut Room {
        &mut self.rooms[self.current_room_index]
    }

    /// Advance to the next room. At the last room this fails and the index stays put.
    pub fn next_room(&mut self) -> EscapeResult<&Room> {
        let next = self.current_room_index + 1;
        if next >= self.rooms.len() {
            warn!(index = self.current_room_index, "no room after the current one");
            return Err(EscapeError::OutOfRooms {
                index: self.current_room_index,
            });
        }
        self.current_room_index = next;
        Ok(&self.rooms[next])
    }
}
