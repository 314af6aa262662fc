use crate::world::{DOOR_NAME, ESCAPE_MESSAGE, InteractResult, Room, RoomObject};

impl RoomObject {
    /// Hand over everything the object holds. It stays empty afterwards.
    pub fn take_items(&mut self) -> Vec<String> {
        std::mem::take(&mut self.items)
    }

    pub fn remove_needed_items(&mut self) {
        self.needed_items.clear();
    }

    pub fn is_item_needed(&self, item: &str) -> bool {
        self.needed_items.iter().any(|n| n == item)
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn needs_items(&self) -> bool {
        !self.needed_items.is_empty()
    }

    pub fn allows(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }

    pub fn is_door(&self) -> bool {
        self.name == DOOR_NAME
    }

    /// Try `action` on the object.
    ///
    /// Checked in order: permitted verb, lock (still needs items), held items,
    /// the door, and finally nothing of interest.
    pub fn interact(&mut self, action: &str) -> InteractResult {
        if !self.allows(action) {
            InteractResult::new(format!("cannot {} {}", action, self.name))
        } else if self.needs_items() {
            InteractResult::new(self.desc.clone())
        } else if self.has_items() {
            let items = self.take_items();
            InteractResult::with_items(format!("You {} the {}", action, self.name), items)
        } else if self.is_door() {
            InteractResult::new(ESCAPE_MESSAGE)
        } else {
            InteractResult::new("didn't find anything useful")
        }
    }

    /// Supplying any one needed item unlocks the object completely.
    pub fn use_item(&mut self, item: &str) -> InteractResult {
        if !self.is_item_needed(item) {
            return InteractResult::new(format!("Could not use {} on {}", item, self.name));
        }

        self.remove_needed_items();
        InteractResult::new(format!(" Used {} -> {}", item, self.name))
    }
}

impl Room {
    pub fn new(id: impl Into<String>, objects: Vec<RoomObject>) -> Self {
        Room {
            id: id.into(),
            objects,
        }
    }

    /// Case-insensitive lookup; the first match in insertion order wins.
    pub fn get_object(&self, name: &str) -> Option<&RoomObject> {
        let name = name.to_lowercase();
        self.objects.iter().find(|o| o.name.to_lowercase() == name)
    }

    pub fn get_object_mut(&mut self, name: &str) -> Option<&mut RoomObject> {
        let name = name.to_lowercase();
        self.objects
            .iter_mut()
            .find(|o| o.name.to_lowercase() == name)
    }

    pub fn object_names(&self) -> Vec<&str> {
        self.objects.iter().map(|o| o.name.as_str()).collect()
    }
}
