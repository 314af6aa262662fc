use tracing::debug;

use crate::world::Room;

#[derive(Debug, Default, Clone)]
pub struct Player {
    pub items: Vec<String>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inventory lookup ignoring case; returns the name as stored.
    pub fn get_item(&self, item_name: &str) -> Option<&str> {
        let name = item_name.to_lowercase();
        self.items
            .iter()
            .find(|i| i.to_lowercase() == name)
            .map(|i| i.as_str())
    }

    pub fn add_items(&mut self, items: impl IntoIterator<Item = String>) {
        self.items.extend(items);
    }

    pub fn interact_with_object(
        &mut self,
        room: &mut Room,
        object_name: &str,
        action: &str,
    ) -> String {
        let Some(object) = room.get_object_mut(object_name) else {
            return format!("{} not found in room", object_name);
        };

        let result = object.interact(action);
        debug!(object = %object.name, action, outcome = %result.description, "interact");

        match result.items {
            Some(items) => {
                let found = items.join(",");
                self.add_items(items);
                format!("{}\nfound items: {}", result.description, found)
            }
            None => result.description,
        }
    }

    pub fn use_item(&self, room: &mut Room, item_name: &str, object_name: &str) -> String {
        let Some(item) = self.get_item(item_name) else {
            return format!("{} not found in inventory", item_name);
        };
        let Some(object) = room.get_object_mut(object_name) else {
            return format!("{} not found", object_name);
        };

        let result = object.use_item(item);
        debug!(object = %object.name, item, outcome = %result.description, "use item");
        result.description
    }
}
