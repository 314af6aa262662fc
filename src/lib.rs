pub mod engine;
pub mod error;
pub mod world;

use tracing::info;

use engine::{Game, Output, Player, WIN_BANNER, execute, parse_command, render_view};
use world::World;

pub use error::{EscapeError, EscapeResult};
pub use world::{default_world, load_world_from_file, load_world_from_str};

/// Everything that changes while playing. The player always acts in the
/// game's current room; there is no separate room list.
pub struct GameState {
    pub title: String,
    pub game: Game,
    pub player: Player,
    pub escaped: bool,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        escaped: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        state: GameState,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a game from a TOML world string, or the built-in room when empty.
        #[wasm_bindgen(constructor)]
        pub fn new(world_toml: &str) -> Result<WasmGame, JsValue> {
            let world = if world_toml.trim().is_empty() {
                default_world()
            } else {
                load_world_from_str(world_toml)
            }
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

            let state = GameState::new(world).map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame { state })
        }

        /// The first screen, before any command.
        #[wasm_bindgen]
        pub fn init(&self) -> JsValue {
            self.result(self.state.initialize())
        }

        /// Process one input line and return the redrawn screen blocks.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let out = self.state.step(input);
            self.result(out)
        }
    }

    impl WasmGame {
        fn result(&self, out: Output) -> JsValue {
            to_value(&WasmStepResult {
                blocks: out.blocks,
                escaped: self.state.escaped,
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}

impl GameState {
    pub fn new(world: World) -> EscapeResult<Self> {
        info!(world = %world.id, rooms = world.rooms.len(), "starting game");
        Ok(GameState {
            title: world.name,
            game: Game::new(world.rooms)?,
            player: Player::new(),
            escaped: false,
        })
    }

    /// The screen shown before the first command.
    pub fn initialize(&self) -> Output {
        let mut out = Output::new();
        render_view(
            &mut out,
            &self.title,
            self.game.current_room(),
            &self.player,
            None,
        );
        out
    }

    /// Process a single input line; returns the complete redrawn screen.
    pub fn step(&mut self, input: &str) -> Output {
        let cmd = parse_command(input);
        let message = execute(&cmd, &mut self.player, self.game.current_room_mut());

        if message == WIN_BANNER && !self.escaped {
            info!("player escaped");
            self.escaped = true;
        }

        let mut out = Output::new();
        render_view(
            &mut out,
            &self.title,
            self.game.current_room(),
            &self.player,
            Some(message.as_str()),
        );
        out
    }

    /// Move on to the next room. No command reaches this in the shipped content.
    pub fn advance_room(&mut self) -> EscapeResult<()> {
        self.game.next_room()?;
        Ok(())
    }
}
