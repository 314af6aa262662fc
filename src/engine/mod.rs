mod commands;
mod game;
mod objects;
mod output;
mod player;
mod render;

pub use commands::{Command, INVALID_COMMAND, WIN_BANNER, execute, parse_command};
pub use game::Game;
pub use output::{CLEAR_SCREEN, Output, OutputBlock};
pub use player::Player;
pub use render::render_view;
