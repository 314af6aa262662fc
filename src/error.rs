use thiserror::Error;

pub type EscapeResult<T> = Result<T, EscapeError>;

#[derive(Debug, Error)]
pub enum EscapeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed world file: {0}")]
    Toml(#[from] toml::de::Error),

    /// World content that parses but cannot be played
    #[error("invalid world: {0}")]
    InvalidWorld(String),

    /// Tried to advance past the last room
    #[error("no further rooms after room #{index}")]
    OutOfRooms { index: usize },
}
