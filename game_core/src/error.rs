use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GameError {
    #[error("invalid arena size {width}x{height}: both sides must be finite and positive")]
    InvalidArena { width: f32, height: f32 },
}

pub type GameResult<T> = Result<T, GameError>;
