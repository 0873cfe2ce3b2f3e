use thiserror::Error;

use crate::types::{MAX_DIMENSION, MIN_DIMENSION};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Why a set of game parameters was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the board width must be between {min} and {max}, got {0}", min = MIN_DIMENSION, max = MAX_DIMENSION)]
    Width(usize),
    #[error("the board height must be between {min} and {max}, got {0}", min = MIN_DIMENSION, max = MAX_DIMENSION)]
    Height(usize),
    #[error("the number of mines must be at least 1 and less than the number of tiles ({tiles}), got {mines}")]
    MineCount { mines: usize, tiles: usize },
    #[error("mine position ({0}, {1}) is outside the board")]
    MineOutOfBounds(usize, usize),
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Check board parameters: `2 <= width, height <= 100` and `0 < mines < width * height`.
pub fn validate_config(width: usize, height: usize, mines: usize) -> Result<()> {
    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&width) {
        return Err(ConfigError::Width(width).into());
    }
    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&height) {
        return Err(ConfigError::Height(height).into());
    }
    let tiles = width * height;
    if mines == 0 || mines >= tiles {
        return Err(ConfigError::MineCount { mines, tiles }.into());
    }
    Ok(())
}
