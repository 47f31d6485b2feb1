//! Skyward - a terminal flappy-bird arcade game.
//!
//! The simulation core (`sim`) and the leaderboard are exposed as a library
//! so integration tests can drive them without a terminal; `ui` and the
//! binary own everything presentation.

pub mod build_info;
pub mod constants;
pub mod leaderboard;
pub mod sim;
pub mod ui;
pub mod utils;

pub use constants::*;
pub use leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardStore};
pub use sim::{FlappySim, Mode, SimConfig, SimSnapshot};
