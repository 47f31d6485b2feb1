//! Terminal rendering. Every scene draws from immutable state only — the
//! game scene in particular consumes a `SimSnapshot`, never the live
//! simulation.

pub mod game_common;
pub mod game_scene;
pub mod leaderboard_scene;
pub mod menu_scene;
pub mod rules_scene;
