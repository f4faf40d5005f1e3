// data model for the mahjong table
mod action;
mod define;
mod game;
mod player;
mod tile;
mod win_info;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use action::*;
pub use define::*;
pub use game::*;
pub use player::*;
pub use tile::*;
pub use win_info::*;
