#![warn(rust_2018_idioms)]
// index-style tile code trips these lints all over, silence them crate-wide
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::too_many_arguments)]

pub mod engine;
pub mod link;
pub mod model;
pub mod rule;

pub use engine::{Config, Session, WallSource};
pub use link::{ChoiceError, GameError, RoomLink, RoomState};
