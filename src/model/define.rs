// type aliases
pub type Seat = usize; // seat index (0..seat count)
pub type Type = usize; // tile suit part (characters, circles, bamboo, honors)
pub type Tnum = usize; // tile number part (1..=9, honors 1..=7)
pub type Index = usize; // any other index
pub type Score = i64; // score delta / running total

// numbers
pub const TYPE: usize = 4; // suit count (m, p, s, z)
pub const TNUM: usize = 10; // number slots (index 0 unused)
pub const TILE: usize = 4; // copies of each tile
pub const WALL: usize = 136; // full wall size

pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = 4;

// Type index
pub const TM: usize = 0; // characters (wan)
pub const TP: usize = 1; // circles (tong)
pub const TS: usize = 2; // bamboo (tiao)
pub const TZ: usize = 3; // honors

// Tnum index for honors
pub const WE: usize = 1; // wind: east
pub const WS: usize = 2; // wind: south
pub const WW: usize = 3; // wind: west
pub const WN: usize = 4; // wind: north
pub const DW: usize = 5; // dragon: white
pub const DG: usize = 6; // dragon: green
pub const DR: usize = 7; // dragon: red
