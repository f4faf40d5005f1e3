use super::*;

// Per-seat state for the running hand. The per-hand and cumulative score
// vectors live on the aggregate, not here.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SeatState {
    pub seat: Seat,
    pub player_id: u64,
    pub name: String,
    pub hand: Vec<Tile>, // concealed tiles, kept sorted
    pub melds: Vec<ExposedSet>,
    pub concealed_kongs: Vec<Tile>, // one representative tile per kong
    pub drawn: Option<Tile>,        // most recent self-drawn tile, cleared once shown
    pub seat_wind: Tnum,            // WE | WS | WW | WN
    pub is_dealer: bool,
}

impl SeatState {
    pub fn new(seat: Seat, player_id: u64, name: String) -> Self {
        Self {
            seat,
            player_id,
            name,
            ..Self::default()
        }
    }

    pub fn count_tile(&self, t: Tile) -> usize {
        count_tile(&self.hand, t)
    }

    // deal a fresh hand, dropping everything from the previous one
    pub fn reset_for_hand(&mut self, hand: Vec<Tile>, seat_wind: Tnum, is_dealer: bool) {
        self.hand = hand;
        self.hand.sort();
        self.melds.clear();
        self.concealed_kongs.clear();
        self.drawn = None;
        self.seat_wind = seat_wind;
        self.is_dealer = is_dealer;
    }

    pub fn sort_hand(&mut self) {
        self.hand.sort();
    }

    // remove one copy of each given tile by rule value, panic-free
    pub fn remove_tiles(&mut self, tiles: &[Tile]) {
        for &t in tiles {
            if let Some(i) = self.hand.iter().position(|&x| x == t) {
                self.hand.remove(i);
            }
        }
    }

    pub fn exposed_pung_of(&self, t: Tile) -> Option<Index> {
        self.melds
            .iter()
            .position(|m| m.kind == MeldKind::Pung && m.tiles[0] == t)
    }

    // concealed hand per the rules: no chow/pung/open-kong exposed
    pub fn is_concealed(&self) -> bool {
        self.melds.is_empty()
    }
}

impl fmt::Display for SeatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let drawn = match self.drawn {
            Some(t) => t.to_string(),
            None => "-".to_string(),
        };
        write!(
            f,
            "seat {} ({}): hand [{}], drawn {}, melds {}, concealed kongs {}",
            self.seat,
            self.name,
            tiles_to_string(&self.hand),
            drawn,
            self.melds.len(),
            self.concealed_kongs.len(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeldKind {
    Chow,
    Pung,
    OpenKong,
    UpgradedKong,
}

impl fmt::Display for MeldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MeldKind::Chow => "chow",
            MeldKind::Pung => "pung",
            MeldKind::OpenKong => "open kong",
            MeldKind::UpgradedKong => "upgraded kong",
        };
        write!(f, "{}", s)
    }
}

// A claimed meld sitting face-up in front of a seat. `from` is the seat
// that supplied the claimed tile (the owner itself for upgraded kongs).
#[derive(Debug, Clone, Serialize)]
pub struct ExposedSet {
    pub kind: MeldKind,
    pub tiles: Vec<Tile>,
    pub from: Seat,
}

impl fmt::Display for ExposedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, tiles_to_string(&self.tiles))
    }
}

// Append-only record in the discard pile.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DiscardRecord {
    pub seat: Seat,
    pub tile: Tile,
    pub seq: usize,
}

impl fmt::Display for DiscardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} by seat {}", self.seq, self.tile, self.seat)
    }
}
