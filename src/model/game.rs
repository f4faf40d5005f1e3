use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HandStatus {
    Waiting,
    Dealing,
    Playing,
    Ended,
}

impl Default for HandStatus {
    fn default() -> Self {
        HandStatus::Waiting
    }
}

// The shared game aggregate. Owned by the turn state machine for the
// duration of a hand; every phase handler mutates it under one lock.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Game {
    pub seats: Vec<SeatState>,
    pub wall: Vec<Tile>, // consumed from the front
    pub wind_round: usize, // 0 east .. 3 north
    pub dealer: Seat,
    pub turn: Seat, // seat to act
    pub discards: Vec<DiscardRecord>,
    pub winning_info: Option<WinningInfo>,
    pub hand_count: usize,
    pub round_scores: Vec<Score>, // this hand
    pub total_scores: Vec<Score>, // session running totals
    pub status: HandStatus,
}

impl Game {
    pub fn new(seats: Vec<SeatState>) -> Self {
        let n = seats.len();
        Self {
            seats,
            wind_round: 0,
            dealer: 0,
            turn: 0,
            hand_count: 1,
            round_scores: vec![0; n],
            total_scores: vec![0; n],
            status: HandStatus::Waiting,
            ..Self::default()
        }
    }

    #[inline]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    #[inline]
    pub fn next_seat(&self, seat: Seat) -> Seat {
        (seat + 1) % self.seat_count()
    }

    #[inline]
    pub fn prev_seat(&self, seat: Seat) -> Seat {
        (seat + self.seat_count() - 1) % self.seat_count()
    }

    #[inline]
    pub fn is_dealer(&self, seat: Seat) -> bool {
        seat == self.dealer
    }

    pub fn seat_wind(&self, seat: Seat) -> Tnum {
        let n = self.seat_count();
        (seat + n - self.dealer) % n + 1 // WE | WS | WW | WN
    }

    // draw one tile from the front of the wall
    pub fn draw_tile(&mut self) -> Option<Tile> {
        if self.wall.is_empty() {
            None
        } else {
            Some(self.wall.remove(0))
        }
    }

    pub fn push_discard(&mut self, seat: Seat, tile: Tile) -> usize {
        let seq = self.discards.len();
        self.discards.push(DiscardRecord { seat, tile, seq });
        seq
    }

    // clear per-hand state ahead of the next deal; scores and seat
    // identities survive
    pub fn reset_for_next_hand(&mut self) {
        self.wall.clear();
        self.discards.clear();
        self.winning_info = None;
        for pl in &mut self.seats {
            pl.hand.clear();
            pl.melds.clear();
            pl.concealed_kongs.clear();
            pl.drawn = None;
        }
        for s in &mut self.round_scores {
            *s = 0;
        }
    }

}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "hand {}, wind round {}, dealer {}, turn {}, wall {} left, status {:?}",
            self.hand_count,
            self.wind_round,
            self.dealer,
            self.turn,
            self.wall.len(),
            self.status,
        )?;
        for pl in &self.seats {
            writeln!(f, "{}", pl)?;
        }
        write!(f, "discards: {}", self.discards.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(n: usize) -> Game {
        let seats = (0..n)
            .map(|s| SeatState::new(s, s as u64, format!("p{}", s)))
            .collect();
        Game::new(seats)
    }

    #[test]
    fn test_seat_arithmetic() {
        let g = game(4);
        assert_eq!(g.next_seat(3), 0);
        assert_eq!(g.prev_seat(0), 3);
        let g3 = game(3);
        assert_eq!(g3.next_seat(2), 0);
    }

    #[test]
    fn test_seat_wind_follows_dealer() {
        let mut g = game(4);
        assert_eq!(g.seat_wind(0), WE);
        assert_eq!(g.seat_wind(1), WS);
        g.dealer = 2;
        assert_eq!(g.seat_wind(2), WE);
        assert_eq!(g.seat_wind(1), WN);
    }

    #[test]
    fn test_discard_seq_monotonic() {
        let mut g = game(4);
        assert_eq!(g.push_discard(0, Tile::value(TM, 1)), 0);
        assert_eq!(g.push_discard(1, Tile::value(TM, 2)), 1);
        assert_eq!(g.push_discard(0, Tile::value(TM, 3)), 2);
        assert_eq!(g.discards[2].seq, 2);
    }
}
