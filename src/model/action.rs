use super::*;

// Token delivered to a seat's mailbox telling its driver which handler
// to run next. One token is in flight at a time for the whole table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Deal,
    Draw,
    Action(Vec<SelfKong>), // drew a tile and has a kong menu to resolve
    Discard,
    Win,
    Flow,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Deal => "deal",
            Phase::Draw => "draw",
            Phase::Action(_) => "action",
            Phase::Discard => "discard",
            Phase::Win => "win",
            Phase::Flow => "flow",
        };
        write!(f, "{}", s)
    }
}

// Kong declared from a seat's own tiles on its own turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelfKong {
    Concealed(Tile),
    Upgrade(Tile), // fourth tile added onto an exposed pung
}

impl SelfKong {
    pub fn tile(&self) -> Tile {
        match *self {
            SelfKong::Concealed(t) | SelfKong::Upgrade(t) => t,
        }
    }
}

impl fmt::Display for SelfKong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelfKong::Concealed(t) => write!(f, "concealed kong {}", t),
            SelfKong::Upgrade(t) => write!(f, "upgraded kong {}", t),
        }
    }
}

// What a seat may do with the tile another seat just discarded.
// For a chow the payload holds the two supporting tiles taken from hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Claim {
    Win,
    Kong,
    Pung,
    Chow(Vec<Tile>),
}

impl Claim {
    // arbitration order, higher beats lower
    pub fn precedence(&self) -> usize {
        match self {
            Claim::Win => 3,
            Claim::Kong => 2,
            Claim::Pung => 1,
            Claim::Chow(_) => 0,
        }
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Claim::Win => write!(f, "win"),
            Claim::Kong => write!(f, "kong"),
            Claim::Pung => write!(f, "pung"),
            Claim::Chow(tiles) => write!(f, "chow [{}]", tiles_to_string(tiles)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_precedence() {
        let chow = Claim::Chow(tiles_from_string("m4m5"));
        assert!(Claim::Win.precedence() > Claim::Kong.precedence());
        assert!(Claim::Kong.precedence() > Claim::Pung.precedence());
        assert!(Claim::Pung.precedence() > chow.precedence());
    }
}
