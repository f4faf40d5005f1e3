use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WinType {
    SelfDrawn,
    DiscardClaim,
    KongReplacement, // won on the tile drawn after declaring a kong
    KongRobbed,      // won on the tile another seat used to upgrade a pung
}

impl WinType {
    // replacement and robbed wins double the settlement
    pub fn doubles_score(&self) -> bool {
        matches!(self, WinType::KongReplacement | WinType::KongRobbed)
    }
}

impl fmt::Display for WinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WinType::SelfDrawn => "self-drawn",
            WinType::DiscardClaim => "discard",
            WinType::KongReplacement => "kong replacement",
            WinType::KongRobbed => "robbed kong",
        };
        write!(f, "{}", s)
    }
}

// One scoring pattern found in a winning hand. Triplet fans repeat,
// once per qualifying set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Fan {
    Base,
    ConcealedHand,
    SelfDrawn,
    KongReplacement,
    AllSimples,
    WindTriplet(Tnum),
    DragonTriplet(Tnum),
    AllTriplets,
    SevenPairs,
    MixedOneSuit,
    PureOneSuit,
}

impl Fan {
    pub fn value(&self) -> usize {
        match self {
            Fan::Base
            | Fan::ConcealedHand
            | Fan::SelfDrawn
            | Fan::KongReplacement
            | Fan::AllSimples
            | Fan::WindTriplet(_)
            | Fan::DragonTriplet(_) => 1,
            Fan::AllTriplets | Fan::SevenPairs | Fan::MixedOneSuit => 2,
            Fan::PureOneSuit => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Fan::Base => "base",
            Fan::ConcealedHand => "concealed hand",
            Fan::SelfDrawn => "self-drawn",
            Fan::KongReplacement => "kong replacement",
            Fan::AllSimples => "all simples",
            Fan::WindTriplet(_) => "wind triplet",
            Fan::DragonTriplet(_) => "dragon triplet",
            Fan::AllTriplets => "all triplets",
            Fan::SevenPairs => "seven pairs",
            Fan::MixedOneSuit => "mixed one suit",
            Fan::PureOneSuit => "pure one suit",
        }
    }
}

impl fmt::Display for Fan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.value())
    }
}

pub fn total_fan(fans: &[Fan]) -> usize {
    fans.iter().map(|f| f.value()).sum()
}

// Record of a decided hand, kept on the aggregate until the next deal.
#[derive(Debug, Clone, Serialize)]
pub struct WinningInfo {
    pub winner: Seat,
    pub tile: Tile,
    pub win_type: WinType,
    pub fans: Vec<Fan>,
    pub total_fan: usize,
    pub deltas: Vec<Score>, // per-seat settlement for this hand
    pub is_game_over: bool,
}

impl fmt::Display for WinningInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fans: Vec<String> = self.fans.iter().map(|x| x.to_string()).collect();
        write!(
            f,
            "seat {} won on {} ({}), {} fan [{}]",
            self.winner,
            self.tile,
            self.win_type,
            self.total_fan,
            fans.join(" "),
        )
    }
}
