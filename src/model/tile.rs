use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{de, ser};

use super::*;

// A physical tile. `id` is the position in the freshly built wall (0..135)
// and exists only to tell the four copies apart; every rule-level
// comparison goes through (type, number).
#[derive(Clone, Copy, Eq)]
pub struct Tile {
    pub id: u8,
    pub ti: Type,
    pub ni: Tnum,
}

impl Tile {
    pub fn new(id: u8, ti: Type, ni: Tnum) -> Self {
        Self { id, ti, ni }
    }

    // rule-value tile without a wall position, for lookups and tests
    pub fn value(ti: Type, ni: Tnum) -> Self {
        Self { id: 0, ti, ni }
    }

    pub fn from_symbol(s: &str) -> Self {
        match Self::try_from_symbol(s) {
            Some(t) => t,
            None => panic!("invalid tile symbol: {:?}", s),
        }
    }

    // strict two-character form with the rank in range for the suit
    pub fn try_from_symbol(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let ti = match chars.next()? {
            'm' => TM,
            'p' => TP,
            's' => TS,
            'z' => TZ,
            _ => return None,
        };
        let ni = chars.next()?.to_digit(10)? as Tnum;
        if chars.next().is_some() {
            return None;
        }
        let top = if ti == TZ { DR } else { 9 };
        if !(1..=top).contains(&ni) {
            return None;
        }
        Some(Self::value(ti, ni))
    }

    #[inline]
    pub fn is_numeral(&self) -> bool {
        self.ti != TZ
    }

    #[inline]
    pub fn is_honor(&self) -> bool {
        self.ti == TZ
    }

    // 1 or 9 of a numeral suit
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.ti != TZ && (self.ni == 1 || self.ni == 9)
    }

    // terminal or honor
    #[inline]
    pub fn is_end(&self) -> bool {
        self.ti == TZ || self.ni == 1 || self.ni == 9
    }

    #[inline]
    pub fn is_simple(&self) -> bool {
        !self.is_end()
    }

    #[inline]
    pub fn is_wind(&self) -> bool {
        self.ti == TZ && (WE..=WN).contains(&self.ni)
    }

    #[inline]
    pub fn is_dragon(&self) -> bool {
        self.ti == TZ && (DW..=DR).contains(&self.ni)
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.ti == other.ti && self.ni == other.ni
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tile {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.ti, self.ni).cmp(&(other.ti, other.ni))
    }
}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.ti, self.ni).hash(state);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ['m', 'p', 's', 'z'][self.ti], self.ni)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Tile::try_from_symbol(v)
            .ok_or_else(|| E::custom(format!("invalid tile symbol: {:?}", v)))
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileVisitor)
    }
}

// [TileTable]
pub type TileRow = [usize; TNUM];
pub type TileTable = [TileRow; TYPE];

pub fn tiles_to_table(tiles: &[Tile]) -> TileTable {
    let mut tt = TileTable::default();
    for t in tiles {
        tt[t.ti][t.ni] += 1;
    }
    tt
}

pub fn count_tile(tiles: &[Tile], t: Tile) -> usize {
    tiles.iter().filter(|&&x| x == t).count()
}

pub fn tiles_from_string(exp: &str) -> Vec<Tile> {
    let mut tiles = vec![];
    let mut ti = usize::MAX;
    for c in exp.chars() {
        match c {
            'm' => ti = TM,
            'p' => ti = TP,
            's' => ti = TS,
            'z' => ti = TZ,
            '1'..='9' => {
                assert!(ti != usize::MAX, "tile number before tile type");
                tiles.push(Tile::value(ti, c.to_digit(10).unwrap() as Tnum));
            }
            _ => panic!("invalid char: '{}'", c),
        }
    }
    tiles
}

pub fn tiles_to_string(tiles: &[Tile]) -> String {
    let vs: Vec<String> = tiles.iter().map(|t| t.to_string()).collect();
    vs.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_equality_ignores_id() {
        let a = Tile::new(17, TS, 5);
        let b = Tile::new(90, TS, 5);
        assert_eq!(a, b);
        assert_ne!(a, Tile::value(TS, 6));
    }

    #[test]
    fn test_tile_classes() {
        assert!(Tile::value(TM, 1).is_terminal());
        assert!(!Tile::value(TZ, WE).is_terminal());
        assert!(Tile::value(TZ, WE).is_end());
        assert!(Tile::value(TP, 5).is_simple());
        assert!(Tile::value(TZ, WN).is_wind());
        assert!(Tile::value(TZ, DG).is_dragon());
        assert!(!Tile::value(TZ, DG).is_wind());
    }

    #[test]
    fn test_tile_serde_rejects_bad_symbols() {
        let t: Tile = serde_json::from_str("\"m5\"").unwrap();
        assert_eq!(t, Tile::value(TM, 5));
        for bad in ["\"x5\"", "\"m0\"", "\"z8\"", "\"m\"", "\"m55\"", "\"\""] {
            assert!(serde_json::from_str::<Tile>(bad).is_err(), "{}", bad);
        }
    }

    #[test]
    fn test_tiles_from_string() {
        let tiles = tiles_from_string("m123z77");
        assert_eq!(tiles.len(), 5);
        assert_eq!(tiles[0], Tile::value(TM, 1));
        assert_eq!(tiles[4], Tile::value(TZ, DR));
        assert_eq!(tiles_to_string(&tiles), "m1 m2 m3 z7 z7");
    }
}
