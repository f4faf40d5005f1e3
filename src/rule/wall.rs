use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::model::*;

// How the wall for the next hand is produced. TimeSeeded reseeds from the
// clock on every build so consecutive hands never replay an order.
#[derive(Debug, Clone)]
pub enum WallSource {
    TimeSeeded,
    Seeded(u64),
    Scripted(Vec<Tile>),
}

pub fn build_wall(source: &WallSource) -> Vec<Tile> {
    let mut wall = match source {
        WallSource::TimeSeeded => {
            let seed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0);
            shuffled_set(seed)
        }
        WallSource::Seeded(seed) => shuffled_set(*seed),
        WallSource::Scripted(tiles) => tiles.clone(),
    };
    for (i, t) in wall.iter_mut().enumerate() {
        t.id = i as u8;
    }
    wall
}

fn shuffled_set(seed: u64) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(WALL);
    for _ in 0..TILE {
        for ti in 0..TYPE {
            let top = if ti == TZ { DR } else { 9 };
            for ni in 1..=top {
                tiles.push(Tile::value(ti, ni));
            }
        }
    }
    let mut rng = StdRng::seed_from_u64(seed);
    tiles.shuffle(&mut rng);
    tiles
}

// 13 tiles per seat from the front of the wall, hands sorted. The dealer's
// 14th comes through the normal draw path so it shows up as a drawn tile.
pub fn deal_hands(wall: &mut Vec<Tile>, seats: usize) -> Vec<Vec<Tile>> {
    let mut hands = vec![Vec::with_capacity(14); seats];
    for _ in 0..13 {
        for hand in hands.iter_mut() {
            hand.push(wall.remove(0));
        }
    }
    for hand in hands.iter_mut() {
        hand.sort();
    }
    hands
}

// the last four tiles are never drawn
pub fn is_flow(wall: &[Tile]) -> bool {
    wall.len() <= 4
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wall_is_full_set() {
        let wall = build_wall(&WallSource::Seeded(7));
        assert_eq!(wall.len(), WALL);
        let tt = tiles_to_table(&wall);
        for ti in 0..TYPE {
            let top = if ti == TZ { DR } else { 9 };
            for ni in 1..=top {
                assert_eq!(tt[ti][ni], TILE, "{}", Tile::value(ti, ni));
            }
        }
        // ids follow wall position
        assert!(wall.iter().enumerate().all(|(i, t)| t.id as usize == i));
    }

    #[test]
    fn test_seeded_walls_replay() {
        assert_eq!(
            build_wall(&WallSource::Seeded(42)),
            build_wall(&WallSource::Seeded(42))
        );
        assert_ne!(
            build_wall(&WallSource::Seeded(1)),
            build_wall(&WallSource::Seeded(2))
        );
    }

    #[test]
    fn test_scripted_wall_keeps_order() {
        let script = tiles_from_string("m1p2s3z4");
        let wall = build_wall(&WallSource::Scripted(script.clone()));
        assert_eq!(wall, script);
    }

    #[test]
    fn test_deal_hands() {
        let mut wall = build_wall(&WallSource::Seeded(0));
        let hands = deal_hands(&mut wall, 4);
        assert_eq!(hands.len(), 4);
        assert!(hands.iter().all(|h| h.len() == 13));
        assert_eq!(wall.len(), WALL - 52);
        let mut sorted = hands[0].clone();
        sorted.sort();
        assert_eq!(hands[0], sorted);
    }

    #[test]
    fn test_is_flow() {
        let wall = build_wall(&WallSource::Seeded(0));
        assert!(!is_flow(&wall));
        assert!(is_flow(&wall[..4]));
        assert!(is_flow(&[]));
    }
}
