use crate::model::*;

use super::enumerate_fans;

// [win detection]
// A hand wins when its tiles form one of the three shapes and the fan
// enumeration yields at least one fan. Shape checks run on count tables;
// `concealed` never includes the candidate tile.

pub fn can_win(
    concealed: &[Tile],
    candidate: Tile,
    is_self_drawn: bool,
    is_kong_replacement: bool,
    melds: &[ExposedSet],
    kongs: &[Tile],
) -> Option<Vec<Fan>> {
    let mut tiles = concealed.to_vec();
    tiles.push(candidate);
    if !is_seven_pairs(&tiles) && !is_thirteen_orphans(&tiles) && !is_standard_shape(&tiles) {
        return None;
    }
    let fans = enumerate_fans(
        concealed,
        candidate,
        is_self_drawn,
        is_kong_replacement,
        melds,
        kongs,
    );
    if fans.is_empty() {
        None
    } else {
        Some(fans)
    }
}

// seven distinct pairs, full 14-tile hand only
pub fn is_seven_pairs(tiles: &[Tile]) -> bool {
    if tiles.len() != 14 {
        return false;
    }
    let tt = tiles_to_table(tiles);
    let mut pairs = 0;
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            match tt[ti][ni] {
                0 => {}
                2 => pairs += 1,
                _ => return false,
            }
        }
    }
    pairs == 7
}

// all thirteen terminal and honor kinds, exactly one of them doubled
pub fn is_thirteen_orphans(tiles: &[Tile]) -> bool {
    if tiles.len() != 14 {
        return false;
    }
    let tt = tiles_to_table(tiles);
    for ti in 0..TZ {
        for ni in 2..9 {
            if tt[ti][ni] != 0 {
                return false;
            }
        }
    }
    let mut doubled = 0;
    let mut check = |n: usize| match n {
        1 => true,
        2 => {
            doubled += 1;
            true
        }
        _ => false,
    };
    for ti in 0..TZ {
        if !check(tt[ti][1]) || !check(tt[ti][9]) {
            return false;
        }
    }
    for ni in WE..=DR {
        if !check(tt[TZ][ni]) {
            return false;
        }
    }
    doubled == 1
}

// pair plus triplets and runs; works on any 3n+2 tile count so exposed
// sets just shrink the concealed part
pub fn is_standard_shape(tiles: &[Tile]) -> bool {
    if tiles.len() % 3 != 2 {
        return false;
    }
    let mut tt = tiles_to_table(tiles);
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            if tt[ti][ni] >= 2 {
                tt[ti][ni] -= 2;
                if decompose_sets(&mut tt) {
                    return true;
                }
                tt[ti][ni] += 2;
            }
        }
    }
    false
}

// backtracking over the lowest remaining tile, triplet before run
fn decompose_sets(tt: &mut TileTable) -> bool {
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            if tt[ti][ni] == 0 {
                continue;
            }
            if tt[ti][ni] >= 3 {
                tt[ti][ni] -= 3;
                if decompose_sets(tt) {
                    return true;
                }
                tt[ti][ni] += 3;
            }
            if ti != TZ && ni <= 7 && tt[ti][ni + 1] > 0 && tt[ti][ni + 2] > 0 {
                tt[ti][ni] -= 1;
                tt[ti][ni + 1] -= 1;
                tt[ti][ni + 2] -= 1;
                if decompose_sets(tt) {
                    return true;
                }
                tt[ti][ni] += 1;
                tt[ti][ni + 1] += 1;
                tt[ti][ni + 2] += 1;
            }
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_shape() {
        assert!(is_standard_shape(&tiles_from_string(
            "m123m456p789s55z111"
        )));
        // runs never cross suits or use honors
        assert!(!is_standard_shape(&tiles_from_string(
            "m123m456p789s55z123"
        )));
        // pair short
        assert!(!is_standard_shape(&tiles_from_string("m123m456p789s5z11")));
    }

    #[test]
    fn test_standard_shape_with_exposed_sets() {
        // 8 concealed tiles, two sets already exposed
        assert!(is_standard_shape(&tiles_from_string("m123p44s567")));
        assert!(!is_standard_shape(&tiles_from_string("m124p44s567")));
    }

    #[test]
    fn test_seven_pairs() {
        assert!(is_seven_pairs(&tiles_from_string(
            "m11m22p33p44s55z11z77"
        )));
        // four of a kind is two pairs of the same tile, not allowed
        assert!(!is_seven_pairs(&tiles_from_string(
            "m11m11p33p44s55z11z77"
        )));
        assert!(!is_seven_pairs(&tiles_from_string("m11m22p33p44s55z177")));
    }

    #[test]
    fn test_thirteen_orphans() {
        assert!(is_thirteen_orphans(&tiles_from_string(
            "m19p19s19z1234567m1"
        )));
        // a simple tile substituted for an orphan kind
        assert!(!is_thirteen_orphans(&tiles_from_string(
            "m19p19s19z123456m2m1"
        )));
        // nothing doubled
        assert!(!is_thirteen_orphans(&tiles_from_string(
            "m19p19s19z1234567"
        )));
    }

    #[test]
    fn test_can_win_standard() {
        let concealed = tiles_from_string("m123m456p789s55z11");
        let fans = can_win(&concealed, Tile::value(TZ, WE), true, false, &[], &[]).unwrap();
        assert!(fans.contains(&Fan::Base));
        assert!(fans.contains(&Fan::ConcealedHand));
        assert!(fans.contains(&Fan::SelfDrawn));
        assert!(fans.contains(&Fan::WindTriplet(WE)));
    }

    #[test]
    fn test_can_win_rejects_near_miss() {
        let concealed = tiles_from_string("m123m456p789s55z12");
        assert!(can_win(&concealed, Tile::value(TZ, WE), true, false, &[], &[]).is_none());
    }
}
