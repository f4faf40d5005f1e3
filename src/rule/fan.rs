use crate::model::*;

use super::is_seven_pairs;

// [fan enumeration & scoring]
// `concealed` excludes the winning tile; `kongs` holds one representative
// tile per concealed kong. Concealed kongs count as triplets and join the
// suit checks but do not break hand concealment.

pub fn enumerate_fans(
    concealed: &[Tile],
    win_tile: Tile,
    is_self_drawn: bool,
    is_kong_replacement: bool,
    melds: &[ExposedSet],
    kongs: &[Tile],
) -> Vec<Fan> {
    let mut tiles = concealed.to_vec();
    tiles.push(win_tile);
    let tt = tiles_to_table(&tiles);
    let concealed_hand = melds.is_empty();

    let mut fans = vec![Fan::Base];
    if concealed_hand {
        fans.push(Fan::ConcealedHand);
    }
    if is_self_drawn && concealed_hand {
        fans.push(Fan::SelfDrawn);
    }
    if is_kong_replacement {
        fans.push(Fan::KongReplacement);
    }

    let kinds = all_kinds(&tt, melds, kongs);
    if kinds.iter().all(|t| t.is_simple()) {
        fans.push(Fan::AllSimples);
    }
    for ni in WE..=WN {
        if has_triplet(&tt, melds, kongs, Tile::value(TZ, ni)) {
            fans.push(Fan::WindTriplet(ni));
        }
    }
    for ni in DW..=DR {
        if has_triplet(&tt, melds, kongs, Tile::value(TZ, ni)) {
            fans.push(Fan::DragonTriplet(ni));
        }
    }
    if is_all_triplets(&tt, melds) {
        fans.push(Fan::AllTriplets);
    }
    if is_seven_pairs(&tiles) {
        fans.push(Fan::SevenPairs);
    }

    let numeral_suits = kinds
        .iter()
        .filter(|t| t.is_numeral())
        .map(|t| t.ti)
        .collect::<std::collections::BTreeSet<_>>();
    let has_honors = kinds.iter().any(|t| t.is_honor());
    if numeral_suits.len() == 1 {
        if has_honors {
            fans.push(Fan::MixedOneSuit);
        } else {
            fans.push(Fan::PureOneSuit);
        }
    }

    fans
}

// every distinct tile kind in the hand, exposed sets and concealed kongs
fn all_kinds(tt: &TileTable, melds: &[ExposedSet], kongs: &[Tile]) -> Vec<Tile> {
    let mut res = vec![];
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            if tt[ti][ni] > 0 {
                res.push(Tile::value(ti, ni));
            }
        }
    }
    for m in melds {
        res.extend(m.tiles.iter().copied());
    }
    res.extend(kongs.iter().copied());
    res.sort();
    res.dedup();
    res
}

fn has_triplet(tt: &TileTable, melds: &[ExposedSet], kongs: &[Tile], t: Tile) -> bool {
    tt[t.ti][t.ni] >= 3
        || kongs.contains(&t)
        || melds
            .iter()
            .any(|m| m.kind != MeldKind::Chow && m.tiles[0] == t)
}

// concealed part decomposes to one pair plus triplets, no exposed chow
fn is_all_triplets(tt: &TileTable, melds: &[ExposedSet]) -> bool {
    if melds.iter().any(|m| m.kind == MeldKind::Chow) {
        return false;
    }
    let mut pairs = 0;
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            match tt[ti][ni] {
                0 | 3 => {}
                2 => pairs += 1,
                _ => return false,
            }
        }
    }
    pairs == 1
}

pub fn calculate_score(fans: &[Fan], base_score: Score, win_type: WinType) -> Score {
    let mut score = total_fan(fans) as Score * base_score;
    if win_type.doubles_score() {
        score *= 2;
    }
    score
}
