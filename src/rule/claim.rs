use crate::model::*;

// [claim eligibility]
// Pure checks against a seat's concealed tiles. Who may actually be
// offered which claim (seating order, next-seat chow) is decided by the
// arbitration driver, not here.

// Supporting pairs from hand for a run through `t`, low tile first.
// Up to three patterns: t-2/t-1, t-1/t+1, t+1/t+2.
pub fn chow_options(hand: &[Tile], t: Tile) -> Vec<Vec<Tile>> {
    if !t.is_numeral() {
        return vec![];
    }
    let tr = &tiles_to_table(hand)[t.ti];
    let ni = t.ni as isize;
    let has = |n: isize| (1..=9).contains(&n) && tr[n as usize] > 0;
    let mut res = vec![];
    for (a, b) in [(ni - 2, ni - 1), (ni - 1, ni + 1), (ni + 1, ni + 2)] {
        if has(a) && has(b) {
            res.push(vec![
                Tile::value(t.ti, a as Tnum),
                Tile::value(t.ti, b as Tnum),
            ]);
        }
    }
    res
}

pub fn can_pung(hand: &[Tile], t: Tile) -> bool {
    count_tile(hand, t) >= 2
}

// open kong on a discard needs the remaining three copies in hand
pub fn can_open_kong(hand: &[Tile], t: Tile) -> bool {
    count_tile(hand, t) == 3
}

// Kongs a seat can declare from its own tiles on its own turn: any kind
// held four times concealed, or a held tile matching an exposed pung.
pub fn self_kong_options(seat: &SeatState) -> Vec<SelfKong> {
    let mut all = seat.hand.clone();
    if let Some(t) = seat.drawn {
        all.push(t);
    }
    let tt = tiles_to_table(&all);
    let mut res = vec![];
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            if tt[ti][ni] == TILE {
                res.push(SelfKong::Concealed(Tile::value(ti, ni)));
            }
        }
    }
    for m in &seat.melds {
        if m.kind == MeldKind::Pung && count_tile(&all, m.tiles[0]) > 0 {
            res.push(SelfKong::Upgrade(m.tiles[0]));
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_chow_options() {
        let hand = tiles_from_string("m2m4m5m6z3");
        let opts = chow_options(&hand, Tile::value(TM, 3));
        assert_eq!(opts.len(), 2); // m2+m4, m4+m5
        assert_eq!(opts[0], tiles_from_string("m2m4"));
        assert_eq!(opts[1], tiles_from_string("m4m5"));
        // edge ranks only extend inward
        assert_eq!(chow_options(&hand, Tile::value(TM, 7)).len(), 1);
        // honors never chow
        assert!(chow_options(&hand, Tile::value(TZ, 3)).is_empty());
        // suit mismatch
        assert!(chow_options(&hand, Tile::value(TP, 3)).is_empty());
    }

    #[test]
    fn test_pung_and_open_kong() {
        let hand = tiles_from_string("m5m5p7p7p7");
        assert!(can_pung(&hand, Tile::value(TM, 5)));
        assert!(!can_open_kong(&hand, Tile::value(TM, 5)));
        assert!(can_pung(&hand, Tile::value(TP, 7)));
        assert!(can_open_kong(&hand, Tile::value(TP, 7)));
        assert!(!can_pung(&hand, Tile::value(TS, 1)));
    }

    #[test]
    fn test_self_kong_options() {
        let mut seat = SeatState::new(0, 1, "a".into());
        seat.hand = tiles_from_string("m5m5m5s9");
        seat.drawn = Some(Tile::value(TM, 5));
        seat.melds.push(ExposedSet {
            kind: MeldKind::Pung,
            tiles: vec![Tile::value(TS, 9); 3],
            from: 2,
        });
        let opts = self_kong_options(&seat);
        assert_eq!(
            opts,
            vec![
                SelfKong::Concealed(Tile::value(TM, 5)),
                SelfKong::Upgrade(Tile::value(TS, 9)),
            ]
        );
    }
}
