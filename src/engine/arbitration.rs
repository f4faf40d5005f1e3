use std::sync::MutexGuard;

use tracing::info;

use crate::link::GameError;
use crate::model::*;
use crate::rule;

use super::{draw, settle, Session};

// Candidates in offer order: every win candidate first, scanning seats
// from the discarder's next seat, then one highest claim class per seat.
// A chow is only ever offered to the immediate next seat.
pub(super) fn collect_claims(game: &Game, discarder: Seat, tile: Tile) -> Vec<(Seat, Claim)> {
    let mut wins = vec![];
    let mut others = vec![];
    let mut s = game.next_seat(discarder);
    while s != discarder {
        let pl = &game.seats[s];
        if rule::can_win(&pl.hand, tile, false, false, &pl.melds, &pl.concealed_kongs).is_some() {
            wins.push((s, Claim::Win));
        }
        if rule::can_open_kong(&pl.hand, tile) {
            others.push((s, Claim::Kong));
        } else if rule::can_pung(&pl.hand, tile) {
            others.push((s, Claim::Pung));
        } else if s == game.next_seat(discarder) {
            let mut opts = rule::chow_options(&pl.hand, tile);
            if !opts.is_empty() {
                others.push((s, Claim::Chow(opts.remove(0))));
            }
        }
        s = game.next_seat(s);
    }
    wins.extend(others);
    wins
}

// Offer each candidate in turn; the first acceptance settles the scan.
// Timeouts, disconnects and non-affirmative numbers decline.
pub(super) fn run(
    session: &Session,
    mut game: MutexGuard<'_, Game>,
    discarder: Seat,
    tile: Tile,
) -> Result<(), GameError> {
    let candidates = collect_claims(&game, discarder, tile);
    for (s, claim) in candidates {
        session
            .link
            .send(s, &format!("claim {} on {}? 1:yes 0:pass", claim, tile));
        let accepted = session
            .request_choice(s, session.config.claim_timeout)
            .map_or(false, |n| n == 1);
        if !accepted {
            continue;
        }
        info!(seat = s, %claim, %tile, "claim granted");
        session
            .link
            .broadcast(&format!("seat {} claims {} on {}", s, claim, tile));
        game.turn = s;
        match claim {
            Claim::Win => {
                let pl = &game.seats[s];
                if let Some(fans) =
                    rule::can_win(&pl.hand, tile, false, false, &pl.melds, &pl.concealed_kongs)
                {
                    return settle::declare_win(
                        session,
                        game,
                        s,
                        tile,
                        WinType::DiscardClaim,
                        fans,
                        Some(discarder),
                    );
                }
            }
            Claim::Kong => {
                game.seats[s].remove_tiles(&[tile; 3]);
                game.seats[s].melds.push(ExposedSet {
                    kind: MeldKind::OpenKong,
                    tiles: vec![tile; 4],
                    from: discarder,
                });
                return draw::replacement(session, game, s);
            }
            Claim::Pung => {
                game.seats[s].remove_tiles(&[tile; 2]);
                game.seats[s].melds.push(ExposedSet {
                    kind: MeldKind::Pung,
                    tiles: vec![tile; 3],
                    from: discarder,
                });
                drop(game);
                return session.push_phase(s, Phase::Discard);
            }
            Claim::Chow(support) => {
                game.seats[s].remove_tiles(&support);
                let mut tiles = support;
                tiles.push(tile);
                tiles.sort();
                game.seats[s].melds.push(ExposedSet {
                    kind: MeldKind::Chow,
                    tiles,
                    from: discarder,
                });
                drop(game);
                return session.push_phase(s, Phase::Discard);
            }
        }
    }
    let next = game.next_seat(discarder);
    game.turn = next;
    drop(game);
    session.push_phase(next, Phase::Draw)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::super::Config;
    use super::*;
    use crate::link::{ChoiceError, RoomLink, RoomState};

    fn game_with_hands(hands: [&str; 4]) -> Game {
        let seats = (0..4)
            .map(|s| {
                let mut pl = SeatState::new(s, s as u64, format!("p{}", s));
                pl.hand = tiles_from_string(hands[s]);
                pl.sort_hand();
                pl
            })
            .collect();
        Game::new(seats)
    }

    #[test]
    fn test_far_win_outranks_near_pung() {
        // seat 1 can pung the discard, seat 3 wins on it
        let game = game_with_hands([
            "m111m222m333m444z1",
            "s55p111p222p39z111",
            "m123m456m789p12z33",
            "m123m456p789s55z77",
        ]);
        let claims = collect_claims(&game, 0, Tile::value(TS, 5));
        assert_eq!(claims[0], (3, Claim::Win));
        assert_eq!(claims[1], (1, Claim::Pung));
    }

    #[test]
    fn test_chow_only_next_seat() {
        let game = game_with_hands([
            "m111m222m333m444z1",
            "m258p258z1122345",
            "s46p111p222p333z56",
            "m111m222m333m444z2",
        ]);
        // seat 2 holds the run support but sits two after the discarder
        let claims = collect_claims(&game, 0, Tile::value(TS, 5));
        assert!(claims.is_empty());
        // from seat 1 the same tile is chowable by seat 2
        let claims = collect_claims(&game, 1, Tile::value(TS, 5));
        assert_eq!(
            claims,
            vec![(2, Claim::Chow(tiles_from_string("s4s6")))]
        );
    }

    struct AcceptLink;

    impl RoomLink for AcceptLink {
        fn state(&self) -> RoomState {
            RoomState::Running
        }
        fn broadcast(&self, _text: &str) {}
        fn send(&self, _seat: Seat, _text: &str) {}
        fn request_choice(&self, _seat: Seat, _timeout: Duration) -> Result<usize, ChoiceError> {
            Ok(1)
        }
    }

    #[test]
    fn test_granted_chow_deducts_only_the_support_tiles() {
        let players = (0..4).map(|i| (i as u64, format!("p{}", i))).collect();
        let session = Session::new(players, Arc::new(AcceptLink), Config::default()).unwrap();
        {
            let mut game = session.lock_game();
            game.status = HandStatus::Playing;
            let hands = [
                "m234m567p234p567z6",
                "m111m222m333m444z1",
                "s44s66z12234m19p19",
                "m234m567p234p567z5",
            ];
            for (s, h) in hands.iter().enumerate() {
                game.seats[s].hand = tiles_from_string(h);
                game.seats[s].sort_hand();
            }
        }
        // seat 2, the discarder's next seat, holds s4/s6 around the s5
        let s5 = Tile::value(TS, 5);
        let game = session.lock_game();
        run(&session, game, 1, s5).unwrap();

        let snap = session.snapshot();
        let claimant = &snap.seats[2];
        assert_eq!(claimant.melds.len(), 1);
        assert_eq!(claimant.melds[0].kind, MeldKind::Chow);
        assert_eq!(claimant.melds[0].tiles, tiles_from_string("s4s5s6"));
        assert_eq!(claimant.melds[0].from, 1);
        // one copy of each supporting tile left, the claimed tile never
        // entered the concealed hand
        assert_eq!(claimant.hand.len(), 11);
        assert_eq!(count_tile(&claimant.hand, Tile::value(TS, 4)), 1);
        assert_eq!(count_tile(&claimant.hand, Tile::value(TS, 6)), 1);
        assert_eq!(count_tile(&claimant.hand, s5), 0);
        assert_eq!(snap.turn, 2);
    }

    #[test]
    fn test_kong_outranks_pung_per_seat() {
        let game = game_with_hands([
            "m111m222m333m444z1",
            "s555p111p222p33z44",
            "m123m456m789p12z33",
            "m111m222m333m444z2",
        ]);
        let claims = collect_claims(&game, 0, Tile::value(TS, 5));
        assert_eq!(claims, vec![(1, Claim::Kong)]);
    }
}
