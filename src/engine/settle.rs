use std::sync::MutexGuard;

use tracing::info;

use crate::link::GameError;
use crate::model::*;
use crate::rule;

use super::{Phase, Session};

// the wind cycle runs east through north, then the session is over
const WIND_ROUNDS: usize = 4;

// `payer` is the discarder for claim wins; everyone pays when None
fn settlement_deltas(n: usize, winner: Seat, payer: Option<Seat>, score: Score) -> Vec<Score> {
    let mut deltas = vec![0; n];
    match payer {
        Some(p) => {
            deltas[p] = -score;
            deltas[winner] = score;
        }
        None => {
            for (s, d) in deltas.iter_mut().enumerate() {
                *d = if s == winner {
                    score * (n as Score - 1)
                } else {
                    -score
                };
            }
        }
    }
    deltas
}

pub(super) fn declare_win(
    session: &Session,
    mut game: MutexGuard<'_, Game>,
    winner: Seat,
    tile: Tile,
    win_type: WinType,
    fans: Vec<Fan>,
    payer: Option<Seat>,
) -> Result<(), GameError> {
    let n = game.seat_count();
    let score = rule::calculate_score(&fans, session.config.base_score, win_type);
    let deltas = settlement_deltas(n, winner, payer, score);
    for s in 0..n {
        game.round_scores[s] = deltas[s];
        game.total_scores[s] += deltas[s];
    }
    let total = total_fan(&fans);
    let is_game_over = game.dealer == n - 1 && game.wind_round + 1 >= WIND_ROUNDS;
    info!(winner, %tile, %win_type, total, "hand won");
    game.winning_info = Some(WinningInfo {
        winner,
        tile,
        win_type,
        fans,
        total_fan: total,
        deltas,
        is_game_over,
    });
    game.status = HandStatus::Ended;
    drop(game);
    session.fan_out(Phase::Win);
    Ok(())
}

pub(super) fn declare_flow(
    session: &Session,
    mut game: MutexGuard<'_, Game>,
) -> Result<(), GameError> {
    info!(hand = game.hand_count, "hand flowed");
    game.winning_info = None;
    game.status = HandStatus::Ended;
    drop(game);
    session.fan_out(Phase::Flow);
    Ok(())
}

// Every seat receives the hand-end fan-out; the status guard lets
// exactly one of them perform the rollover. The next Deal token is only
// ever pushed by the new dealer into its own freshly drained mailbox,
// so the handoff never hits a mailbox still holding a fan-out token.
// The dealer passes on after a win, and a full dealer lap closes the
// wind round.
pub(super) fn on_win(session: &Session, seat: Seat) -> Result<(), GameError> {
    let mut game = session.lock_game();
    if game.status != HandStatus::Ended {
        return claim_deal(session, game, seat);
    }
    let info = match game.winning_info.clone() {
        Some(i) => i,
        None => return Ok(()),
    };
    session.link.broadcast(&info.to_string());
    session.link.broadcast(&standings(&game));
    if info.is_game_over {
        session.link.broadcast("the last wind round is complete, game over");
        game.status = HandStatus::Waiting;
        return Ok(());
    }
    game.dealer = game.next_seat(game.dealer);
    if game.dealer == 0 {
        game.wind_round += 1;
    }
    next_hand(session, game, seat)
}

// A flowed hand rolls over the same way but the dealer stays.
pub(super) fn on_flow(session: &Session, seat: Seat) -> Result<(), GameError> {
    let game = session.lock_game();
    if game.status != HandStatus::Ended || game.winning_info.is_some() {
        return claim_deal(session, game, seat);
    }
    session
        .link
        .broadcast("the wall is exhausted, the hand flows");
    session.link.broadcast(&standings(&game));
    next_hand(session, game, seat)
}

// Status moves to Dealing so the late fan-out tokens of the other seats
// know a deal is pending.
fn next_hand(
    session: &Session,
    mut game: MutexGuard<'_, Game>,
    seat: Seat,
) -> Result<(), GameError> {
    game.hand_count += 1;
    game.reset_for_next_hand();
    game.status = HandStatus::Dealing;
    claim_deal(session, game, seat)
}

// If this seat is the new dealer of a pending deal, it just consumed a
// token, so its mailbox is guaranteed free for the Deal push.
fn claim_deal(
    session: &Session,
    game: MutexGuard<'_, Game>,
    seat: Seat,
) -> Result<(), GameError> {
    if game.status == HandStatus::Dealing && game.dealer == seat {
        drop(game);
        return session.push_phase(seat, Phase::Deal);
    }
    Ok(())
}

fn standings(game: &Game) -> String {
    let totals: Vec<String> = game
        .total_scores
        .iter()
        .enumerate()
        .map(|(s, v)| format!("seat {}: {:+}", s, v))
        .collect();
    format!("standings: {}", totals.join(", "))
}
