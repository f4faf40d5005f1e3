use tracing::info;

use crate::link::GameError;
use crate::model::*;
use crate::rule;

use super::{arbitration, settle, Session};

// Prompt for a discard, append it to the pile, then either flow the hand
// or put the tile up for claims. The fallback pick is the highest tile.
pub(super) fn run(session: &Session, seat: Seat) -> Result<(), GameError> {
    let mut game = session.lock_game();
    game.turn = seat;
    if let Some(t) = game.seats[seat].drawn.take() {
        game.seats[seat].hand.push(t);
        game.seats[seat].sort_hand();
    }

    let menu: Vec<String> = game.seats[seat]
        .hand
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}:{}", i, t))
        .collect();
    session
        .link
        .send(seat, &format!("discard which? {}", menu.join(" ")));
    let hand_len = game.seats[seat].hand.len();
    let idx = session
        .request_choice(seat, session.config.discard_timeout)
        .filter(|&n| n < hand_len)
        .unwrap_or(hand_len - 1);

    let tile = game.seats[seat].hand.remove(idx);
    let seq = game.push_discard(seat, tile);
    info!(seat, %tile, seq, "discard");
    session
        .link
        .broadcast(&format!("seat {} discards {} (#{})", seat, tile, seq));

    if rule::is_flow(&game.wall) {
        return settle::declare_flow(session, game);
    }
    arbitration::run(session, game, seat, tile)
}
