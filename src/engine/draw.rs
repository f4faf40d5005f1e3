use std::sync::MutexGuard;

use crate::link::GameError;
use crate::model::*;
use crate::rule;

use super::{settle, Session};

pub(super) fn run(session: &Session, seat: Seat) -> Result<(), GameError> {
    let mut game = session.lock_game();
    if rule::is_flow(&game.wall) {
        return settle::declare_flow(session, game);
    }
    let tile = match game.draw_tile() {
        Some(t) => t,
        None => return settle::declare_flow(session, game),
    };
    game.turn = seat;
    game.seats[seat].drawn = Some(tile);
    session.link.send(seat, &format!("you draw {}", tile));

    let pl = &game.seats[seat];
    if let Some(fans) = rule::can_win(&pl.hand, tile, true, false, &pl.melds, &pl.concealed_kongs)
    {
        return settle::declare_win(session, game, seat, tile, WinType::SelfDrawn, fans, None);
    }
    let options = rule::self_kong_options(&game.seats[seat]);
    drop(game);
    if options.is_empty() {
        session.push_phase(seat, Phase::Discard)
    } else {
        session.push_phase(seat, Phase::Action(options))
    }
}

// Draw after a declared kong. The replacement tile is checked for a win
// before anything else; such a win settles double.
pub(super) fn replacement(
    session: &Session,
    mut game: MutexGuard<'_, Game>,
    seat: Seat,
) -> Result<(), GameError> {
    if rule::is_flow(&game.wall) {
        return settle::declare_flow(session, game);
    }
    let tile = match game.draw_tile() {
        Some(t) => t,
        None => return settle::declare_flow(session, game),
    };
    game.seats[seat].drawn = Some(tile);
    session
        .link
        .send(seat, &format!("replacement draw {}", tile));

    let pl = &game.seats[seat];
    if let Some(fans) = rule::can_win(&pl.hand, tile, true, true, &pl.melds, &pl.concealed_kongs) {
        return settle::declare_win(
            session,
            game,
            seat,
            tile,
            WinType::KongReplacement,
            fans,
            None,
        );
    }
    drop(game);
    session.push_phase(seat, Phase::Discard)
}
