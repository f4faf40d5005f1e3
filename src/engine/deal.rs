use tracing::info;

use crate::link::GameError;
use crate::model::*;
use crate::rule;

use super::Session;

// Build the wall and hand out 13 tiles per seat. The dealer's 14th tile
// arrives through the ordinary draw path right after.
pub(super) fn run(session: &Session, seat: Seat) -> Result<(), GameError> {
    {
        let mut game = session.lock_game();
        game.status = HandStatus::Dealing;
        game.wall = rule::build_wall(&session.config.wall);
        let n = game.seat_count();
        let hands = rule::deal_hands(&mut game.wall, n);
        for (s, hand) in hands.into_iter().enumerate() {
            let wind = game.seat_wind(s);
            let is_dealer = game.is_dealer(s);
            game.seats[s].reset_for_hand(hand, wind, is_dealer);
        }
        game.turn = seat;
        game.status = HandStatus::Playing;
        info!(hand = game.hand_count, dealer = seat, "hand started");
        session.link.broadcast(&format!(
            "hand {} begins, seat {} deals",
            game.hand_count, seat
        ));
        for s in 0..game.seat_count() {
            session
                .link
                .send(s, &format!("your hand: {}", tiles_to_string(&game.seats[s].hand)));
        }
    }
    session.push_phase(seat, Phase::Draw)
}
