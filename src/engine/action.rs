use tracing::info;

use crate::link::GameError;
use crate::model::*;

use super::{draw, Session};

// Self-initiated kong menu after a draw. Declining, timing out or picking
// an unlisted number all mean the seat just discards.
pub(super) fn run(session: &Session, seat: Seat, options: Vec<SelfKong>) -> Result<(), GameError> {
    let mut game = session.lock_game();
    let menu: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(i, k)| format!("{}:{}", i + 1, k))
        .collect();
    session
        .link
        .send(seat, &format!("0:pass {}", menu.join(" ")));
    let choice = session
        .request_choice(seat, session.config.claim_timeout)
        .filter(|&n| n >= 1 && n <= options.len());
    let kong = match choice {
        Some(n) => options[n - 1],
        None => {
            drop(game);
            return session.push_phase(seat, Phase::Discard);
        }
    };

    if let Some(t) = game.seats[seat].drawn.take() {
        game.seats[seat].hand.push(t);
        game.seats[seat].sort_hand();
    }
    match kong {
        SelfKong::Concealed(t) => {
            game.seats[seat].remove_tiles(&[t; 4]);
            game.seats[seat].concealed_kongs.push(t);
            session
                .link
                .broadcast(&format!("seat {} declares a concealed kong", seat));
        }
        SelfKong::Upgrade(t) => {
            game.seats[seat].remove_tiles(&[t]);
            if let Some(i) = game.seats[seat].exposed_pung_of(t) {
                let meld = &mut game.seats[seat].melds[i];
                meld.kind = MeldKind::UpgradedKong;
                meld.tiles.push(t);
            }
            session
                .link
                .broadcast(&format!("seat {} upgrades a pung of {} to a kong", seat, t));
        }
    }
    info!(seat, kong = %kong, "kong declared");
    draw::replacement(session, game, seat)
}
