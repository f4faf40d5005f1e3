// The phase state machine. One driver thread per seat calls `advance` in
// a loop; exactly one phase token is in flight for the whole table, plus
// fan-outs when a hand ends.
mod action;
mod arbitration;
mod deal;
mod discard;
mod draw;
mod settle;

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender, TrySendError};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tracing::{error, warn};

use crate::link::{GameError, RoomLink, RoomState};
use crate::model::*;
pub use crate::rule::WallSource;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_score: Score,
    pub discard_timeout: Duration,
    pub claim_timeout: Duration,
    pub watchdog: Duration,
    pub wall: WallSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_score: 1,
            discard_timeout: Duration::from_secs(30),
            claim_timeout: Duration::from_secs(20),
            watchdog: Duration::from_secs(5),
            wall: WallSource::TimeSeeded,
        }
    }
}

struct Mailbox {
    tx: SyncSender<Phase>,
    rx: Mutex<Receiver<Phase>>,
}

pub struct Session {
    game: Mutex<Game>,
    link: Arc<dyn RoomLink>,
    config: Config,
    mailboxes: Vec<Mailbox>,
}

impl Session {
    // seeds the dealer's mailbox with the first deal
    pub fn new(
        players: Vec<(u64, String)>,
        link: Arc<dyn RoomLink>,
        config: Config,
    ) -> Result<Self, GameError> {
        let n = players.len();
        if !(MIN_SEATS..=MAX_SEATS).contains(&n) {
            return Err(GameError::InvalidPlayerCount(n));
        }
        let seats = players
            .into_iter()
            .enumerate()
            .map(|(s, (id, name))| SeatState::new(s, id, name))
            .collect();
        let mailboxes = (0..n)
            .map(|_| {
                let (tx, rx) = mpsc::sync_channel(1);
                Mailbox {
                    tx,
                    rx: Mutex::new(rx),
                }
            })
            .collect();
        let session = Self {
            game: Mutex::new(Game::new(seats)),
            link,
            config,
            mailboxes,
        };
        session.push_phase(0, Phase::Deal)?;
        Ok(session)
    }

    // Runs this seat's phases until the mailbox goes quiet for one
    // watchdog tick (Ok(Running), call again), the room stops, or the
    // session breaks.
    pub fn advance(&self, seat: Seat) -> Result<RoomState, GameError> {
        loop {
            if self.link.state() != RoomState::Running {
                return Ok(RoomState::Waiting);
            }
            let phase = {
                let rx = self.mailboxes[seat].rx.lock().unwrap();
                match rx.recv_timeout(self.config.watchdog) {
                    Ok(p) => p,
                    Err(RecvTimeoutError::Timeout) => return Ok(RoomState::Running),
                    Err(RecvTimeoutError::Disconnected) => return Err(GameError::ChannelClosed),
                }
            };
            self.dispatch(seat, phase)?;
        }
    }

    fn dispatch(&self, seat: Seat, phase: Phase) -> Result<(), GameError> {
        match phase {
            Phase::Deal => deal::run(self, seat),
            Phase::Draw => draw::run(self, seat),
            Phase::Action(options) => action::run(self, seat, options),
            Phase::Discard => discard::run(self, seat),
            Phase::Win => settle::on_win(self, seat),
            Phase::Flow => settle::on_flow(self, seat),
        }
    }

    // serializable copy of the aggregate for collaborators and tests
    pub fn snapshot(&self) -> Game {
        self.game.lock().unwrap().clone()
    }

    // JSON view of the table for room front ends
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_default()
    }

    fn lock_game(&self) -> MutexGuard<'_, Game> {
        self.game.lock().unwrap()
    }

    // directed handoff of the single live token; a full mailbox means the
    // token invariant broke
    fn push_phase(&self, seat: Seat, phase: Phase) -> Result<(), GameError> {
        match self.mailboxes[seat].tx.try_send(phase) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(p)) => {
                error!(seat, phase = %p, "mailbox full, dispatch stalled");
                Err(GameError::DispatchStalled)
            }
            Err(TrySendError::Disconnected(_)) => Err(GameError::ChannelClosed),
        }
    }

    // wake every seat for a hand-end phase; a full mailbox is skipped,
    // that seat will observe the result through the status guard
    fn fan_out(&self, phase: Phase) {
        for mb in &self.mailboxes {
            let _ = mb.tx.try_send(phase.clone());
        }
    }

    // None means the seat gets the deterministic default for this prompt
    fn request_choice(&self, seat: Seat, timeout: Duration) -> Option<usize> {
        match self.link.request_choice(seat, timeout) {
            Ok(n) => Some(n),
            Err(e) => {
                warn!(seat, reason = %e, "selection fell back to default");
                self.link.send(seat, "no selection, the default applies");
                None
            }
        }
    }
}
