//! Game session management: turn-synchronized intent processing.
//!
//! A [`GameSession`] owns one board and the two seated players, and is the
//! sole serialization point for the board engine: every intent passes
//! through [`GameSession::submit`], which validates it against the current
//! turn and state before any mutation. Invalid intents are dropped, not
//! raised: concurrent button presses from both players are expected input,
//! not errors.

use crate::games::connect_four::{Bitboard, Disc, Outcome, WIDTH};
use crate::intent::{Intent, PlayerId, SessionError};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// A player in a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Actor identity, fixed at session creation.
    id: PlayerId,
    /// Display name used in render requests.
    name: String,
}

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Waiting for the current player's move.
    AwaitingMove,
    /// Terminal; no further intent changes state.
    Completed(Outcome),
}

/// Snapshot handed to the display collaborator after every submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RenderRequest {
    /// Board snapshot for cell-by-cell rendering (or its `Display` grid).
    board: Bitboard,
    /// Status line: whose turn it is, or the terminal outcome description.
    status: String,
    /// Terminal outcome, present once the session has completed.
    outcome: Option<Outcome>,
}

/// A game session between two players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Bitboard,
    players: [Player; 2],
    status: SessionStatus,
}

impl GameSession {
    /// Starts a game between two distinct identities. The first player
    /// moves first.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidPlayers`] when both seats carry the
    /// same identity.
    #[instrument(skip_all, fields(first = %first.id(), second = %second.id()))]
    pub fn new(first: Player, second: Player) -> Result<Self, SessionError> {
        if first.id() == second.id() {
            warn!("rejected session: a player cannot play themselves");
            return Err(SessionError::InvalidPlayers(first.id().clone()));
        }
        info!("creating game session");
        Ok(Self {
            board: Bitboard::new(),
            players: [first, second],
            status: SessionStatus::AwaitingMove,
        })
    }

    /// The board as currently played.
    pub fn board(&self) -> &Bitboard {
        &self.board
    }

    /// Lifecycle state of this session.
    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    /// Player seated on `side`.
    pub fn player(&self, side: Disc) -> &Player {
        &self.players[side.index()]
    }

    /// Checks whether the session has completed.
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, SessionStatus::Completed(_))
    }

    /// Side the given actor plays, if seated in this session.
    fn side_of(&self, actor: &str) -> Option<Disc> {
        if self.players[0].id() == actor {
            Some(Disc::Red)
        } else if self.players[1].id() == actor {
            Some(Disc::Yellow)
        } else {
            None
        }
    }

    /// Processes one intent and reports the resulting state.
    ///
    /// Invalid intents (wrong turn, unplayable or out-of-range column,
    /// unknown actor, anything after completion) are dropped: state is
    /// unchanged and the returned render request describes it as it stands.
    #[instrument(skip(self), fields(turn = self.board.turns()))]
    pub fn submit(&mut self, intent: Intent) -> RenderRequest {
        if self.is_terminal() {
            debug!(actor = intent.actor(), "intent after completion dropped");
            return self.render();
        }
        match intent {
            Intent::Move { actor, column } => self.handle_move(&actor, column),
            Intent::Forfeit { actor } => self.handle_forfeit(&actor),
        }
        self.render()
    }

    fn handle_move(&mut self, actor: &str, column: usize) {
        let mover = self.board.to_move();
        match self.side_of(actor) {
            Some(side) if side == mover => {}
            Some(side) => {
                debug!(actor, %side, "move out of turn dropped");
                return;
            }
            None => {
                debug!(actor, "move from unknown actor dropped");
                return;
            }
        }
        if column >= WIDTH || !self.board.is_playable(column) {
            debug!(actor, column, "unplayable column dropped");
            return;
        }

        self.board.drop_piece(column);

        // Win is checked only for the side that just moved; the opponent
        // cannot have completed a line on this turn.
        if self.board.has_won(mover) {
            info!(winner = %mover, "four connected");
            self.status = SessionStatus::Completed(Outcome::Win(mover));
        } else if self.board.is_full() {
            info!("board full with no connection");
            self.status = SessionStatus::Completed(Outcome::Draw);
        } else {
            debug!(actor, column, "move applied");
        }
    }

    fn handle_forfeit(&mut self, actor: &str) {
        let Some(loser) = self.side_of(actor) else {
            debug!(actor, "forfeit from unknown actor dropped");
            return;
        };
        let winner = loser.opponent();
        info!(%winner, %loser, "game forfeited");
        self.status = SessionStatus::Completed(Outcome::Forfeit { winner, loser });
    }

    /// Render request for the current state, without processing an intent.
    pub fn render(&self) -> RenderRequest {
        let (status, outcome) = match self.status {
            SessionStatus::AwaitingMove => {
                let side = self.board.to_move();
                let player = self.player(side);
                (
                    format!("{} ({})'s turn", player.name(), side.marker()),
                    None,
                )
            }
            SessionStatus::Completed(outcome) => (self.describe(&outcome), Some(outcome)),
        };
        RenderRequest {
            board: self.board.clone(),
            status,
            outcome,
        }
    }

    fn describe(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Win(side) => {
                let player = self.player(*side);
                format!("{} ({}) won!", player.name(), side.marker())
            }
            Outcome::Forfeit { winner, loser } => {
                let won = self.player(*winner);
                let lost = self.player(*loser);
                format!(
                    "{} ({}) won ({} ({}) forfeited)",
                    won.name(),
                    winner.marker(),
                    lost.name(),
                    loser.marker()
                )
            }
            Outcome::Draw => "board is full: draw".to_string(),
        }
    }
}

/// Externally-owned table of live sessions.
///
/// Each session sits behind its own lock, so intents for one session are
/// processed strictly sequentially while distinct sessions proceed in
/// parallel. The registry lock covers only the map itself, never a
/// transition.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<SessionId, Arc<Mutex<GameSession>>>>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and registers a session under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidPlayers`] for identical identities and
    /// [`SessionError::DuplicateSession`] when `id` is already registered.
    #[instrument(skip(self, first, second))]
    pub fn create(
        &self,
        id: SessionId,
        first: Player,
        second: Player,
    ) -> Result<Arc<Mutex<GameSession>>, SessionError> {
        let session = GameSession::new(first, second)?;
        let mut sessions = self.sessions.lock().unwrap();
        if sessions.contains_key(&id) {
            warn!(session_id = %id, "session already exists");
            return Err(SessionError::DuplicateSession(id));
        }
        let handle = Arc::new(Mutex::new(session));
        sessions.insert(id.clone(), handle.clone());
        info!(session_id = %id, "registered session");
        Ok(handle)
    }

    /// Looks up a session by id.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Option<Arc<Mutex<GameSession>>> {
        let sessions = self.sessions.lock().unwrap();
        let handle = sessions.get(id).cloned();
        if handle.is_none() {
            debug!(session_id = id, "session not found");
        }
        handle
    }

    /// Submits an intent to a registered session, under that session's own
    /// lock. Returns `None` for unknown ids.
    #[instrument(skip(self, intent))]
    pub fn submit(&self, id: &str, intent: Intent) -> Option<RenderRequest> {
        let handle = self.get(id)?;
        let mut session = handle.lock().unwrap();
        Some(session.submit(intent))
    }

    /// Removes a session, returning its handle if it was registered.
    /// Completed sessions are discarded this way; nothing is persisted.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> Option<Arc<Mutex<GameSession>>> {
        let mut sessions = self.sessions.lock().unwrap();
        let removed = sessions.remove(id);
        if removed.is_some() {
            info!(session_id = id, "removed session");
        }
        removed
    }

    /// Lists all registered session ids.
    pub fn list(&self) -> Vec<SessionId> {
        let sessions = self.sessions.lock().unwrap();
        sessions.keys().cloned().collect()
    }
}
