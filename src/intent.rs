//! First-class intent types for session input.
//!
//! Intents are domain events decoupled from the input surface that produced
//! them: the display collaborator resolves raw platform events (clicks,
//! reactions, key presses) into typed intents before submission, so the
//! session only ever sees well-formed requests from known shapes of actor.

use serde::{Deserialize, Serialize};

/// Opaque identity of an external actor.
pub type PlayerId = String;

/// A request submitted to a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// The actor asks to drop a piece in a column.
    Move {
        /// Identity of the requesting actor.
        actor: PlayerId,
        /// Target column, 0-based.
        column: usize,
    },
    /// The actor concedes the game.
    Forfeit {
        /// Identity of the requesting actor.
        actor: PlayerId,
    },
}

impl Intent {
    /// Identity of the actor behind this intent.
    pub fn actor(&self) -> &str {
        match self {
            Intent::Move { actor, .. } | Intent::Forfeit { actor } => actor,
        }
    }
}

/// Errors that can occur when creating or registering a session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// Both seats were given the same identity.
    #[display("invalid players: {} cannot play themselves", _0)]
    InvalidPlayers(PlayerId),

    /// A session with this identifier is already registered.
    #[display("session {} already exists", _0)]
    DuplicateSession(String),
}

impl std::error::Error for SessionError {}
