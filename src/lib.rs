//! Dropfour library - two-player connection game engine
//!
//! This library provides a packed-bitboard Connect Four engine and the
//! session layer that drives it from discrete player intents.
//!
//! # Architecture
//!
//! - **Board engine**: bit-packed board with constant-time overflow and
//!   four-in-a-row detection
//! - **Session**: turn-synchronized state machine from move/forfeit intents
//!   to a terminal outcome, plus a registry of live sessions
//! - **Pump**: per-session async process loop draining a private intent
//!   inbox
//!
//! # Example
//!
//! ```
//! use dropfour::{GameSession, Intent, Player};
//!
//! # fn example() -> Result<(), dropfour::SessionError> {
//! let mut session = GameSession::new(
//!     Player::new("alice".into(), "Alice".into()),
//!     Player::new("bob".into(), "Bob".into()),
//! )?;
//!
//! let render = session.submit(Intent::Move { actor: "alice".into(), column: 3 });
//! assert_eq!(render.outcome(), &None);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod intent;
mod pump;
mod session;

// Crate-level exports - Board engine
pub use games::connect_four::{Bitboard, Disc, HEIGHT, Outcome, SIZE, WIDTH};

// Crate-level exports - Intents
pub use intent::{Intent, PlayerId, SessionError};

// Crate-level exports - Session management
pub use session::{
    GameSession, Player, RenderRequest, SessionId, SessionRegistry, SessionStatus,
};

// Crate-level exports - Intent pump
pub use pump::{IntentSender, SessionPump};
