//! Game logic
//!
//! Everything here is platform independent: storage, dictionary and
//! randomness come in through traits so front ends and tests can supply
//! their own.

pub mod outcome;
pub mod rng;
pub mod rules;
pub mod session;

pub use outcome::SubmitOutcome;
pub use rng::{FixedPick, RandomSource, SeededRandom};
pub use rules::{is_original, is_possible, is_real};
pub use session::{Accepted, GamePhase, GameSession, Rejection, Session, SessionEvent};
