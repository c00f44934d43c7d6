//! Card-pairs game state: dealing, flipping, matching and victory.
//!
//! The engine never reads the clock. Callers pass `Instant`s in, and the
//! delayed flip-back of a mismatched pair is applied by whichever call
//! first arrives at or after its deadline.

pub mod deck;
pub mod session;
pub mod tracker;

pub use deck::{Card, PairCount};
pub use session::{DEFAULT_REVEAL_DELAY, Outcome, RevertToken, Session};
pub use tracker::TrackerState;
