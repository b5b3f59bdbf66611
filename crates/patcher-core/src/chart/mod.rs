//! Chart-related types.
//!
//! - `Difficulty` - difficulty labels (Easy, Normal, Hard, Expert, ExpertPlus)
//! - `PATCH_PRIORITY` - lookup order used to pick the authoritative tempo
//! - `TrackTempos`, `close_enough` - tempo bookkeeping and comparison

mod difficulty;
mod tempo;

pub use difficulty::*;
pub use tempo::*;
