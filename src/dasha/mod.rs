//! Planetary period (dasha) timelines
//!
//! Five generators share one shape: a starting lord chosen from a birth
//! quantity, a balance for that lord proportional to what is left of the
//! birth segment, then a fixed cycle of lords. Mahadashas carry one level
//! of antardashas.
//!
//! | System      | Driven by                   | Cycle     |
//! |-------------|-----------------------------|-----------|
//! | Vimshottari | Moon's nakshatra            | 120 years |
//! | Tribhagi    | Moon's nakshatra            | 3 × 40    |
//! | Ashtottari  | Moon's nakshatra and paksha | 108 years |
//! | Yogini      | Moon's nakshatra            | 2 × 36    |
//! | Chara       | ascendant sign and lords    | varies    |
//!
//! Consecutive periods share their boundary instant exactly.

pub mod ashtottari;
pub mod jaimini;
pub mod types;
pub mod vimshottari;
pub mod yogini;

pub use ashtottari::ashtottari;
pub use jaimini::{jaimini_chara, CharaPeriod};
pub use types::{period_at, DashaLord, DashaPeriod, Yogini};
pub use vimshottari::{tribhagi, vimshottari};
pub use yogini::yogini;
