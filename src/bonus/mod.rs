//! Craft bonus mechanic - accumulation, decay, and amount decision

pub mod amount;
pub mod tracker;

pub use amount::decide;
pub use tracker::BonusTracker;
