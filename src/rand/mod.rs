//! Secure random numbers and weighted sampling.
//!
//! [`SecureRandom`] adapts the operating system's cryptographic byte stream to
//! `rand_core`'s [`RngCore`](rand_core::RngCore); [`WeightedRandomSet`] turns
//! any such source into a sampler for an arbitrary discrete distribution.

mod source;
mod weighted;

pub use source::{SecureRandom, UnitFloat, entropy_source};
pub use weighted::{WeightedEntry, WeightedRandomSet};
