#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod card;
pub mod deck;
pub mod board;
pub mod rng;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{first_set_among, PlayArea};
pub use crate::card::Card;
pub use crate::deck::Deck;
pub use crate::rng::rng_from_seed;
pub use crate::types::{Color, Count, Fill, Property, PropertyEvaluation, Shape};
