//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The requested hands need more cards than the deck holds, or the
    /// total card count does not fit in a `usize`.
    #[error("cannot deal {sets} sets of {cards_per_set} cards from {available} cards")]
    InvalidDealRequest {
        /// Number of hands requested.
        sets: usize,
        /// Cards requested per hand.
        cards_per_set: usize,
        /// Cards in the deck.
        available: usize,
    },
}
