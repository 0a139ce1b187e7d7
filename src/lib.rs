//! A standard 52-card deck with deterministic shuffling and optional `no_std`
//! support.
//!
//! The crate provides a [`Deck`] type that is built in a canonical order,
//! shuffled from a 32-bit seed, sorted back into canonical order, and dealt
//! into fixed-size hands.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, RenderOptions};
//!
//! let mut deck = Deck::new();
//! deck.shuffle(42);
//! let hands = deck.deal_hand(3, 5).unwrap();
//! let text = deckrs::render::render_hands(&hands, &RenderOptions::default());
//! assert_eq!(text.lines().count(), 3);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod render;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, SUIT_PRIORITY, compare_deck_order};
pub use error::DealError;
pub use options::{DeckOptions, RenderOptions, SortStrategy, SuitStyle};
