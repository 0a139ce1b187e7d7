//! The 52-card deck: canonical ordering, seeded shuffling, and dealing.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::options::{DeckOptions, RenderOptions, SortStrategy};
use crate::render::render_cards;

/// Suit order of a sorted deck, lowest first.
///
/// Independent of [`Suit`]'s declaration order.
pub const SUIT_PRIORITY: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

/// Returns the position of `suit` in [`SUIT_PRIORITY`].
#[must_use]
pub const fn suit_priority(suit: Suit) -> usize {
    match suit {
        Suit::Diamonds => 0,
        Suit::Clubs => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

/// Compares two cards by deck order: suit priority first, then rank
/// (Ace low, King high).
///
/// This is the order a freshly built or sorted deck appears in. It is not a
/// measure of which card is stronger in any game.
///
/// ```
/// use core::cmp::Ordering;
/// use deckrs::{Card, Rank, Suit, deck::compare_deck_order};
///
/// let king_of_diamonds = Card::new(Suit::Diamonds, Rank::King);
/// let ace_of_clubs = Card::new(Suit::Clubs, Rank::Ace);
/// assert_eq!(compare_deck_order(&king_of_diamonds, &ace_of_clubs), Ordering::Less);
/// ```
#[must_use]
pub fn compare_deck_order(a: &Card, b: &Card) -> Ordering {
    suit_priority(a.suit())
        .cmp(&suit_priority(b.suit()))
        .then_with(|| a.rank().index().cmp(&b.rank().index()))
}

/// Sorts `items` in place with selection sort and returns the number of
/// comparisons made.
///
/// For every position `i`, each later element that compares less than the
/// element at `i` is swapped into place, so after the inner scan `i` holds
/// the minimum of the remaining elements. A slice of length `n` always costs
/// `n * (n + 1) / 2` comparisons.
pub fn selection_sort_by<T, F>(items: &mut [T], mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    let mut comparisons = 0;
    for i in 0..len {
        for j in i..len {
            comparisons += 1;
            if compare(&items[i], &items[j]) == Ordering::Greater {
                items.swap(i, j);
            }
        }
    }
    comparisons
}

/// Generates all 52 cards in suit-then-rank declaration order, skipping the
/// placeholder rank.
fn generate_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            if rank.is_playable() {
                cards.push(Card::new(suit, rank));
            }
        }
    }
    cards
}

/// A standard 52-card deck.
///
/// A deck built with [`Deck::new`] holds every suit/rank combination exactly
/// once, and [`Deck::shuffle`] and [`Deck::sort`] only ever permute it.
/// Accessors hand out copies; the internal order is never aliased.
///
/// Two decks are equal when they hold the same cards in the same order;
/// their [`DeckOptions`] are not compared.
///
/// `Deck` has no interior mutability. Sharing one between threads requires
/// external synchronization.
///
/// # Example
///
/// ```
/// use deckrs::Deck;
///
/// let mut deck = Deck::new();
/// deck.shuffle(15);
/// let hands = deck.deal_hand(3, 5).unwrap();
/// assert_eq!(hands.len(), 3);
///
/// deck.sort();
/// assert_eq!(deck.snapshot(), Deck::new().snapshot());
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    options: DeckOptions,
}

impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
    }
}

impl Eq for Deck {}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a full deck in canonical order.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(DeckOptions::default())
    }

    /// Creates a full deck in canonical order, sorted with the configured
    /// strategy.
    #[must_use]
    pub fn with_options(options: DeckOptions) -> Self {
        let mut deck = Self {
            cards: generate_cards(),
            options,
        };
        deck.sort();
        debug!(cards = deck.cards.len(), "created deck");
        deck
    }

    /// Creates a deck holding a copy of `cards`, in the given order.
    ///
    /// This bypasses every invariant [`Deck::new`] guarantees: the sequence
    /// is not sorted, deduplicated, or checked for completeness. It exists
    /// so tests can inject a known order. Supplying a sequence that is not a
    /// full 52-card set is the caller's responsibility, and operations on
    /// such a deck reflect whatever was supplied.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
            options: DeckOptions::default(),
        }
    }

    /// Returns the options this deck was created with.
    #[must_use]
    pub const fn options(&self) -> DeckOptions {
        self.options
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards.
    ///
    /// Only possible for a deck built with [`Deck::from_cards`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a copy of the cards in their current order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Card> {
        self.cards.clone()
    }

    /// Shuffles the deck deterministically from `seed`.
    ///
    /// Uses a Fisher–Yates scan from the last position to the first, each
    /// step swapping with a uniformly chosen position at or below it, driven
    /// by a `ChaCha8Rng` seeded from `seed`. The same seed applied to the
    /// same order always yields the same result.
    ///
    /// This is **not** suitable where unpredictability matters, such as
    /// real-money gaming. Only 2^32 seeds exist, while a deck has 52!
    /// (about 8.07e67) orderings, so almost all of them are unreachable and
    /// a handful of observed cards is enough to identify the seed.
    pub fn shuffle(&mut self, seed: u32) {
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(seed));
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        debug!(seed, "shuffled deck");
    }

    /// Restores canonical order: Diamonds, Clubs, Hearts, Spades, each
    /// running Ace to King.
    pub fn sort(&mut self) {
        let strategy = self.options.sort_strategy;
        let comparisons = match strategy {
            SortStrategy::Selection => selection_sort_by(&mut self.cards, compare_deck_order),
            SortStrategy::Standard => {
                let mut comparisons = 0_usize;
                self.cards.sort_unstable_by(|a, b| {
                    comparisons += 1;
                    compare_deck_order(a, b)
                });
                comparisons
            }
        };
        debug!(?strategy, comparisons, "sorted deck");
    }

    /// Deals `sets` hands of `cards_per_set` cards from the top of the deck.
    ///
    /// Hand `k` holds the cards at positions
    /// `k * cards_per_set .. (k + 1) * cards_per_set`. The deck itself is not
    /// changed, so dealing twice without shuffling or sorting in between
    /// returns the same hands.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidDealRequest`] if `sets * cards_per_set`
    /// exceeds the number of cards in the deck or overflows.
    pub fn deal_hand(
        &self,
        sets: usize,
        cards_per_set: usize,
    ) -> Result<Vec<Vec<Card>>, DealError> {
        let available = self.cards.len();
        let total = sets
            .checked_mul(cards_per_set)
            .filter(|&total| total <= available);

        let Some(total) = total else {
            warn!(sets, cards_per_set, available, "rejected deal request");
            return Err(DealError::InvalidDealRequest {
                sets,
                cards_per_set,
                available,
            });
        };

        let hands = if cards_per_set == 0 {
            alloc::vec![Vec::new(); sets]
        } else {
            self.cards[..total]
                .chunks(cards_per_set)
                .map(<[Card]>::to_vec)
                .collect()
        };

        debug!(sets, cards_per_set, "dealt hands");
        Ok(hands)
    }

    /// Renders the deck in its current order.
    ///
    /// With the default options this is four rows of 13 cards.
    #[must_use]
    pub fn render(&self, options: &RenderOptions) -> String {
        render_cards(&self.cards, options)
    }
}
