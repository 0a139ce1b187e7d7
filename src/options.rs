//! Deck and rendering configuration options.

extern crate alloc;

use alloc::borrow::Cow;

/// Algorithm used to put a deck into canonical order.
///
/// Both strategies produce the same permutation, since no two distinct cards
/// compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum SortStrategy {
    /// In-place selection sort, O(n²) comparisons.
    #[default]
    Selection,
    /// The slice's unstable sort.
    Standard,
}

/// How a suit is written when rendering cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum SuitStyle {
    /// Unicode suit symbol (`♦`, `♣`, `♥`, `♠`).
    #[default]
    Symbol,
    /// Single ASCII letter (`D`, `C`, `H`, `S`).
    Letter,
}

/// Configuration options for a deck.
///
/// ```
/// use deckrs::{DeckOptions, SortStrategy};
///
/// let options = DeckOptions::default().with_sort_strategy(SortStrategy::Standard);
/// assert_eq!(options.sort_strategy, SortStrategy::Standard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeckOptions {
    /// Algorithm used by [`crate::Deck::sort`].
    pub sort_strategy: SortStrategy,
}

impl DeckOptions {
    /// Sets the sort strategy.
    #[must_use]
    pub const fn with_sort_strategy(mut self, strategy: SortStrategy) -> Self {
        self.sort_strategy = strategy;
        self
    }
}

/// Configuration options for rendering cards as text.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::{RenderOptions, SuitStyle};
///
/// let options = RenderOptions::default()
///     .with_columns(4)
///     .with_suit_style(SuitStyle::Letter)
///     .with_separator(",");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Cards per line. 0 renders everything on one line.
    pub columns: usize,
    /// How suits are written.
    pub suit_style: SuitStyle,
    /// Text placed between cards on the same line.
    pub separator: Cow<'static, str>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            columns: 13,
            suit_style: SuitStyle::Symbol,
            separator: Cow::Borrowed(" "),
        }
    }
}

impl RenderOptions {
    /// Sets the number of cards per line.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::RenderOptions;
    ///
    /// let options = RenderOptions::default().with_columns(5);
    /// assert_eq!(options.columns, 5);
    /// ```
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the suit style.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{RenderOptions, SuitStyle};
    ///
    /// let options = RenderOptions::default().with_suit_style(SuitStyle::Letter);
    /// assert_eq!(options.suit_style, SuitStyle::Letter);
    /// ```
    #[must_use]
    pub fn with_suit_style(mut self, style: SuitStyle) -> Self {
        self.suit_style = style;
        self
    }

    /// Sets the separator placed between cards on a line.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::RenderOptions;
    ///
    /// let options = RenderOptions::default().with_separator(" | ");
    /// assert_eq!(options.separator, " | ");
    /// ```
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }
}
