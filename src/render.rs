//! Plain-text rendering of cards, decks, and dealt hands.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::options::{RenderOptions, SuitStyle};

fn push_card(out: &mut String, card: Card, style: SuitStyle) {
    let suit = match style {
        SuitStyle::Symbol => card.suit().symbol(),
        SuitStyle::Letter => card.suit().letter(),
    };
    out.push_str(card.rank().token());
    out.push(suit);
}

/// Renders a single card, e.g. `10♠` or `QH`.
///
/// ```
/// use deckrs::{Card, Rank, Suit, SuitStyle, render::render_card};
///
/// let card = Card::new(Suit::Hearts, Rank::Queen);
/// assert_eq!(render_card(card, SuitStyle::Letter), "QH");
/// ```
#[must_use]
pub fn render_card(card: Card, style: SuitStyle) -> String {
    let mut out = String::new();
    push_card(&mut out, card, style);
    out
}

/// Renders a card sequence, starting a new line after every
/// `options.columns` cards.
#[must_use]
pub fn render_cards(cards: &[Card], options: &RenderOptions) -> String {
    let mut out = String::new();
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            if options.columns > 0 && i % options.columns == 0 {
                out.push('\n');
            } else {
                out.push_str(&options.separator);
            }
        }
        push_card(&mut out, *card, options.suit_style);
    }
    out
}

/// Renders dealt hands, one hand per line.
///
/// `options.columns` is ignored; each hand stays on its own line.
#[must_use]
pub fn render_hands(hands: &[Vec<Card>], options: &RenderOptions) -> String {
    let line_options = RenderOptions {
        columns: 0,
        ..options.clone()
    };
    let mut out = String::new();
    for (i, hand) in hands.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_cards(hand, &line_options));
    }
    out
}
