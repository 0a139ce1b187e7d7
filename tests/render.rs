//! Rendering integration tests.

use deckrs::render::{render_card, render_cards, render_hands};
use deckrs::{Card, Deck, Rank, RenderOptions, Suit, SuitStyle};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn render_single_cards() {
    assert_eq!(
        render_card(card(Suit::Spades, Rank::Ten), SuitStyle::Symbol),
        "10♠"
    );
    assert_eq!(
        render_card(card(Suit::Clubs, Rank::Jack), SuitStyle::Letter),
        "JC"
    );
}

#[test]
fn options_builder_sets_fields() {
    let options = RenderOptions::default()
        .with_columns(4)
        .with_suit_style(SuitStyle::Letter)
        .with_separator(",");

    assert_eq!(options.columns, 4);
    assert_eq!(options.suit_style, SuitStyle::Letter);
    assert_eq!(options.separator, ",");

    let defaults = RenderOptions::default();
    assert_eq!(defaults.columns, 13);
    assert_eq!(defaults.suit_style, SuitStyle::Symbol);
    assert_eq!(defaults.separator, " ");
}

#[test]
fn deck_renders_four_rows_of_thirteen() {
    let text = Deck::new().render(&RenderOptions::default());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|line| line.split(' ').count() == 13));
    assert_eq!(lines[0], "A♦ 2♦ 3♦ 4♦ 5♦ 6♦ 7♦ 8♦ 9♦ 10♦ J♦ Q♦ K♦");
    assert_eq!(lines[3], "A♠ 2♠ 3♠ 4♠ 5♠ 6♠ 7♠ 8♠ 9♠ 10♠ J♠ Q♠ K♠");
}

#[test]
fn zero_columns_renders_one_line() {
    let options = RenderOptions::default()
        .with_columns(0)
        .with_suit_style(SuitStyle::Letter);
    let cards = [card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::King)];
    assert_eq!(render_cards(&cards, &options), "AH KC");
    assert_eq!(render_cards(&[], &options), "");
}

#[test]
fn hands_render_one_per_line() {
    let options = RenderOptions::default()
        .with_suit_style(SuitStyle::Letter)
        .with_columns(2);
    let hands = Deck::new().deal_hand(3, 5).unwrap();

    assert_eq!(
        render_hands(&hands, &options),
        "AD 2D 3D 4D 5D\n6D 7D 8D 9D 10D\nJD QD KD AC 2C"
    );
    assert_eq!(render_hands(&[], &options), "");
}
