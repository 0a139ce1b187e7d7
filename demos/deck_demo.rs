//! Shuffles, sorts, and deals a deck, printing each step.
//!
//! Set `RUST_LOG=deckrs=debug` to see the library's trace output.

use deckrs::render::render_hands;
use deckrs::{Deck, RenderOptions};
use tracing_subscriber::EnvFilter;

fn banner(title: &str) {
    println!("\n=== {title} ==============================");
}

fn deal(deck: &Deck, options: &RenderOptions) {
    match deck.deal_hand(3, 5) {
        Ok(hands) => println!("{}", render_hands(&hands, options)),
        Err(err) => println!("Deal error: {err}"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = RenderOptions::default();
    let mut deck = Deck::new();

    banner("Shuffle Deck");
    deck.shuffle(15);
    println!("{}", deck.render(&options));

    banner("Sorted Deck");
    deck.sort();
    println!("{}", deck.render(&options));

    banner("Shuffled Again");
    deck.shuffle(34);
    println!("{}", deck.render(&options));

    banner("Deal 3 sets of 5 cards");
    deal(&deck, &options);

    banner("Deal again");
    deal(&deck, &options);

    banner("Shuffle and deal again");
    deck.shuffle(99);
    deal(&deck, &options);
}
