use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::Card;
use crate::types::{Color, Count, Fill, Property, Shape};

/// The pool of not-yet-in-play cards: every one of the 81 property
/// combinations exactly once. Cards leave by `draw` and may come back by
/// `insert`; they are moved, never duplicated.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full Cartesian product of the four properties in nested iteration
    /// order (color outer, count inner). The order only matters pre-shuffle.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(81);
        for color in Color::ALL {
            for shape in Shape::ALL {
                for fill in Fill::ALL {
                    for count in Count::ALL {
                        cards.push(Card::new(color, shape, fill, count));
                    }
                }
            }
        }
        Self { cards }
    }

    #[inline]
    pub fn all_cards(&self) -> &[Card] {
        &self.cards
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the last card. `None` means the deck is
    /// exhausted, which is a normal end-of-round condition, not an error.
    #[inline]
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns cards to the deck. With `random` off they are prepended in
    /// their given relative order; with it on, each card lands at an
    /// independently uniform position over the current length (recomputed
    /// after every insertion), spreading a recycled set through the deck.
    pub fn insert<R: Rng>(&mut self, cards: Vec<Card>, random: bool, rng: &mut R) {
        if !random {
            let mut kept = std::mem::replace(&mut self.cards, cards);
            self.cards.append(&mut kept);
            return;
        }

        for card in cards {
            let at = if self.cards.is_empty() {
                0
            } else {
                rng.gen_range(0..self.cards.len())
            };
            self.cards.insert(at, card);
        }
    }

    /// Uniform in-place permutation (Fisher–Yates via `SliceRandom`).
    #[inline]
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
