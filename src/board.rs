use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;

/// The rectangular grid of visible card slots, bound to the deck it draws
/// from. Columns are stored column-major (`columns[x][y]`); every search,
/// removal and compaction tie-break follows that flattened order.
#[derive(Debug, Clone)]
pub struct PlayArea {
    deck: Deck,
    columns: Vec<Vec<Option<Card>>>,
    width: usize,
    height: usize,
    cards_in_play: usize,
    recycle: bool,
}

impl PlayArea {
    pub const DEFAULT_CARDS_IN_PLAY: usize = 12;
    pub const DEFAULT_WIDTH: usize = 4;

    #[inline]
    pub fn new(deck: Deck) -> Self {
        Self::with_recycling(deck, false)
    }

    /// With recycling on, matched sets go back into the deck at random
    /// positions instead of leaving play for good.
    pub fn with_recycling(deck: Deck, recycle: bool) -> Self {
        Self {
            deck,
            columns: Vec::new(),
            width: 0,
            height: 0,
            cards_in_play: 0,
            recycle,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cards_in_play(&self) -> usize {
        self.cards_in_play
    }

    #[inline]
    pub fn cards_in_deck(&self) -> usize {
        self.deck.len()
    }

    #[inline]
    pub fn card_at(&self, x: usize, y: usize) -> Option<&Card> {
        self.columns.get(x).and_then(|col| col.get(y)).and_then(Option::as_ref)
    }

    /// Places a card, growing the backing storage as needed and counting the
    /// slot if it was previously empty. Does not touch `width`/`height`;
    /// those are driven by `fill`/`add_column`.
    pub fn set_card_at(&mut self, x: usize, y: usize, card: Card) {
        if self.columns.len() <= x {
            self.columns.resize_with(x + 1, Vec::new);
        }
        let column = &mut self.columns[x];
        if column.len() <= y {
            column.resize(y + 1, None);
        }
        if column[y].is_none() {
            self.cards_in_play += 1;
        }
        column[y] = Some(card);
    }

    /// Clears the first slot (column-major, within the current bounds)
    /// holding an equal card. Removing a card that is not in play is a
    /// no-op.
    pub fn remove_card(&mut self, card: &Card) {
        for x in 0..self.width {
            for y in 0..self.height {
                if self.card_at(x, y) == Some(card) {
                    self.columns[x][y] = None;
                    self.cards_in_play -= 1;
                    return;
                }
            }
        }
    }

    fn take_card_at(&mut self, x: usize, y: usize) -> Option<Card> {
        let taken = self.columns.get_mut(x)?.get_mut(y)?.take();
        if taken.is_some() {
            self.cards_in_play -= 1;
        }
        taken
    }

    /// Brings the grid up to at least the default shape, draws a card into
    /// every empty slot (stamping a strictly increasing appear order
    /// starting at 0 for this pass), then keeps adding columns until the
    /// board holds a set or the deck runs out. Slots left empty by an
    /// exhausted deck stay empty.
    pub fn fill(&mut self) {
        self.width = self.width.max(Self::DEFAULT_WIDTH);
        self.height = self
            .height
            .max(Self::DEFAULT_CARDS_IN_PLAY.div_ceil(Self::DEFAULT_WIDTH));

        let mut order: u32 = 0;
        for x in 0..self.width {
            for y in 0..self.height {
                if self.card_at(x, y).is_some() {
                    continue;
                }
                let Some(mut card) = self.deck.draw() else { continue };
                card.set_appear_order(order);
                order += 1;
                self.set_card_at(x, y, card);
            }
        }

        while !self.deck.is_empty() && !self.has_sets() {
            order = self.add_column(order);
        }
    }

    /// Widens the grid by one column and fills it from the deck, continuing
    /// the given appear-order counter. Occupied slots are skipped (cannot
    /// happen for a brand-new column). Returns the updated counter so `fill`
    /// can stamp contiguously across repeated additions.
    pub fn add_column(&mut self, start_order: u32) -> u32 {
        let x = self.width;
        self.width += 1;

        let mut order = start_order;
        for y in 0..self.height {
            if self.card_at(x, y).is_some() {
                continue;
            }
            let Some(mut card) = self.deck.draw() else { continue };
            card.set_appear_order(order);
            order += 1;
            self.set_card_at(x, y, card);
        }
        order
    }

    /// Cards in flattened column-major order over the whole backing grid.
    /// Unlike `remove_card`, not bounded by `width`.
    fn flattened(&self) -> Vec<&Card> {
        self.columns
            .iter()
            .flatten()
            .filter_map(Option::as_ref)
            .collect()
    }

    /// First valid set in flattened grid order, `None` when the board holds
    /// none. Deterministic: ties break by position, not by any notion of a
    /// "best" set.
    pub fn first_set(&self) -> Option<[Card; 3]> {
        first_set_among(&self.flattened()).map(|[a, b, c]| [a.clone(), b.clone(), c.clone()])
    }

    #[inline]
    pub fn has_sets(&self) -> bool {
        first_set_among(&self.flattened()).is_some()
    }

    /// Removes each given card and compacts the grid. With recycling on,
    /// the cards that were actually removed go back into the deck at random
    /// positions.
    pub fn remove_set<R: Rng>(&mut self, cards: &[Card], rng: &mut R) {
        let mut removed = Vec::with_capacity(cards.len());
        for card in cards {
            let before = self.cards_in_play;
            self.remove_card(card);
            if self.cards_in_play < before {
                removed.push(card.clone());
            }
        }

        self.compact();

        if self.recycle && !removed.is_empty() {
            self.deck.insert(removed, true, rng);
        }
    }

    /// Pulls an over-widened board back toward the default shape: every
    /// empty slot (column-major) is backfilled from the first occupied slot
    /// after it in an overflow column, then `width` is recomputed as
    /// ceil(cards_in_play / height), floored at the default. Skipped when
    /// the board holds more than the default capacity or has not widened.
    pub fn compact(&mut self) {
        if self.cards_in_play > Self::DEFAULT_CARDS_IN_PLAY || self.width <= Self::DEFAULT_WIDTH {
            return;
        }

        for x in 0..self.width {
            for y in 0..self.height {
                if self.card_at(x, y).is_some() {
                    continue;
                }
                if let Some((dx, dy)) = self.overflow_donor_after(x, y) {
                    if let Some(card) = self.take_card_at(dx, dy) {
                        self.set_card_at(x, y, card);
                    }
                }
            }
        }

        self.width = Self::DEFAULT_WIDTH.max(self.cards_in_play.div_ceil(self.height));
    }

    /// First occupied slot in an overflow column (x >= default width),
    /// scanned left-to-right then top-to-bottom. Only slots strictly after
    /// `(x, y)` in column-major order qualify as donors.
    fn overflow_donor_after(&self, x: usize, y: usize) -> Option<(usize, usize)> {
        for dx in Self::DEFAULT_WIDTH..self.width {
            for dy in 0..self.height {
                if (dx > x || (dx == x && dy > y)) && self.card_at(dx, dy).is_some() {
                    return Some((dx, dy));
                }
            }
        }
        None
    }

    /// Full reset: every slot emptied, shape collapsed to zero. The deck is
    /// left as-is.
    pub fn clear(&mut self) {
        self.columns.clear();
        self.width = 0;
        self.height = 0;
        self.cards_in_play = 0;
    }
}

/// First triple among `cards` satisfying `Card::is_set`, enumerating
/// unordered triples in slice order. O(n³) in the number of cards.
pub fn first_set_among<'a>(cards: &[&'a Card]) -> Option<[&'a Card; 3]> {
    for i in 0..cards.len() {
        for j in i + 1..cards.len() {
            for k in j + 1..cards.len() {
                if Card::is_set([cards[i], cards[j], cards[k]]) {
                    return Some([cards[i], cards[j], cards[k]]);
                }
            }
        }
    }
    None
}
