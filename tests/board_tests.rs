use triadeck::{rng_from_seed, Card, Color, Count, Deck, Fill, PlayArea, Shape};

fn drained_deck() -> (Deck, Vec<Card>) {
    let mut deck = Deck::new();
    let mut drained = Vec::with_capacity(81);
    while let Some(card) = deck.draw() {
        drained.push(card);
    }
    (deck, drained)
}

#[test]
fn fresh_fill_reaches_the_default_shape() {
    // Unshuffled deck: the top 12 cards contain a set, so no extra column
    // is needed and the outcome is fully deterministic.
    let mut board = PlayArea::new(Deck::new());
    board.fill();

    assert_eq!(board.width(), 4);
    assert_eq!(board.height(), 3);
    assert_eq!(board.cards_in_play(), 12);
    assert_eq!(board.cards_in_deck(), 69);
    assert!(board.first_set().is_some(), "a filled board must be solvable");
}

#[test]
fn fill_on_a_shuffled_deck_guarantees_a_set() {
    let mut rng = rng_from_seed(0xBAD_5EED);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);
    let mut board = PlayArea::new(deck);
    board.fill();

    assert!(board.has_sets(), "deck was non-empty, so the board must hold a set");
    assert!(board.width() >= PlayArea::DEFAULT_WIDTH);
    assert_eq!(board.height(), 3);
    assert!(board.cards_in_play() >= 12);
}

#[test]
fn fill_stamps_appear_order_in_placement_order() {
    let mut board = PlayArea::new(Deck::new());
    board.fill();

    for x in 0..4 {
        for y in 0..3 {
            let card = board.card_at(x, y).expect("filled slot");
            let expected = u32::try_from(x * 3 + y).unwrap();
            assert_eq!(card.appear_order(), Some(expected), "slot ({x}, {y})");
        }
    }
}

#[test]
fn add_column_continues_the_appear_counter() {
    let mut board = PlayArea::new(Deck::new());
    board.fill();

    let next = board.add_column(12);
    assert_eq!(next, 15, "three more cards stamped 12, 13, 14");
    assert_eq!(board.width(), 5);
    assert_eq!(board.cards_in_play(), 15);
    assert_eq!(board.cards_in_deck(), 66);
    for y in 0..3 {
        let card = board.card_at(4, y).expect("new column slot");
        assert_eq!(card.appear_order(), Some(12 + u32::try_from(y).unwrap()));
    }
}

#[test]
fn fill_backfills_a_removed_slot() {
    let mut board = PlayArea::new(Deck::new());
    board.fill();

    let victim = board.card_at(2, 1).expect("filled slot").clone();
    board.remove_card(&victim);
    assert_eq!(board.cards_in_play(), 11);

    board.fill();
    assert_eq!(board.cards_in_play(), 12);
    assert_eq!(board.cards_in_deck(), 68);
    let refill = board.card_at(2, 1).expect("hole was backfilled");
    assert_eq!(refill.key(), "2-1-1-2", "next card off the deck lands in the hole");
    assert_eq!(refill.appear_order(), Some(0), "the counter restarts per fill pass");
}

#[test]
fn removing_an_absent_card_is_a_no_op() {
    let mut board = PlayArea::new(Deck::new());
    board.fill();

    // The unshuffled fill placed only Purple cards; this one stayed in the deck.
    let absent = Card::new(Color::Red, Shape::Pill, Fill::Empty, Count::One);
    board.remove_card(&absent);
    assert_eq!(board.cards_in_play(), 12);
}

#[test]
fn set_card_at_counts_a_slot_only_once() {
    let (deck, mut drained) = drained_deck();
    let mut board = PlayArea::new(deck);

    board.set_card_at(0, 0, drained.pop().unwrap());
    board.set_card_at(0, 0, drained.pop().unwrap());
    assert_eq!(board.cards_in_play(), 1, "overwriting an occupied slot adds nothing");
}

#[test]
fn unsolvable_board_expands_until_a_set_appears() {
    // Any cards whose encoded properties stay in {0, 1} form a no-set
    // layout: a valid triple would need a 2 somewhere or three equal cards.
    let mut rng = rng_from_seed(1);
    let (mut deck, _) = drained_deck();
    deck.insert(
        vec![Card::new(Color::Red, Shape::Pill, Fill::Empty, Count::Three)],
        false,
        &mut rng,
    );

    let mut board = PlayArea::new(deck);
    let mut slot = 0;
    for color in [Color::Red, Color::Green] {
        for shape in [Shape::Pill, Shape::Diamond] {
            if color == Color::Green && shape == Shape::Diamond {
                continue;
            }
            for fill in [Fill::Empty, Fill::Lines] {
                for count in [Count::One, Count::Two] {
                    board.set_card_at(slot / 3, slot % 3, Card::new(color, shape, fill, count));
                    slot += 1;
                }
            }
        }
    }
    assert_eq!(board.cards_in_play(), 12);
    assert!(!board.has_sets(), "the prepared layout must hold no set");

    board.fill();
    assert_eq!(board.width(), 5, "one extra column makes the board solvable");
    assert_eq!(board.cards_in_play(), 13);
    assert_eq!(board.cards_in_deck(), 0);
    let set = board.first_set().expect("the drawn card completes a set");
    assert!(set.iter().any(|c| c.key() == "0-0-0-2"));
}

#[test]
fn expansion_stops_when_the_deck_is_dry() {
    let (deck, _) = drained_deck();
    let mut board = PlayArea::new(deck);
    board.set_card_at(0, 0, Card::new(Color::Red, Shape::Pill, Fill::Empty, Count::One));
    board.set_card_at(0, 1, Card::new(Color::Red, Shape::Pill, Fill::Empty, Count::Two));

    // Nothing to draw and no set to find: a terminal state, not an error.
    board.fill();
    assert_eq!(board.width(), 4);
    assert_eq!(board.height(), 3);
    assert_eq!(board.cards_in_play(), 2);
    assert_eq!(board.cards_in_deck(), 0);
    assert!(!board.has_sets());
}

#[test]
fn compact_pulls_overflow_cards_back_into_default_bounds() {
    let (deck, drained) = drained_deck();
    let mut board = PlayArea::new(deck);
    board.fill(); // shapes the empty grid to 4x3
    board.add_column(0);
    board.add_column(0);
    assert_eq!(board.width(), 6);

    // Columns 0..=2 full, column 3 empty, three strays in the overflow.
    let mut cards = drained.into_iter();
    for x in 0..3 {
        for y in 0..3 {
            board.set_card_at(x, y, cards.next().unwrap());
        }
    }
    let stray_a = cards.next().unwrap();
    let stray_b = cards.next().unwrap();
    let stray_c = cards.next().unwrap();
    let (key_a, key_b, key_c) = (stray_a.key(), stray_b.key(), stray_c.key());
    board.set_card_at(4, 0, stray_a);
    board.set_card_at(4, 1, stray_b);
    board.set_card_at(5, 0, stray_c);
    assert_eq!(board.cards_in_play(), 12);

    board.compact();

    // Regression pin: ceil(12 / 3) = 4, floored at the default width.
    assert_eq!(board.width(), 4);
    assert_eq!(board.cards_in_play(), 12);
    assert_eq!(board.card_at(3, 0).map(Card::key), Some(key_a));
    assert_eq!(board.card_at(3, 1).map(Card::key), Some(key_b));
    assert_eq!(board.card_at(3, 2).map(Card::key), Some(key_c));
    assert!(board.card_at(4, 0).is_none());
    assert!(board.card_at(5, 0).is_none());
}

#[test]
fn compact_is_skipped_above_default_capacity() {
    let mut board = PlayArea::new(Deck::new());
    board.fill();
    board.add_column(12); // width 5, 15 cards in play

    board.compact();
    assert_eq!(board.width(), 5, "15 cards exceed the default capacity");
    assert_eq!(board.cards_in_play(), 15);
}

#[test]
fn full_game_drains_the_deck_and_keeps_invariants() {
    let mut rng = rng_from_seed(0xDEAD_BEEF);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);
    let mut board = PlayArea::new(deck);
    board.fill();

    let mut rounds = 0;
    while let Some(set) = board.first_set() {
        let before = board.cards_in_play();
        board.remove_set(&set, &mut rng);
        assert_eq!(board.cards_in_play(), before - 3);
        assert!(board.width() >= PlayArea::DEFAULT_WIDTH);
        assert_eq!(board.height(), 3);

        board.fill();
        rounds += 1;
        assert!(rounds <= 27, "an 81-card game cannot produce more than 27 sets");
    }

    assert_eq!(
        board.cards_in_deck(),
        0,
        "fill keeps the board solvable while cards remain, so only an empty deck ends the game"
    );
}

#[test]
fn recycling_returns_removed_cards_to_the_deck() {
    let mut rng = rng_from_seed(42);
    let mut board = PlayArea::with_recycling(Deck::new(), true);
    board.fill();
    assert_eq!(board.cards_in_deck(), 69);

    let set = board.first_set().expect("fresh board is solvable");
    board.remove_set(&set, &mut rng);
    assert_eq!(board.cards_in_play(), 9);
    assert_eq!(board.cards_in_deck(), 72, "the matched triad went back in");

    board.fill();
    assert_eq!(board.cards_in_play(), 12);
    assert!(board.has_sets());
}

#[test]
fn clear_resets_the_shape_but_not_the_deck() {
    let mut board = PlayArea::new(Deck::new());
    board.fill();

    board.clear();
    assert_eq!(board.width(), 0);
    assert_eq!(board.height(), 0);
    assert_eq!(board.cards_in_play(), 0);
    assert!(board.card_at(0, 0).is_none());
    assert_eq!(board.cards_in_deck(), 69, "cleared cards are discarded, not recycled");

    board.fill();
    assert_eq!(board.cards_in_play(), 12);
    assert_eq!(board.cards_in_deck(), 57);
}
