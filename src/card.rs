use std::hash::{Hash, Hasher};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{Color, Count, Fill, Property, PropertyEvaluation, Shape};

/// One of the 81 property combinations. Identity is the 4-tuple of
/// properties; `appear_order` is placement metadata stamped by the play area
/// and takes no part in equality, hashing or serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub shape: Shape,
    pub fill: Fill,
    pub count: Count,
    #[serde(skip)]
    appear_order: Option<u32>,
}

impl PartialEq for Card {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.properties() == other.properties()
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.properties().hash(state);
    }
}

impl Card {
    #[inline]
    pub fn new(color: Color, shape: Shape, fill: Fill, count: Count) -> Self {
        Self {
            color,
            shape,
            fill,
            count,
            appear_order: None,
        }
    }

    /// Encoded property values in fixed (color, shape, fill, count) order.
    /// Every sum and equality below depends on this order staying stable.
    #[inline]
    pub fn properties(&self) -> [u8; 4] {
        [
            self.color.encode(),
            self.shape.encode(),
            self.fill.encode(),
            self.count.encode(),
        ]
    }

    /// Canonical key: the four encoded values joined with `-`, e.g. `"0-2-1-0"`.
    /// Equal keys identify the same card.
    pub fn key(&self) -> String {
        let p = self.properties();
        format!("{}-{}-{}-{}", p[0], p[1], p[2], p[3])
    }

    /// Placement sequence number, `None` until the card first lands on a
    /// play area.
    #[inline]
    pub fn appear_order(&self) -> Option<u32> {
        self.appear_order
    }

    #[inline]
    pub fn set_appear_order(&mut self, order: u32) {
        self.appear_order = Some(order);
    }

    /// True iff the triad is a valid set: for each of the four properties,
    /// the sum of the three encoded values is divisible by 3. With three
    /// values per property, "all equal" and "all different" are exactly the
    /// multisets summing to 0 mod 3; any two-same-one-different pattern
    /// sums to 1 or 2.
    pub fn is_set(cards: [&Card; 3]) -> bool {
        let mut sums = [0u8; 4];
        for card in cards {
            for (sum, value) in sums.iter_mut().zip(card.properties()) {
                *sum += value;
            }
        }
        sums.iter().all(|sum| sum % 3 == 0)
    }

    /// Per-property classification of a triad, aligned with `properties()`
    /// order. A triad is a set iff no entry is `Mixed`.
    pub fn evaluate_set(cards: [&Card; 3]) -> [PropertyEvaluation; 4] {
        let [a, b, c] = cards.map(Card::properties);
        let mut out = [PropertyEvaluation::Mixed; 4];
        for i in 0..4 {
            out[i] = if a[i] == b[i] && b[i] == c[i] {
                PropertyEvaluation::AllEqual
            } else if (a[i] + b[i] + c[i]) % 3 == 0 {
                PropertyEvaluation::AllDifferent
            } else {
                PropertyEvaluation::Mixed
            };
        }
        out
    }

    /// The unique third card completing a set with `a` and `b`. Depends only
    /// on each property pair, so the argument order is irrelevant.
    pub fn completing_card(a: &Card, b: &Card) -> Card {
        Card::new(
            completing_value(a.color, b.color),
            completing_value(a.shape, b.shape),
            completing_value(a.fill, b.fill),
            completing_value(a.count, b.count),
        )
    }

    /// Independent uniform sample per property. Used for puzzle generation;
    /// the deck flow never goes through here.
    pub fn random<R: Rng>(rng: &mut R) -> Card {
        Card::new(
            Color::random(rng),
            Shape::random(rng),
            Fill::random(rng),
            Count::random(rng),
        )
    }
}

/// The value a third card must carry for one property: the shared value when
/// the pair agrees, otherwise the remaining third value.
fn completing_value<P: Property>(a: P, b: P) -> P {
    if a == b {
        return a;
    }
    for value in P::ALL {
        if value != a && value != b {
            return value;
        }
    }
    unreachable!("a three-valued property always has a remaining value");
}
