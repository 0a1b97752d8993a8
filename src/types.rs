use rand::Rng;
use serde::{Deserialize, Serialize};

/// A three-valued card property. `ALL` lists the values in their canonical
/// enumeration order; `encode` is the bijection onto {0, 1, 2} that every
/// mod-3 sum in the engine relies on.
pub trait Property: Copy + Eq {
    const ALL: [Self; 3];

    fn encode(self) -> u8;

    /// Inverse of `encode`.
    ///
    /// # Panics
    /// Panics when `code` is outside 0..=2; a broken encoding is a
    /// programming error, not a runtime condition.
    #[inline]
    fn decode(code: u8) -> Self {
        Self::ALL[usize::from(code)]
    }

    /// Uniform sample over the three values.
    #[inline]
    fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Purple,
}

impl Property for Color {
    const ALL: [Self; 3] = [Color::Red, Color::Green, Color::Purple];

    #[inline]
    fn encode(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Pill,
    Diamond,
    Squiggly,
}

impl Property for Shape {
    const ALL: [Self; 3] = [Shape::Pill, Shape::Diamond, Shape::Squiggly];

    #[inline]
    fn encode(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fill {
    Empty,
    Lines,
    Filled,
}

impl Property for Fill {
    const ALL: [Self; 3] = [Fill::Empty, Fill::Lines, Fill::Filled];

    #[inline]
    fn encode(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Count {
    One,
    Two,
    Three,
}

impl Property for Count {
    const ALL: [Self; 3] = [Count::One, Count::Two, Count::Three];

    #[inline]
    fn encode(self) -> u8 {
        self as u8
    }
}

/// Per-property classification of a triad. Derived on demand for hinting,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyEvaluation {
    AllEqual,
    AllDifferent,
    Mixed,
}
