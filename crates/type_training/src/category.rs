//! The three categories and their cyclic dominance relation.
//!
//! The relation is a closed loop (Fire beats Grass, Water beats Fire,
//! Grass beats Water), so it is not an ordering. `Category` deliberately
//! implements neither `PartialOrd` nor `Ord`; the only meaningful question
//! is [`beats`].

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the three fixed categories a round is played with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::EnumCount,
)]
pub enum Category {
    /// Beaten by Fire, beats Water.
    Grass,
    /// Beaten by Water, beats Grass.
    Fire,
    /// Beaten by Grass, beats Fire.
    Water,
}

/// Dominance lookup: `(winner, loser)`.
const DOMINANCE: [(Category, Category); 3] = [
    (Category::Fire, Category::Grass),
    (Category::Water, Category::Fire),
    (Category::Grass, Category::Water),
];

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Category; 3] = [Category::Grass, Category::Fire, Category::Water];

    /// Returns true if `self` dominates `other`.
    pub fn beats(self, other: Category) -> bool {
        beats(self, other)
    }

    /// The category this one beats.
    pub fn prey(self) -> Category {
        match self {
            Category::Fire => Category::Grass,
            Category::Water => Category::Fire,
            Category::Grass => Category::Water,
        }
    }

    /// The category that beats this one.
    pub fn predator(self) -> Category {
        match self {
            Category::Grass => Category::Fire,
            Category::Fire => Category::Water,
            Category::Water => Category::Grass,
        }
    }

    /// Human-readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Grass => "Grass",
            Category::Fire => "Fire",
            Category::Water => "Water",
        }
    }

    /// 1-based option number as shown to the player.
    pub fn option_number(self) -> usize {
        match self {
            Category::Grass => 1,
            Category::Fire => 2,
            Category::Water => 3,
        }
    }

    /// Parse from a 1-based option number or a label (case-insensitive).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Category> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(|idx| Self::ALL.get(idx).copied());
        }

        <Category as strum::IntoEnumIterator>::iter()
            .find(|category| category.display_name().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// All categories in presentation order.
pub fn all_categories() -> &'static [Category; 3] {
    &Category::ALL
}

/// Returns true if `x` dominates `y`.
///
/// Irreflexive and antisymmetric, but cyclic: never use it to sort.
pub fn beats(x: Category, y: Category) -> bool {
    DOMINANCE.contains(&(x, y))
}

/// Returns the display label of a category.
pub fn display_name(x: Category) -> &'static str {
    x.display_name()
}
