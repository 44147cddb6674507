//! LifeQR emergency card
//!
//! Render-ready content for the emergency identification card shown to
//! first responders: the passport details as labeled lines plus a
//! placeholder pattern standing in for a real QR code.

use rand::prelude::*;

use super::Passport;

/// Cells per side of the placeholder pattern.
pub const PATTERN_SIDE: usize = 8;

/// One labeled line on the emergency card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    /// Display label
    pub label: &'static str,
    /// Value from the passport
    pub value: String,
}

/// Square placeholder pattern, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGrid {
    cells: [bool; PATTERN_SIDE * PATTERN_SIDE],
}

impl PatternGrid {
    /// Generates a pattern, seeded for reproducibility when `seed` is set.
    #[must_use]
    pub fn generate(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut cells = [false; PATTERN_SIDE * PATTERN_SIDE];
        for cell in &mut cells {
            *cell = rng.random_bool(0.5);
        }
        Self { cells }
    }

    /// Whether the cell at `row`, `col` is filled.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the grid.
    #[must_use]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        assert!(row < PATTERN_SIDE && col < PATTERN_SIDE);
        self.cells[row * PATTERN_SIDE + col]
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// Emergency card content for the LifeQR view
#[derive(Debug, Clone)]
pub struct EmergencyCard {
    /// Labeled passport lines in display order
    pub fields: Vec<CardField>,
    /// Set when no passport is saved and defaults are being shown
    pub placeholder_data: bool,
    /// Placeholder code pattern
    pub pattern: PatternGrid,
}

impl EmergencyCard {
    /// Builds a card from a passport. `has_passport` reflects whether the
    /// record was actually saved; when false the card flags that default
    /// data is being shown.
    #[must_use]
    pub fn from_passport(passport: &Passport, has_passport: bool) -> Self {
        let fields = vec![
            CardField {
                label: "Name",
                value: passport.full_name.clone(),
            },
            CardField {
                label: "Blood Type",
                value: passport.blood_type.code().to_string(),
            },
            CardField {
                label: "Emergency Contact",
                value: passport.emergency_contact.clone(),
            },
            CardField {
                label: "Allergies",
                value: passport.allergies.clone(),
            },
        ];
        Self {
            fields,
            placeholder_data: !has_passport,
            pattern: PatternGrid::generate(None),
        }
    }

    /// Advisory line for cards built without a saved passport.
    #[must_use]
    pub const fn placeholder_notice() -> &'static str {
        "Using default data. Update your passport for personalized info."
    }
}
