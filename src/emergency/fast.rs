//! F.A.S.T. stroke recognition
//!
//! The four-point stroke check. Face, arm, and speech findings are
//! toggleable observations; Time is the reminder to act and carries no
//! toggle state. [`FastTriage`] couples the checklist to the response
//! timer the way the emergency screen drives it.

use std::fmt;

use smallvec::SmallVec;

use super::timer::StrokeTimer;

/// The four F.A.S.T. checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastSign {
    /// Face drooping
    Face,
    /// Arm weakness
    Arms,
    /// Speech difficulty
    Speech,
    /// Time to call for help
    Time,
}

impl FastSign {
    /// Letter of the mnemonic.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Face => 'F',
            Self::Arms => 'A',
            Self::Speech => 'S',
            Self::Time => 'T',
        }
    }

    /// Display title for this check.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Face => "Face",
            Self::Arms => "Arms",
            Self::Speech => "Speech",
            Self::Time => "Time",
        }
    }

    /// Whether this check is an observable symptom. `Time` is not.
    #[must_use]
    pub const fn is_symptom(self) -> bool {
        !matches!(self, Self::Time)
    }

    /// All checks in mnemonic order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Face, Self::Arms, Self::Speech, Self::Time]
    }
}

impl fmt::Display for FastSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Currently selected symptom signs, with toggle semantics
#[derive(Debug, Clone, Default)]
pub struct FastChecklist {
    selected: SmallVec<[FastSign; 4]>,
}

impl FastChecklist {
    /// Creates an empty checklist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles a symptom sign and returns whether it is selected
    /// afterwards. `Time` never toggles.
    pub fn toggle(&mut self, sign: FastSign) -> bool {
        if !sign.is_symptom() {
            return false;
        }
        if let Some(pos) = self.selected.iter().position(|&s| s == sign) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(sign);
            true
        }
    }

    /// Whether `sign` is currently selected.
    #[must_use]
    pub fn is_selected(&self, sign: FastSign) -> bool {
        self.selected.contains(&sign)
    }

    /// Whether any symptom is selected.
    #[must_use]
    pub fn has_symptoms(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Selected signs in the order they were toggled on.
    #[must_use]
    pub fn selected(&self) -> &[FastSign] {
        &self.selected
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

/// Checklist coupled to the response timer
///
/// Selecting the first symptom starts the timer; clearing the last one
/// stops it. While any symptom stays selected the timer keeps running.
#[derive(Debug, Clone, Default)]
pub struct FastTriage {
    checklist: FastChecklist,
    timer: StrokeTimer,
}

impl FastTriage {
    /// Creates an idle triage state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles a sign and updates the timer accordingly.
    pub fn toggle(&mut self, sign: FastSign) {
        self.checklist.toggle(sign);
        if self.checklist.has_symptoms() {
            if !self.timer.is_active() {
                log::debug!("Symptom {sign} selected, response timer started");
            }
            self.timer.start();
        } else {
            if self.timer.is_active() {
                log::debug!("Last symptom cleared, response timer stopped");
            }
            self.timer.stop();
        }
    }

    /// Advances the response timer one second.
    pub fn tick(&mut self) {
        self.timer.tick();
    }

    /// The response timer.
    #[must_use]
    pub const fn timer(&self) -> &StrokeTimer {
        &self.timer
    }

    /// The symptom checklist.
    #[must_use]
    pub const fn checklist(&self) -> &FastChecklist {
        &self.checklist
    }

    /// Whether any symptom is selected.
    #[must_use]
    pub fn has_symptoms(&self) -> bool {
        self.checklist.has_symptoms()
    }
}
