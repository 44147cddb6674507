//! Stroke emergency state
//!
//! The scoped state objects behind the stroke emergency screen: the
//! elapsed-response stopwatch and the F.A.S.T. symptom checklist that
//! drives it.

mod fast;
mod timer;

pub use fast::{FastChecklist, FastSign, FastTriage};
pub use timer::{StrokeTimer, format_elapsed};
