//! Tempora Field - Duration fields
//!
//! Converts between counts of a calendrical unit and milliseconds:
//! - `PreciseDurationField`: fixed unit length (seconds, hours, UTC days)
//! - `ImpreciseDurationField`: unit length depends on the instant (months, years)
//! - `Chronology`: the calendar authority imprecise fields consult
//! - `FieldRegistry`: one immutable field per unit, built eagerly
//!
//! Fields are immutable and `Send + Sync`; share them by reference.

pub mod chronology;
mod config;
mod field;
mod imprecise;
mod precise;
mod registry;

pub use chronology::{Chronology, IsoChronology};
pub use config::{FieldConfig, MAX_PROBES_VAR};
pub use field::{DurationField, Field};
pub use imprecise::ImpreciseDurationField;
pub use precise::PreciseDurationField;
pub use registry::FieldRegistry;

/// Re-export core types for field users
pub mod prelude {
    pub use crate::{
        Chronology, DurationField, Field, FieldConfig, FieldRegistry, ImpreciseDurationField,
        IsoChronology, PreciseDurationField,
    };
    pub use tempora_core::prelude::*;
}
