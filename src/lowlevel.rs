//! Low-level building blocks for custom measurement loops.
//!
//! These expose the individual recovery and clamp functions, the sweep
//! functions and trait, and the delta accumulator. Most users should prefer
//! `Measurement` with `measure`.

pub use crate::angle::{angle_via_atan2, angle_via_dot, clamp_signed, clamp_unsigned};
pub use crate::geom::rotate;
pub use crate::measure::DeltaAccumulator;
pub use crate::report::table_header;
pub use crate::sweep::{
    polar_iteration, rotation_inc_iteration, rotation_iteration, AccumulatingSweep, DirectSweep,
    PolarSweep, Sweep,
};
pub use crate::util::{sweep_len, validate_increment, MIN_INCREMENT};
