// Re-export parry for the f64 build
pub use parry3d_f64 as parry3d;

// Our Real scalar type:
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance used by the kernel's plane classification.
/// Can be overridden:
///  1) **Build-time**: set env var `SLIDENSNAP_TOLERANCE`
///     (e.g. `SLIDENSNAP_TOLERANCE=1e-6 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before evaluating any solid
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

/// Default plane-classification tolerance.
pub const DEFAULT_TOLERANCE: Real = 1e-5;

/// Returns the current tolerance.
/// If not set yet, it tries `SLIDENSNAP_TOLERANCE` (parsed as `Real`) and
/// falls back to [`DEFAULT_TOLERANCE`].
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("SLIDENSNAP_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        DEFAULT_TOLERANCE
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Returns `false` if a value was already in place.
pub fn set_tolerance(value: Real) -> bool {
    TOLERANCE_CELL.set(value.max(Real::EPSILON)).is_ok()
}

/// √2
pub const SQRT_2: Real = core::f64::consts::SQRT_2;
