//! Validation errors

use crate::float_types::Real;
use nalgebra::Point2;

/// All the possible validation issues we might encounter, either in a
/// connector parameter set or in a 2D profile handed to the kernel.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (NonFinite) A parameter is NaN or infinite
    #[error("(NonFinite) {name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: Real },
    /// (NonPositive) A length parameter is zero or negative
    #[error("(NonPositive) {name} must be {bound}, got {value}")]
    NonPositive {
        name: &'static str,
        bound: &'static str,
        value: Real,
    },
    /// (ClipTooNarrow) The shoulders do not clear the waist plus both gaps
    #[error("(ClipTooNarrow) w must exceed t + 2g: w = {w}, t + 2g = {limit}")]
    ClipTooNarrow { w: Real, limit: Real },
    /// (ClipTooShort) The clip is shorter than it is wide
    #[error("(ClipTooShort) l must be at least w: l = {l}, w = {w}")]
    ClipTooShort { l: Real, w: Real },
    /// (SpringTooLong) The spring is longer than the clip
    #[error("(SpringTooLong) a must not exceed l: a = {a}, l = {l}")]
    SpringTooLong { a: Real, l: Real },
    /// (SpringTooThin) No spring material is left above the channel roof
    #[error("(SpringTooThin) s must exceed g: s = {s}, g = {g}")]
    SpringTooThin { s: Real, g: Real },
    /// (ChannelExtensionTooLong) The channel would run out of the latch pocket
    #[error(
        "(ChannelExtensionTooLong) c must not exceed clip height + h + j: c = {c}, limit = {limit}"
    )]
    ChannelExtensionTooLong { c: Real, limit: Real },
    /// (SpringGapTooWide) The spring gap swallows the whole latch
    #[error(
        "(SpringGapTooWide) j must be less than half the channel width: j = {j}, limit = {limit}"
    )]
    SpringGapTooWide { j: Real, limit: Real },
    /// (TooFewPoints) A ring has fewer than the minimal #points
    #[error("(TooFewPoints) A ring needs at least 3 points, got {0}")]
    TooFewPoints(usize),
    /// (InvalidCoordinate) The coordinate has a NaN or infinite
    #[error("(InvalidCoordinate) The coordinate ({0}) has a NaN or infinite")]
    InvalidCoordinate(Point2<Real>),
    /// (SelfIntersection) A polygon self‐intersects
    #[error("(SelfIntersection) A polygon self-intersects at: {0}")]
    SelfIntersection(Point2<Real>),
}

impl ValidationError {
    /// `true` for the variants raised by connector parameter checks, as
    /// opposed to profile geometry checks.
    pub const fn is_parameter_error(&self) -> bool {
        !matches!(
            self,
            ValidationError::TooFewPoints(_)
                | ValidationError::InvalidCoordinate(_)
                | ValidationError::SelfIntersection(_)
        )
    }
}
