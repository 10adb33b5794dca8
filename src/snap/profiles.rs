//! The 2D outlines behind every connector solid.
//!
//! Coordinates are in each outline's own sketch plane; see
//! [`crate::profile::SketchPlane`] for how they land in the world frame.

use crate::errors::ValidationError;
use crate::float_types::{Real, SQRT_2};
use crate::profile::Profile;
use crate::snap::params::SnapParams;

/// Cross-section of the male clip in the XZ plane: a stem of width `t` that
/// flares at 45° into shoulders of width `w`.
///
/// ```text
///   (-w/2,H) +-----------------+ (w/2,H)
///             \               /
///              \             /
///       (-t/2,0) +         + (t/2,0)
///                |         |
///   (-t/2,-t/2)  +---------+  (t/2,-t/2)
/// ```
///
/// The outline has six vertices: four stem corners and the two flank ends.
pub fn male_profile(t: Real, w: Real) -> Result<Profile, ValidationError> {
    let (ht, hw) = (t / 2.0, w / 2.0);
    let rise = hw - ht;
    Profile::from_coords(&[
        [-ht, -ht],
        [ht, -ht],
        [ht, 0.0],
        [hw, rise],
        [-hw, rise],
        [-ht, 0.0],
    ])
}

/// Cross-section of the channel the male slides in: the male's dovetail grown
/// by `g` on every face. The floor dips `epsilon` below the mating face.
pub fn channel_profile(p: &SnapParams) -> Result<Profile, ValidationError> {
    let eps = p.epsilon;
    let foot = p.t / 2.0 + p.g * SQRT_2 - eps;
    let half_width = p.channel_width() / 2.0;
    let roof = p.dovetail_rise() + p.g;
    Profile::from_coords(&[
        [-foot, -eps],
        [foot, -eps],
        [half_width, roof],
        [-half_width, roof],
    ])
}

/// C-shaped cut in the XY plane that frees the spring tongue on three sides.
/// Open towards the hinge at `y = spring_hinge()`.
pub fn spring_relief_profile(p: &SnapParams) -> Result<Profile, ValidationError> {
    let half_width = p.channel_width() / 2.0;
    let inner = half_width - p.j;
    let y1 = p.spring_hinge();
    let end = p.female_length();
    Profile::from_coords(&[
        [-half_width, y1],
        [-inner, y1],
        [-inner, end - p.j],
        [inner, end - p.j],
        [inner, y1],
        [half_width, y1],
        [half_width, end],
        [-half_width, end],
    ])
}

/// Side view of the latch in the YZ plane: a vertical locking face and a 45°
/// ramp facing the channel mouth.
pub fn latch_profile(p: &SnapParams) -> Result<Profile, ValidationError> {
    let stop = p.latch_stop();
    let hc = p.clip_height();
    Profile::from_coords(&[
        [stop - p.epsilon, 0.0],
        [stop + p.h, 0.0],
        [stop + p.h + hc, hc],
        [stop - p.epsilon, hc],
    ])
}
