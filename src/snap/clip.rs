//! Solid builders for both halves of the connector.
//!
//! All solids share one frame: `x` across the channel (centred), `y` along it
//! with the closed end at `y = 0` and the mouth at `y = female_length()`, `z`
//! up from the mating face at `z = 0`. A male clip built with the same `t, w, l`
//! sits in the female channel without any further placement.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::profile::SketchPlane;
use crate::snap::params::{ClipOrientation, SnapParams};
use crate::snap::profiles::{channel_profile, latch_profile, male_profile, spring_relief_profile};
use crate::solid::Solid;
use nalgebra::Point3;

/// Positive male clip: the dovetail extruded along `y` from `0` to `l`.
///
/// Union it into the part that carries the male half; the stem below `z = 0`
/// is buried in that part.
pub fn male_clip(t: Real, w: Real, l: Real) -> Result<Solid, ValidationError> {
    for (name, value) in [("t", t), ("w", w), ("l", l)] {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite { name, value });
        }
        if value <= 0.0 {
            return Err(ValidationError::NonPositive {
                name,
                bound: "greater than 0",
                value,
            });
        }
    }
    if w <= t {
        return Err(ValidationError::ClipTooNarrow { w, limit: t });
    }
    if l < w {
        return Err(ValidationError::ClipTooShort { l, w });
    }

    tracing::debug!(t, w, l, "male clip");
    Ok(Solid::extrusion(male_profile(t, w)?, SketchPlane::XZ, 0.0, l))
}

/// The channel, from the closed end to `c` past the latch stop.
pub fn channel_solid(p: &SnapParams) -> Result<Solid, ValidationError> {
    Ok(Solid::extrusion(
        channel_profile(p)?,
        SketchPlane::XZ,
        0.0,
        p.latch_stop() + p.c,
    ))
}

/// Room the male passes through while the spring is lifted, from the latch
/// stop to the mouth.
pub fn latch_pocket(p: &SnapParams) -> Solid {
    let half_width = p.channel_width() / 2.0;
    Solid::cuboid_between(
        Point3::new(-half_width, p.latch_stop(), -p.epsilon),
        Point3::new(half_width, p.female_length(), p.clip_height() + p.epsilon),
    )
}

/// The C-shaped slot around the spring tongue, cut from the channel roof up
/// through the top of the clip.
pub fn spring_relief_solid(p: &SnapParams) -> Result<Solid, ValidationError> {
    let bottom = p.dovetail_rise() + p.g - p.epsilon;
    let top = p.clip_height() + p.epsilon;
    Ok(Solid::extrusion(
        spring_relief_profile(p)?,
        SketchPlane::XY,
        bottom,
        top - bottom,
    ))
}

/// Empty space above the spring so it can flex while the male slides in.
pub fn spring_cavity(p: &SnapParams) -> Solid {
    let half_width = p.channel_width() / 2.0;
    let hc = p.clip_height();
    Solid::cuboid_between(
        Point3::new(-half_width, p.spring_hinge(), hc),
        Point3::new(half_width, p.female_length(), hc + p.cavity_height()),
    )
}

/// The latch wedge hanging from the spring tip, narrower than the channel by
/// the spring gap on each side.
pub fn latch_solid(p: &SnapParams) -> Result<Solid, ValidationError> {
    let half = p.channel_width() / 2.0 - p.j;
    Ok(Solid::extrusion(latch_profile(p)?, SketchPlane::YZ, -half, 2.0 * half))
}

/// Negative female clip: subtract it from the part that receives the male.
///
/// With `include_cavity` the spring also gets room to flex above the clip,
/// which the surrounding part must then leave empty.
pub fn female_clip_negative(
    p: &SnapParams,
    include_cavity: bool,
) -> Result<Solid, ValidationError> {
    p.validate()?;
    tracing::debug!(
        clip_height = p.clip_height(),
        channel_width = p.channel_width(),
        female_length = p.female_length(),
        include_cavity,
        "female clip negative"
    );

    let mut body = channel_solid(p)?
        .union(latch_pocket(p))
        .union(spring_relief_solid(p)?);
    if include_cavity {
        body = body.union(spring_cavity(p));
    }

    Ok(body.difference(latch_solid(p)?))
}

/// The cavity-free negative flipped for printing with the spring on the bed:
/// `z' = clip_height - z`.
pub fn female_clip_negative_upside_down(p: &SnapParams) -> Result<Solid, ValidationError> {
    let standard = female_clip_negative(p, false)?;
    tracing::debug!(epsilon = p.epsilon, "flipping female clip negative");
    Ok(standard.flip_z(p.clip_height()))
}

/// Generate the negative in the requested orientation, using that
/// orientation's default overlap. The upside-down negative never has a cavity,
/// so `include_cavity` only affects [`ClipOrientation::Standard`].
pub fn female_clip_negative_for(
    p: &SnapParams,
    orientation: ClipOrientation,
    include_cavity: bool,
) -> Result<Solid, ValidationError> {
    let p = p.for_orientation(orientation);
    match orientation {
        ClipOrientation::Standard => female_clip_negative(&p, include_cavity),
        ClipOrientation::UpsideDown => female_clip_negative_upside_down(&p),
    }
}
