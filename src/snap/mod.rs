//! Slide-n-snap connector geometry.
//!
//! A male dovetail clip slides along a matching female channel until a sprung
//! latch drops in behind it. [`male_clip`] is unioned into one part and
//! [`female_clip_negative`] is subtracted from the other.
//!
//! ```
//! use slidensnap::snap::{self, Preset, SnapParams};
//!
//! let params = SnapParams::from_preset(Preset::Small);
//! let male = snap::male_clip(params.t, params.w, params.l).unwrap();
//! let female = snap::female_clip_negative(&params, false).unwrap();
//!
//! let bb = female.bounding_box();
//! assert!((bb.maxs.y - params.female_length()).abs() < 1e-9);
//! assert!(male.bounding_box().maxs.y <= bb.maxs.y);
//! ```

pub mod clip;
pub mod dims;
pub mod params;
pub mod profiles;

pub use clip::{
    channel_solid, female_clip_negative, female_clip_negative_for,
    female_clip_negative_upside_down, latch_pocket, latch_solid, male_clip, spring_cavity,
    spring_relief_solid,
};
pub use dims::{DIAGONAL_GAP_FACTOR, cavity_height, channel_width, clip_height, female_length};
pub use params::{ClipOrientation, DEFAULT_EPSILON, Preset, SnapParams, UPSIDE_DOWN_EPSILON};
pub use profiles::{channel_profile, latch_profile, male_profile, spring_relief_profile};
