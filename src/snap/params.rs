//! The connector's parameter set, its presets and its validation.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::snap::dims;
use serde::{Deserialize, Serialize};

/// Default overlap for the standard orientation.
pub const DEFAULT_EPSILON: Real = 0.001;
/// Default overlap for the upside-down orientation.
pub const UPSIDE_DOWN_EPSILON: Real = 0.01;

/// Which way up the female negative is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipOrientation {
    /// Mating face on `z = 0`, spring above the channel.
    #[default]
    Standard,
    /// Flipped so the spring rests on the print bed.
    UpsideDown,
}

impl ClipOrientation {
    pub const fn default_epsilon(self) -> Real {
        match self {
            ClipOrientation::Standard => DEFAULT_EPSILON,
            ClipOrientation::UpsideDown => UPSIDE_DOWN_EPSILON,
        }
    }
}

/// Named parameter sets. Larger clips hold harder; larger gaps forgive a less
/// accurate printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Small,
    Medium,
    Large,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Small, Preset::Medium, Preset::Large];

    pub const fn params(self) -> SnapParams {
        SnapParams::from_preset(self)
    }
}

/// Every dimension of one connector, in model units (millimetres).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapParams {
    /// Waist width of the male clip.
    pub t: Real,
    /// Shoulder width of the male clip.
    pub w: Real,
    /// Clearance between male and female.
    pub g: Real,
    /// Width of the slot that frees the spring.
    pub j: Real,
    /// Length of the male clip.
    pub l: Real,
    /// Flat base length of the latch.
    pub h: Real,
    /// Spring height above the dovetail; the printed spring is `s - g` thick.
    pub s: Real,
    /// Spring length.
    pub a: Real,
    /// How far the channel runs into the latch pocket.
    pub c: Real,
    /// Overlap added at shared faces so booleans never meet coplanar.
    #[serde(default = "default_epsilon")]
    pub epsilon: Real,
}

const fn default_epsilon() -> Real {
    DEFAULT_EPSILON
}

impl Default for SnapParams {
    fn default() -> Self {
        Preset::Small.params()
    }
}

impl From<Preset> for SnapParams {
    fn from(preset: Preset) -> Self {
        preset.params()
    }
}

impl SnapParams {
    pub const fn from_preset(preset: Preset) -> Self {
        let [t, w, l, g, j, h, s, a, c] = match preset {
            Preset::Small => [1.75, 5.25, 7.0, 0.3, 0.6, 1.0, 1.0, 7.0, 1.0],
            Preset::Medium => [2.5, 7.5, 10.0, 0.3, 0.6, 1.5, 1.2, 10.0, 1.0],
            Preset::Large => [3.5, 10.5, 14.0, 0.4, 0.8, 2.0, 1.5, 14.0, 1.5],
        };
        SnapParams {
            t,
            w,
            g,
            j,
            l,
            h,
            s,
            a,
            c,
            epsilon: DEFAULT_EPSILON,
        }
    }

    pub const fn with_epsilon(self, epsilon: Real) -> Self {
        SnapParams { epsilon, ..self }
    }

    /// Same dimensions with the default overlap for `orientation`.
    pub const fn for_orientation(self, orientation: ClipOrientation) -> Self {
        self.with_epsilon(orientation.default_epsilon())
    }

    fn named(&self) -> [(&'static str, Real); 10] {
        [
            ("t", self.t),
            ("w", self.w),
            ("g", self.g),
            ("j", self.j),
            ("l", self.l),
            ("h", self.h),
            ("s", self.s),
            ("a", self.a),
            ("c", self.c),
            ("epsilon", self.epsilon),
        ]
    }

    /// Check every constraint the geometry relies on.
    ///
    /// Recommendations that do not break the geometry are not errors; see
    /// [`SnapParams::advisories`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in self.named() {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { name, value });
            }
            if name == "g" {
                if value < 0.0 {
                    return Err(ValidationError::NonPositive {
                        name,
                        bound: "at least 0",
                        value,
                    });
                }
            } else if value <= 0.0 {
                return Err(ValidationError::NonPositive {
                    name,
                    bound: "greater than 0",
                    value,
                });
            }
        }

        let limit = self.t + 2.0 * self.g;
        if self.w <= limit {
            return Err(ValidationError::ClipTooNarrow { w: self.w, limit });
        }
        if self.l < self.w {
            return Err(ValidationError::ClipTooShort { l: self.l, w: self.w });
        }
        if self.a > self.l {
            return Err(ValidationError::SpringTooLong { a: self.a, l: self.l });
        }
        if self.s <= self.g {
            return Err(ValidationError::SpringTooThin { s: self.s, g: self.g });
        }
        let limit = self.clip_height() + self.h + self.j;
        if self.c > limit {
            return Err(ValidationError::ChannelExtensionTooLong { c: self.c, limit });
        }
        let limit = self.channel_width() / 2.0;
        if self.j >= limit {
            return Err(ValidationError::SpringGapTooWide { j: self.j, limit });
        }

        for advisory in self.advisories() {
            tracing::warn!(%advisory, "connector parameters outside the recommended range");
        }
        Ok(())
    }

    /// Human-readable notes on values that work but are not recommended.
    pub fn advisories(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if self.j < 2.0 * self.g || self.j > 3.0 * self.g {
            notes.push(format!(
                "spring gap j = {} is outside the recommended range [2g, 3g] = [{}, {}]",
                self.j,
                2.0 * self.g,
                3.0 * self.g
            ));
        }
        notes
    }

    /// `H`: how far the shoulders rise above the waist.
    pub fn dovetail_rise(&self) -> Real {
        (self.w - self.t) / 2.0
    }

    /// Gap measured along an axis on the 45° flanks.
    pub fn diagonal_gap(&self) -> Real {
        self.g * dims::DIAGONAL_GAP_FACTOR
    }

    pub fn clip_height(&self) -> Real {
        dims::clip_height(self.t, self.w, self.s)
    }

    pub fn channel_width(&self) -> Real {
        dims::channel_width(self.w, self.g)
    }

    pub fn female_length(&self) -> Real {
        dims::female_length(self.w, self.t, self.g, self.j, self.h, self.l, self.s)
    }

    pub fn cavity_height(&self) -> Real {
        dims::cavity_height(self.t, self.w, self.g)
    }

    /// `y` of the latch's locking face.
    pub fn latch_stop(&self) -> Real {
        self.l + self.g
    }

    /// `y` where the spring joins the body.
    pub fn spring_hinge(&self) -> Real {
        self.latch_stop() - self.a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for preset in Preset::ALL {
            assert_eq!(preset.params().validate(), Ok(()), "{preset:?}");
            assert!(preset.params().advisories().is_empty());
        }
    }

    #[test]
    fn negative_gap_is_rejected_but_zero_is_fine() {
        let params = SnapParams { g: -0.1, ..SnapParams::default() };
        assert!(matches!(
            params.validate(),
            Err(ValidationError::NonPositive { name: "g", .. })
        ));
        let params = SnapParams { g: 0.0, j: 0.5, ..SnapParams::default() };
        assert_eq!(params.validate(), Ok(()));
        assert_eq!(params.advisories().len(), 1);
    }
}
