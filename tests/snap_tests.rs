mod support;

use approx::assert_relative_eq;
use slidensnap::{
    errors::ValidationError,
    float_types::{Real, SQRT_2},
    snap::{self, ClipOrientation, Preset, SnapParams},
    solid::Solid,
    traits::{CSG, flip_z_matrix},
};

use crate::support::bounding_box;

#[test]
fn small_preset_derived_dimensions() {
    let p = SnapParams::from_preset(Preset::Small);
    assert_relative_eq!(p.clip_height(), 2.75, epsilon = 1e-12);
    assert_relative_eq!(p.channel_width(), 5.25 + 0.6 * (1.0 + SQRT_2), epsilon = 1e-12);
    assert_relative_eq!(p.channel_width(), 6.69853, epsilon = 1e-5);
    assert_relative_eq!(p.female_length(), 11.65, epsilon = 1e-12);
    assert_relative_eq!(p.cavity_height(), 2.05, epsilon = 1e-12);
}

#[test]
fn free_functions_match_methods() {
    for preset in Preset::ALL {
        let p = preset.params();
        assert_eq!(snap::clip_height(p.t, p.w, p.s), p.clip_height());
        assert_eq!(snap::channel_width(p.w, p.g), p.channel_width());
        assert_eq!(
            snap::female_length(p.w, p.t, p.g, p.j, p.h, p.l, p.s),
            p.female_length()
        );
    }
}

#[test]
fn male_clip_profile_and_solid() {
    let profile = snap::male_profile(2.0, 6.0).unwrap();
    let max_abs_x = profile
        .points()
        .iter()
        .map(|p| p.x.abs())
        .fold(0.0, f64::max);
    assert_eq!(max_abs_x, 3.0);
    assert!(profile.is_symmetric_about_y(1e-12));

    let clip = snap::male_clip(2.0, 6.0, 8.0).unwrap();
    let bb = clip.bounding_box();
    assert_relative_eq!(bb.mins.z, -1.0);
    assert_relative_eq!(bb.maxs.z, 2.0);
    assert_relative_eq!(bb.maxs.y, 8.0);

    // stem 2 x 1 plus trapezoid (2 + 6) / 2 x 2
    let mesh = clip.to_mesh();
    assert_relative_eq!(mesh.volume(), 10.0 * 8.0, epsilon = 1e-9);
    assert_eq!(bounding_box(&mesh.polygons), [-3.0, 0.0, -1.0, 3.0, 8.0, 2.0]);
}

#[test]
fn male_clip_rejects_bad_dimensions() {
    assert!(matches!(
        snap::male_clip(3.0, 3.0, 5.0),
        Err(ValidationError::ClipTooNarrow { .. })
    ));
    assert!(matches!(
        snap::male_clip(1.0, 5.0, 4.0),
        Err(ValidationError::ClipTooShort { .. })
    ));
    assert!(matches!(
        snap::male_clip(Real::NAN, 5.0, 6.0),
        Err(ValidationError::NonFinite { name: "t", .. })
    ));
}

#[test]
fn female_negative_envelope_matches_dimensions() {
    for preset in Preset::ALL {
        let p = preset.params();
        let half = p.channel_width() / 2.0;

        let negative = snap::female_clip_negative(&p, false).unwrap();
        let mesh = negative.to_mesh();
        let bb = bounding_box(&mesh.polygons);
        let expected = [
            -half,
            0.0,
            -p.epsilon,
            half,
            p.female_length(),
            p.clip_height() + p.epsilon,
        ];
        for (got, want) in bb.iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 1e-9);
        }

        let analytic = negative.bounding_box();
        assert_relative_eq!(analytic.maxs.y, p.female_length(), epsilon = 1e-12);
        assert_relative_eq!(analytic.maxs.x - analytic.mins.x, p.channel_width(), epsilon = 1e-12);
    }
}

#[test]
fn cavity_raises_the_envelope() {
    let p = SnapParams::default();
    let with_cavity = snap::female_clip_negative(&p, true).unwrap();
    let bb = with_cavity.to_mesh().bounding_box();
    assert_relative_eq!(bb.maxs.z, p.clip_height() + p.cavity_height(), epsilon = 1e-9);
    assert_relative_eq!(bb.maxs.y, p.female_length(), epsilon = 1e-9);
    assert_eq!(with_cavity.primitive_count(), 5);
}

#[test]
fn latch_is_removed_from_the_pocket() {
    let p = SnapParams::default();
    let body = snap::channel_solid(&p)
        .unwrap()
        .union(snap::latch_pocket(&p))
        .union(snap::spring_relief_solid(&p).unwrap());
    let without_latch = body.to_mesh().volume();
    let with_latch = snap::female_clip_negative(&p, false).unwrap().to_mesh().volume();

    // all of the latch lies inside the pocket except the epsilon-thick slice
    // fused to the spring tip
    let latch = snap::latch_solid(&p).unwrap().to_mesh().volume();
    let fused_slice = p.epsilon * (p.channel_width() - 2.0 * p.j) * p.clip_height();
    let removed = without_latch - with_latch;
    assert!(latch > 0.0);
    assert!(removed <= latch + 1e-6, "removed {removed}, latch {latch}");
    assert!(removed >= latch - fused_slice - 1e-6, "removed {removed}, latch {latch}");
}

#[test]
fn upside_down_is_the_flipped_standard_negative() {
    let p = SnapParams::default().for_orientation(ClipOrientation::UpsideDown);
    assert_eq!(p.epsilon, 0.01);
    let hc = p.clip_height();

    let standard = snap::female_clip_negative(&p, false).unwrap().to_mesh();
    let flipped = snap::female_clip_negative_upside_down(&p).unwrap().to_mesh();
    let expected = standard.transform(&flip_z_matrix(hc)).inverse();
    assert_eq!(flipped.polygons, expected.polygons);

    // vertex for vertex: z' = hc - z, winding reversed
    assert_eq!(flipped.polygons.len(), standard.polygons.len());
    for (up, down) in flipped.polygons.iter().zip(&standard.polygons) {
        for (a, b) in up.vertices.iter().rev().zip(&down.vertices) {
            assert_relative_eq!(a.pos.x, b.pos.x);
            assert_relative_eq!(a.pos.y, b.pos.y);
            assert_relative_eq!(a.pos.z, hc - b.pos.z, epsilon = 1e-12);
        }
    }
    assert_relative_eq!(flipped.volume(), standard.volume(), epsilon = 1e-9);
}

#[test]
fn upside_down_helper_uses_orientation_epsilon() {
    let p = SnapParams::default();
    let via_orientation =
        snap::female_clip_negative_for(&p, ClipOrientation::UpsideDown, true).unwrap();
    let direct = snap::female_clip_negative_upside_down(&p.with_epsilon(0.01)).unwrap();
    assert_eq!(via_orientation, direct);
    assert!(matches!(via_orientation, Solid::Transformed(..)));
}

#[test]
fn generation_is_idempotent() {
    let p = SnapParams::from_preset(Preset::Medium);
    let a = snap::female_clip_negative(&p, true).unwrap();
    let b = snap::female_clip_negative(&p, true).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_mesh().polygons, b.to_mesh().polygons);
}

#[test]
fn invalid_parameters_are_reported() {
    let base = SnapParams::default();
    let cases = [
        (SnapParams { w: 2.0, ..base }, "ClipTooNarrow"),
        (SnapParams { l: 5.0, ..base }, "ClipTooShort"),
        (SnapParams { a: 7.5, ..base }, "SpringTooLong"),
        (SnapParams { s: 0.3, ..base }, "SpringTooThin"),
        (SnapParams { c: 4.5, ..base }, "ChannelExtensionTooLong"),
        (SnapParams { j: 3.4, ..base }, "SpringGapTooWide"),
        (SnapParams { h: 0.0, ..base }, "NonPositive"),
        (SnapParams { epsilon: Real::INFINITY, ..base }, "NonFinite"),
    ];
    for (params, variant) in cases {
        let err = snap::female_clip_negative(&params, false).unwrap_err();
        assert!(err.is_parameter_error());
        assert!(
            err.to_string().starts_with(&format!("({variant})")),
            "{variant}: {err}"
        );
    }
}

#[test]
fn clip_too_narrow_message_names_the_limit() {
    let params = SnapParams { w: 2.0, ..SnapParams::default() };
    let err = params.validate().unwrap_err();
    assert_eq!(
        err,
        ValidationError::ClipTooNarrow { w: 2.0, limit: 1.75 + 2.0 * 0.3 }
    );
    assert!(err.to_string().contains("w must exceed t + 2g"));
}

#[test]
fn out_of_range_spring_gap_is_only_advised() {
    let params = SnapParams { j: 1.2, ..SnapParams::default() };
    assert_eq!(params.validate(), Ok(()));
    let notes = params.advisories();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].contains("[2g, 3g]"));
    assert!(snap::female_clip_negative(&params, true).is_ok());
}
