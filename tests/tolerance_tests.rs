//! Kernel configuration: the runtime tolerance override and the `parallel`
//! evaluation path. Lives in its own test binary so the tolerance cell starts
//! empty.

use slidensnap::{
    float_types::{set_tolerance, tolerance},
    mesh::Mesh,
    traits::CSG,
};

// The only test in this binary that touches the tolerance cell; another test
// reading `tolerance()` first would fill it with the default.
#[test]
fn set_tolerance_before_first_use() {
    assert!(set_tolerance(1e-6));
    assert_eq!(tolerance(), 1e-6);
    assert!(!set_tolerance(1e-3));
    assert_eq!(tolerance(), 1e-6);

    let a: Mesh<()> = Mesh::cube(2.0, None);
    let b: Mesh<()> = Mesh::cube(2.0, None).translate(1.0, 1.0, 1.0);
    let volume = a.union(&b).volume();
    assert!((volume - 15.0).abs() < 1e-6, "union volume {volume}");
}

#[cfg(feature = "parallel")]
mod parallel {
    use nalgebra::Point3;
    use slidensnap::{
        profile::SketchPlane,
        snap::{self, Preset, SnapParams},
        solid::Solid,
        traits::CSG,
    };

    #[test]
    fn union_matches_serial_evaluation() {
        let male = snap::male_clip(1.75, 5.25, 7.0).unwrap();
        let block =
            Solid::cuboid_between(Point3::new(-4.0, 2.0, -1.0), Point3::new(4.0, 5.0, 1.0));

        let tree = male.clone().union(block.clone());
        let serial = male.to_mesh().union(&block.to_mesh());
        assert_eq!(tree.to_mesh().polygons, serial.polygons);
    }

    #[test]
    fn extrusion_difference_matches_serial_evaluation() {
        let p = SnapParams::default();
        let channel = Solid::extrusion(
            snap::channel_profile(&p).unwrap(),
            SketchPlane::XZ,
            0.0,
            p.female_length(),
        );
        let latch = snap::latch_solid(&p).unwrap();

        let tree = channel.clone().difference(latch.clone());
        let serial = channel.to_mesh().difference(&latch.to_mesh());
        assert_eq!(tree.to_mesh().polygons, serial.polygons);
    }

    #[test]
    fn female_negative_matches_serial_composition() {
        let p = SnapParams::from_preset(Preset::Small);
        let tree = snap::female_clip_negative(&p, true).unwrap();

        let body = snap::channel_solid(&p)
            .unwrap()
            .to_mesh()
            .union(&snap::latch_pocket(&p).to_mesh())
            .union(&snap::spring_relief_solid(&p).unwrap().to_mesh())
            .union(&snap::spring_cavity(&p).to_mesh());
        let serial = body.difference(&snap::latch_solid(&p).unwrap().to_mesh());

        assert_eq!(tree.to_mesh().polygons, serial.polygons);
    }
}
