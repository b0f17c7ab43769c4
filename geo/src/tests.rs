#[cfg(test)]
mod tests {
    use crate::math::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn projection_is_deterministic() {
        let p = geo_to_sphere(48.2, 16.4, 150.0);
        let a = sphere_to_screen(p, 1.3, 0.4, 800.0, 600.0);
        let b = sphere_to_screen(p, 1.3, 0.4, 800.0, 600.0);
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
        assert_eq!(a.depth.to_bits(), b.depth.to_bits());
        assert_eq!(a.visible, b.visible);
    }

    #[test]
    fn north_pole_maps_straight_up() {
        let p = geo_to_sphere(90.0, 0.0, 100.0);
        assert!(close(p.x, 0.0));
        assert!(close(p.y, 100.0));
        assert!(close(p.z, 0.0));
    }

    #[test]
    fn equator_facing_point_sits_on_the_bulge() {
        // lat 0, lon -90 puts the point straight toward the camera.
        let p = geo_to_sphere(0.0, -90.0, 100.0);
        assert!(close(p.x, 0.0));
        assert!(close(p.y, 0.0));
        assert!(close(p.z, 100.0));

        let s = sphere_to_screen(p, 0.0, 0.0, 400.0, 400.0);
        assert!(s.visible);
        assert!(close(s.depth, 100.0));
        assert!(close(s.x, 200.0));
        assert!(close(s.y, 200.0));
    }

    #[test]
    fn visibility_boundary_is_strict() {
        let w = 400.0;
        let on = sphere_to_screen(Vec3::ZERO, 0.0, 0.0, w, w);
        assert!(!on.visible, "depth exactly zero is back hemisphere");

        let front = sphere_to_screen(Vec3::new(0.0, 0.0, 1e-3), 0.0, 0.0, w, w);
        assert!(front.visible);

        let back = sphere_to_screen(Vec3::new(0.0, 0.0, -1e-3), 0.0, 0.0, w, w);
        assert!(!back.visible);
    }

    #[test]
    fn yaw_is_applied_before_pitch() {
        // A quarter-turn yaw moves the bulge point out to -x; a pitch
        // applied afterwards must not bring it back toward the camera.
        let p = Vec3::new(0.0, 0.0, 100.0);
        let s = sphere_to_screen(p, core::f32::consts::FRAC_PI_2, 0.6, 400.0, 400.0);
        assert!(s.x < 200.0 - 50.0);
        assert!(!s.visible || s.depth < 1.0);
    }

    #[test]
    fn perspective_shrinks_with_depth() {
        // Same lateral offset, nearer point lands farther from center.
        let near = sphere_to_screen(Vec3::new(50.0, 0.0, 10.0), 0.0, 0.0, 400.0, 400.0);
        let far = sphere_to_screen(Vec3::new(50.0, 0.0, 90.0), 0.0, 0.0, 400.0, 400.0);
        assert!((near.x - 200.0) > (far.x - 200.0));
    }

    #[test]
    fn latitude_clamps_and_longitude_wraps() {
        assert!(close(clamp_lat(100.0), 90.0));
        assert!(close(clamp_lat(-120.5), -90.0));
        assert!(close(clamp_lat(12.5), 12.5));
        assert!(close(clamp_lat(f32::NAN), 0.0));

        assert!(close(wrap_lon(190.0), -170.0));
        assert!(close(wrap_lon(-190.0), 170.0));
        assert!(close(wrap_lon(540.0), -180.0));
        assert!(close(wrap_lon(45.0), 45.0));
        assert!(close(wrap_lon(f32::NAN), 0.0));
        assert!(close(wrap_lon(f32::INFINITY), 0.0));
    }
}
