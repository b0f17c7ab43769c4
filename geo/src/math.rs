// Keep imports minimal to ease no-std migration if needed

/// Fixed perspective camera distance, in the same units as the sphere
/// radius (screen pixels for the viewer).
pub const CAMERA_DISTANCE: f32 = 400.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A sphere point projected into screen space.
///
/// `depth` is the post-rotation z used for paint ordering: points near
/// the limb sit close to zero, the bulge center carries the largest
/// value. Strictly positive depth means front hemisphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
    pub visible: bool,
}

/// Map geographic degrees onto a sphere of the given radius.
///
/// Polar angle is measured from the north pole, the azimuth is offset
/// by 180° so the seam lies on the antimeridian and +x faces the
/// reference meridian.
#[inline]
#[must_use]
pub fn geo_to_sphere(lat_deg: f32, lon_deg: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();
    let (sphi, cphi) = phi.sin_cos();
    let (stheta, ctheta) = theta.sin_cos();
    Vec3::new(-radius * sphi * ctheta, radius * cphi, radius * sphi * stheta)
}

/// Rotate a sphere point by the current orientation and project it into
/// a `width` × `height` viewport.
///
/// Yaw about Y first, then pitch about the rotated X axis, then the
/// perspective divide. The order is load-bearing: swapping it changes
/// the apparent rotation axis and breaks drag intuition.
#[inline]
#[must_use]
pub fn sphere_to_screen(p: Vec3, spin: f32, tilt: f32, width: f32, height: f32) -> Projected {
    let (ss, cs) = spin.sin_cos();
    let x1 = p.x * cs - p.z * ss;
    let z1 = p.x * ss + p.z * cs;

    let (st, ct) = tilt.sin_cos();
    let y1 = p.y * ct - z1 * st;
    let z2 = p.y * st + z1 * ct;

    let scale = CAMERA_DISTANCE / (CAMERA_DISTANCE + z2);
    Projected {
        x: width * 0.5 + x1 * scale,
        y: height * 0.5 + y1 * scale,
        depth: z2,
        visible: z2 > 0.0,
    }
}

/// Clamp a latitude into [-90, 90] degrees. NaN collapses to 0 so one
/// garbage record cannot poison the trigonometric pipeline.
#[inline]
#[must_use]
pub fn clamp_lat(lat_deg: f32) -> f32 {
    if lat_deg.is_nan() {
        return 0.0;
    }
    lat_deg.clamp(-90.0, 90.0)
}

/// Wrap a longitude into [-180, 180) degrees; non-finite input maps
/// to 0.
#[inline]
#[must_use]
pub fn wrap_lon(lon_deg: f32) -> f32 {
    if !lon_deg.is_finite() {
        return 0.0;
    }
    (lon_deg + 180.0).rem_euclid(360.0) - 180.0
}
