#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]

mod math;
#[cfg(test)]
mod tests;

pub use math::{
    clamp_lat, geo_to_sphere, sphere_to_screen, wrap_lon, Projected, Vec3, CAMERA_DISTANCE,
};
