//! Globe renderer core.
//!
//! Owns the data model, the per-frame paint pass, the drag/hover
//! interaction state machine, and the tick scheduler. The projection
//! math lives in `globe_geo`; the host supplies a drawable surface
//! through the [`canvas::Canvas`] trait.
#![deny(missing_docs)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

pub mod canvas;
pub mod color;
pub mod frame;
pub mod points;
pub mod view;

/// Returns the crate version string from Cargo metadata.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_semver_like() {
        assert!(version().split('.').count() >= 3);
    }
}
