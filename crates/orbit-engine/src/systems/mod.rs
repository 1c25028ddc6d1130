pub mod rng;
pub mod sdf_render;
pub mod shooting_stars;
#[cfg(feature = "vectors")]
pub mod vector;
