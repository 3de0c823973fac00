//! Analytic terrain profiles sampled by the shaver.
#![forbid(unsafe_code)]

pub mod error;
pub mod schaer;

pub use error::{TerrainError, TerrainResult};
pub use schaer::{MountainConfig, SchaerMountain};

/// Ground height `z` above the undisturbed grid at horizontal position `x`.
///
/// Implementations must be pure and continuous in `x`; the shaver brackets
/// roots of `height_at(x) - z` and relies on the intermediate value theorem.
pub trait Terrain {
    fn height_at(&self, x: f64) -> f64;
}

impl<T: Terrain + ?Sized> Terrain for &T {
    #[inline]
    fn height_at(&self, x: f64) -> f64 {
        (**self).height_at(x)
    }
}

impl<T: Terrain + ?Sized> Terrain for Box<T> {
    #[inline]
    fn height_at(&self, x: f64) -> f64 {
        (**self).height_at(x)
    }
}

/// Any closure is a terrain profile.
#[derive(Clone, Copy, Debug)]
pub struct FnTerrain<F>(pub F);

impl<F: Fn(f64) -> f64> Terrain for FnTerrain<F> {
    #[inline]
    fn height_at(&self, x: f64) -> f64 {
        (self.0)(x)
    }
}
