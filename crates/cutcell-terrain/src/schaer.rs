//! Schär cosine-bell mountain.

use std::f64::consts::PI;

use serde::Deserialize;

use crate::Terrain;
use crate::error::{TerrainError, TerrainResult};

/// `h0 * cos²(πx / 2a) * cos²(πx / λ)` inside `|x| < a`, flat ground outside.
///
/// The envelope `cos²(πx / 2a)` vanishes together with its slope at `x = ±a`,
/// so the profile is C¹ across the cut-off.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchaerMountain {
    half_width: f64,
    peak_height: f64,
    wavelength: f64,
}

impl SchaerMountain {
    pub fn new(half_width: f64, peak_height: f64, wavelength: f64) -> TerrainResult<Self> {
        if !(half_width.is_finite() && half_width > 0.0) {
            return Err(TerrainError::invalid_parameter(
                "half_width",
                half_width,
                "must be finite and positive",
            ));
        }
        if !peak_height.is_finite() {
            return Err(TerrainError::invalid_parameter(
                "peak_height",
                peak_height,
                "must be finite",
            ));
        }
        if !(wavelength.is_finite() && wavelength > 0.0) {
            return Err(TerrainError::invalid_parameter(
                "wavelength",
                wavelength,
                "must be finite and positive",
            ));
        }
        Ok(Self {
            half_width,
            peak_height,
            wavelength,
        })
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    #[inline]
    pub fn peak_height(&self) -> f64 {
        self.peak_height
    }

    #[inline]
    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }
}

impl Terrain for SchaerMountain {
    #[inline]
    fn height_at(&self, x: f64) -> f64 {
        if x.abs() < self.half_width {
            let envelope = (0.5 * PI * x / self.half_width).cos();
            let ripple = (PI * x / self.wavelength).cos();
            self.peak_height * (envelope * envelope) * (ripple * ripple)
        } else {
            0.0
        }
    }
}

impl TryFrom<&MountainConfig> for SchaerMountain {
    type Error = TerrainError;

    fn try_from(cfg: &MountainConfig) -> TerrainResult<Self> {
        SchaerMountain::new(cfg.half_width, cfg.peak_height, cfg.wavelength)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MountainConfig {
    #[serde(default = "default_half_width")]
    pub half_width: f64,
    #[serde(default = "default_peak_height")]
    pub peak_height: f64,
    #[serde(default = "default_wavelength")]
    pub wavelength: f64,
}
fn default_half_width() -> f64 {
    5.0e3
}
fn default_peak_height() -> f64 {
    5.0e3
}
fn default_wavelength() -> f64 {
    4.0e3
}
impl Default for MountainConfig {
    fn default() -> Self {
        Self {
            half_width: default_half_width(),
            peak_height: default_peak_height(),
            wavelength: default_wavelength(),
        }
    }
}
