//! Cutting a structured grid against terrain.
#![forbid(unsafe_code)]

pub mod error;
pub mod roots;
pub mod shaver;

pub use error::{GeometryError, ShaveError, ShaveResult};
pub use roots::{Root, RootOptions, brentq};
pub use shaver::{Crossing, ShaveReport, Shaver, find_crossings};
