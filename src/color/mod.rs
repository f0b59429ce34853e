//! Color value types, conversion, and classification
//!
//! This module handles hex/RGB/HSL conversions and the perceptual
//! classification (temperature, brightness, saturation) of single colors.

pub mod classify;
pub mod conversion;

pub use classify::{Brightness, SaturationLevel, Temperature};
pub use conversion::{Hsl, Rgb};
