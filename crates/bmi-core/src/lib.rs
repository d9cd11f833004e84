//! Core BMI computation for the BMI calculator.
//!
//! This crate turns a weight and a height into a Body Mass Index and a
//! [`Category`]. It has no UI dependencies and no side effects.
//!
//! # Overview
//!
//! - [`unit`]: the [`UnitSystem`] a measurement is expressed in
//! - [`measurement`]: validated [`Measurement`] values and the text adapter
//!   that builds them from raw input
//! - [`bmi`]: [`compute_bmi`], [`BmiResult`], and display formatting
//! - [`category`]: the fixed classification thresholds
//! - [`error`]: the [`InvalidMeasurement`] error
//!
//! # Examples
//!
//! ```
//! use bmi_core::{Category, Measurement, UnitSystem};
//!
//! let measurement = Measurement::parse("70", "1.75", UnitSystem::Metric)?;
//! let result = measurement.bmi();
//!
//! assert_eq!(result.category, Category::Normal);
//! assert_eq!(result.display_value(), "22.9");
//! # Ok::<(), bmi_core::InvalidMeasurement>(())
//! ```

pub mod bmi;
pub mod category;
pub mod error;
pub mod measurement;
pub mod unit;

pub use self::{
    bmi::{BmiResult, PLACEHOLDER, compute_bmi, format_bmi},
    category::{Category, classify},
    error::{Field, InvalidMeasurement},
    measurement::Measurement,
    unit::UnitSystem,
};
