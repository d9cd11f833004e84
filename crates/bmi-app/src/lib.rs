//! Shared library module for the BMI calculator app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::BmiCalculatorApp;

mod action;
mod animation_driver;
mod app;
mod palette;
mod readout;
mod state;
mod ui;
mod view_model_builder;

pub mod version;
