//! Tick-driven transitions for the BMI readout.
//!
//! Everything here is expressed in discrete steps rather than wall-clock time;
//! the caller decides how often to advance. Setting a new target always
//! supersedes the transition in flight and continues from the current value.
//!
//! - [`easing`]: the ease-in-out curve
//! - [`value`]: [`animate_value`] frames and the retargetable [`ValueTransition`]
//! - [`color`]: [`Rgb`], [`interpolate_color`], and [`ColorTransition`]
//! - [`state`]: [`AnimationState`], the meter and color transitions owned together
//!
//! # Examples
//!
//! ```
//! use bmi_animate::animate_value;
//!
//! let frames: Vec<f64> = animate_value(0.0, 22.0, 20).collect();
//! assert_eq!(frames.len(), 20);
//! assert_eq!(frames.last(), Some(&22.0));
//! ```

pub mod color;
pub mod easing;
pub mod state;
pub mod value;

pub use self::{
    color::{ColorTransition, Rgb, interpolate_color},
    easing::ease_in_out,
    state::{AnimationState, RenderFrame},
    value::{ValueFrames, ValueTransition, animate_value},
};
