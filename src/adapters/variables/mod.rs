//! Variable interpolation adapters.

mod default_interpolator;

pub use default_interpolator::DefaultVariableInterpolator;
