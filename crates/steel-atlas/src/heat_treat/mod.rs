//! Tempering curves and the heat-treat simulator.

mod curve;
mod simulator;

pub use curve::{interpolate, parse_curve, round_for_display, serialize_curve, CurvePoint};
pub use simulator::{simulate, TemperatureUnit, TemperingCurve, TemperingReading};
