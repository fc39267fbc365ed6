use serde::{Deserialize, Serialize};
use tracing::debug;

/// One sample of a tempering curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub temperature: f64,
    pub hardness_hrc: f64,
}

impl CurvePoint {
    pub const fn new(temperature: f64, hardness_hrc: f64) -> Self {
        Self {
            temperature,
            hardness_hrc,
        }
    }
}

/// Parses `"T1:H1,T2:H2,..."` into points sorted by temperature.
/// Pairs that do not hold two finite numbers are skipped.
pub fn parse_curve(raw: &str) -> Vec<CurvePoint> {
    let mut points: Vec<CurvePoint> = raw
        .split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let point = parse_pair(pair);
            if point.is_none() {
                debug!(pair, "skipping malformed tempering curve pair");
            }
            point
        })
        .collect();

    points.sort_by(|a, b| a.temperature.total_cmp(&b.temperature));
    points
}

fn parse_pair(pair: &str) -> Option<CurvePoint> {
    let (temperature, hardness) = pair.split_once(':')?;
    let temperature = temperature.trim().parse::<f64>().ok()?;
    let hardness = hardness.trim().parse::<f64>().ok()?;

    (temperature.is_finite() && hardness.is_finite())
        .then(|| CurvePoint::new(temperature, hardness))
}

/// Writes points back into the `T:H,T:H` form accepted by [`parse_curve`].
pub fn serialize_curve(points: &[CurvePoint]) -> String {
    points
        .iter()
        .map(|point| format!("{}:{}", point.temperature, point.hardness_hrc))
        .collect::<Vec<_>>()
        .join(",")
}

/// Hardness at `query`, interpolated linearly between the bracketing points.
///
/// Expects points in ascending temperature order. Queries outside the curve
/// clamp to the nearest endpoint. An empty curve yields `0.0` and a single
/// point yields its own hardness.
pub fn interpolate(points: &[CurvePoint], query: f64) -> f64 {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return 0.0,
    };
    if points.len() == 1 {
        return first.hardness_hrc;
    }

    let lower = points
        .iter()
        .filter(|point| point.temperature <= query)
        .max_by(|a, b| a.temperature.total_cmp(&b.temperature))
        .unwrap_or(first);
    let upper = points
        .iter()
        .filter(|point| point.temperature >= query)
        .min_by(|a, b| a.temperature.total_cmp(&b.temperature))
        .unwrap_or(last);

    if lower.temperature == upper.temperature {
        return lower.hardness_hrc;
    }

    let ratio = (query - lower.temperature) / (upper.temperature - lower.temperature);
    lower.hardness_hrc + ratio * (upper.hardness_hrc - lower.hardness_hrc)
}

/// Rounds to one decimal place for display.
pub fn round_for_display(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
