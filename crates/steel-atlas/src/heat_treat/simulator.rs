use super::curve::{interpolate, parse_curve, round_for_display, CurvePoint};
use crate::catalog::SteelRecord;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Temperature scale for simulator queries. Catalog curves are in Celsius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl<'de> Deserialize<'de> for TemperatureUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| de::Error::custom(format!("unknown temperature unit '{raw}'")))
    }
}

impl TemperatureUnit {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" => Some(Self::Celsius),
            "f" | "fahrenheit" => Some(Self::Fahrenheit),
            _ => None,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }

    pub fn from_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => value * 9.0 / 5.0 + 32.0,
        }
    }
}

/// Sorted tempering curve for one steel, in Celsius.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemperingCurve {
    points: Vec<CurvePoint>,
}

impl TemperingCurve {
    pub fn from_raw(raw: &str) -> Self {
        Self {
            points: parse_curve(raw),
        }
    }

    pub fn for_steel(steel: &SteelRecord) -> Self {
        steel
            .ht_curve
            .as_deref()
            .map(Self::from_raw)
            .unwrap_or_default()
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lowest and highest temperatures on the curve.
    pub fn span(&self) -> Option<(f64, f64)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.temperature, last.temperature)),
            _ => None,
        }
    }

    pub fn contains(&self, temperature: f64) -> bool {
        self.span()
            .map(|(min, max)| (min..=max).contains(&temperature))
            .unwrap_or(false)
    }

    pub fn hardness_at(&self, temperature: f64) -> f64 {
        interpolate(&self.points, temperature)
    }
}

/// Simulator output for one steel at one tempering temperature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperingReading {
    pub steel_id: String,
    pub steel_name: String,
    pub unit: TemperatureUnit,
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardness_hrc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_hrc: Option<f64>,
    pub clamped: bool,
    /// Chart series expressed in `unit`.
    pub series: Vec<CurvePoint>,
}

/// Reads the steel's tempering curve at `temperature`, given in `unit`.
pub fn simulate(steel: &SteelRecord, temperature: f64, unit: TemperatureUnit) -> TemperingReading {
    let curve = TemperingCurve::for_steel(steel);
    let celsius = unit.to_celsius(temperature);

    let hardness_hrc = (!curve.is_empty()).then(|| curve.hardness_at(celsius));
    let clamped = !curve.is_empty() && !curve.contains(celsius);
    let series = curve
        .points()
        .iter()
        .map(|point| CurvePoint::new(unit.from_celsius(point.temperature), point.hardness_hrc))
        .collect();

    TemperingReading {
        steel_id: steel.id.clone(),
        steel_name: steel.name.clone(),
        unit,
        temperature,
        hardness_hrc,
        display_hrc: hardness_hrc.map(round_for_display),
        clamped,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steel() -> SteelRecord {
        SteelRecord::new("test", "Test Steel", "Acme").with_curve("200:60,400:58")
    }

    #[test]
    fn celsius_query_interpolates() {
        let reading = simulate(&steel(), 300.0, TemperatureUnit::Celsius);
        assert_eq!(reading.hardness_hrc, Some(59.0));
        assert_eq!(reading.display_hrc, Some(59.0));
        assert!(!reading.clamped);
        assert_eq!(reading.series.len(), 2);
    }

    #[test]
    fn fahrenheit_query_converts_before_interpolating() {
        // 572°F is 300°C.
        let reading = simulate(&steel(), 572.0, TemperatureUnit::Fahrenheit);
        let hardness = reading.hardness_hrc.expect("curve present");
        assert!((hardness - 59.0).abs() < 1e-9);
        assert!((reading.series[0].temperature - 392.0).abs() < 1e-9);
        assert!((reading.series[1].temperature - 752.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_queries_are_flagged() {
        let reading = simulate(&steel(), 100.0, TemperatureUnit::Celsius);
        assert_eq!(reading.hardness_hrc, Some(60.0));
        assert!(reading.clamped);
    }

    #[test]
    fn steels_without_curves_report_no_hardness() {
        let plain = SteelRecord::new("plain", "Plain", "Acme");
        let reading = simulate(&plain, 200.0, TemperatureUnit::Celsius);
        assert!(reading.hardness_hrc.is_none());
        assert!(reading.series.is_empty());
        assert!(!reading.clamped);
    }

    #[test]
    fn unit_parsing() {
        assert_eq!(TemperatureUnit::parse("F"), Some(TemperatureUnit::Fahrenheit));
        assert_eq!(TemperatureUnit::parse(" celsius "), Some(TemperatureUnit::Celsius));
        assert_eq!(TemperatureUnit::parse("kelvin"), None);
    }

    #[test]
    fn unit_deserializes_case_insensitively() {
        let unit: TemperatureUnit = serde_json::from_str("\"C\"").expect("unit parses");
        assert_eq!(unit, TemperatureUnit::Celsius);
        let unit: TemperatureUnit = serde_json::from_str("\"Fahrenheit\"").expect("unit parses");
        assert_eq!(unit, TemperatureUnit::Fahrenheit);
        assert!(serde_json::from_str::<TemperatureUnit>("\"kelvin\"").is_err());
    }

    #[test]
    fn curve_span_and_containment() {
        let curve = TemperingCurve::from_raw("400:58,200:60");
        assert_eq!(curve.span(), Some((200.0, 400.0)));
        assert!(curve.contains(300.0));
        assert!(!curve.contains(401.0));
        assert_eq!(TemperingCurve::default().span(), None);
    }
}
