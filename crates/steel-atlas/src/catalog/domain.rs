use serde::{Deserialize, Serialize};

/// Performance dimensions every steel is rated on, each on a 0-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Edge,
    Toughness,
    Corrosion,
    Sharpen,
}

impl Metric {
    pub const fn ordered() -> [Self; 4] {
        [Self::Edge, Self::Toughness, Self::Corrosion, Self::Sharpen]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Edge => "edge",
            Self::Toughness => "toughness",
            Self::Corrosion => "corrosion",
            Self::Sharpen => "sharpen",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Edge => "Edge Retention",
            Self::Toughness => "Toughness",
            Self::Corrosion => "Corrosion Resistance",
            Self::Sharpen => "Ease of Sharpening",
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|metric| metric.key().eq_ignore_ascii_case(raw))
    }
}

pub const METRIC_MIN: f64 = 0.0;
pub const METRIC_MAX: f64 = 10.0;

/// Alloying elements by weight percent. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    #[serde(rename = "C", default)]
    pub carbon: f64,
    #[serde(rename = "Cr", default)]
    pub chromium: f64,
    #[serde(rename = "V", default)]
    pub vanadium: f64,
    #[serde(rename = "Mo", default)]
    pub molybdenum: f64,
    #[serde(rename = "W", default)]
    pub tungsten: f64,
    #[serde(rename = "Co", default)]
    pub cobalt: f64,
}

/// Ratings as supplied by the data source; any of them may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    #[serde(default)]
    pub edge: Option<f64>,
    #[serde(default)]
    pub toughness: Option<f64>,
    #[serde(default)]
    pub corrosion: Option<f64>,
    #[serde(default)]
    pub sharpen: Option<f64>,
}

impl PerformanceMetrics {
    pub const fn new(edge: f64, toughness: f64, corrosion: f64, sharpen: f64) -> Self {
        Self {
            edge: Some(edge),
            toughness: Some(toughness),
            corrosion: Some(corrosion),
            sharpen: Some(sharpen),
        }
    }

    pub const fn raw(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Edge => self.edge,
            Metric::Toughness => self.toughness,
            Metric::Corrosion => self.corrosion,
            Metric::Sharpen => self.sharpen,
        }
    }

    /// Scoring value for a metric: absent or non-finite reads as 0, anything
    /// else is clamped into the 0-10 scale.
    pub fn value(&self, metric: Metric) -> f64 {
        match self.raw(metric) {
            Some(value) if value.is_finite() => value.clamp(METRIC_MIN, METRIC_MAX),
            _ => 0.0,
        }
    }

    pub fn is_complete(&self) -> bool {
        Metric::ordered()
            .into_iter()
            .all(|metric| self.raw(metric).is_some())
    }
}

/// One steel grade in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelRecord {
    pub id: String,
    pub name: String,
    pub producer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default)]
    pub composition: Composition,
    #[serde(default)]
    pub metrics: PerformanceMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ht_curve: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SteelRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, producer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            producer: producer.into(),
            country: None,
            family: None,
            composition: Composition::default(),
            metrics: PerformanceMetrics::default(),
            ht_curve: None,
            description: None,
        }
    }

    pub fn with_metrics(mut self, edge: f64, toughness: f64, corrosion: f64, sharpen: f64) -> Self {
        self.metrics = PerformanceMetrics::new(edge, toughness, corrosion, sharpen);
        self
    }

    pub fn with_curve(mut self, raw: impl Into<String>) -> Self {
        self.ht_curve = Some(raw.into());
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        self.metrics.value(metric)
    }
}
