use super::domain::{Metric, SteelRecord};
use super::CatalogError;
use serde::Serialize;

pub const MIN_COMPARE: usize = 2;
pub const MAX_COMPARE: usize = 4;

/// Best performer for a metric among the compared steels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricLeader {
    pub metric: Metric,
    pub metric_label: &'static str,
    pub steel_id: String,
    pub value: f64,
}

/// Side-by-side view of a handful of steels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SteelComparison {
    pub steels: Vec<SteelRecord>,
    pub leaders: Vec<MetricLeader>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

pub(crate) fn compare(catalog: &[SteelRecord], ids: &[String]) -> Result<SteelComparison, CatalogError> {
    let mut requested: Vec<&str> = Vec::with_capacity(ids.len());
    for id in ids.iter().map(|id| id.trim()).filter(|id| !id.is_empty()) {
        if !requested.contains(&id) {
            requested.push(id);
        }
    }

    if requested.len() > MAX_COMPARE {
        return Err(CatalogError::TooManyToCompare {
            requested: requested.len(),
            maximum: MAX_COMPARE,
        });
    }

    let mut steels = Vec::new();
    let mut missing = Vec::new();
    for id in requested {
        match catalog.iter().find(|steel| steel.id == id) {
            Some(steel) => steels.push(steel.clone()),
            None => missing.push(id.to_string()),
        }
    }

    if steels.len() < MIN_COMPARE {
        return Err(CatalogError::TooFewToCompare {
            found: steels.len(),
            minimum: MIN_COMPARE,
        });
    }

    let leaders = Metric::ordered()
        .into_iter()
        .filter_map(|metric| leader_for(&steels, metric))
        .collect();

    Ok(SteelComparison {
        steels,
        leaders,
        missing,
    })
}

fn leader_for(steels: &[SteelRecord], metric: Metric) -> Option<MetricLeader> {
    let mut best: Option<&SteelRecord> = None;
    for steel in steels {
        match best {
            Some(current) if steel.metric(metric) <= current.metric(metric) => {}
            _ => best = Some(steel),
        }
    }

    best.map(|steel| MetricLeader {
        metric,
        metric_label: metric.label(),
        steel_id: steel.id.clone(),
        value: steel.metric(metric),
    })
}
