use super::domain::{Metric, SteelRecord};
use serde::{Deserialize, Serialize};

/// Ordering applied to filtered catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSort {
    Name,
    Edge,
    Toughness,
    Corrosion,
    Sharpen,
}

impl CatalogSort {
    pub const fn metric(self) -> Option<Metric> {
        match self {
            Self::Name => None,
            Self::Edge => Some(Metric::Edge),
            Self::Toughness => Some(Metric::Toughness),
            Self::Corrosion => Some(Metric::Corrosion),
            Self::Sharpen => Some(Metric::Sharpen),
        }
    }
}

/// Browse criteria. Every populated field must match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFilter {
    #[serde(default)]
    pub producer: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub min_edge: Option<f64>,
    #[serde(default)]
    pub min_toughness: Option<f64>,
    #[serde(default)]
    pub min_corrosion: Option<f64>,
    #[serde(default)]
    pub min_sharpen: Option<f64>,
    #[serde(default)]
    pub sort: Option<CatalogSort>,
}

impl CatalogFilter {
    pub fn minimum(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Edge => self.min_edge,
            Metric::Toughness => self.min_toughness,
            Metric::Corrosion => self.min_corrosion,
            Metric::Sharpen => self.min_sharpen,
        }
    }

    pub fn matches(&self, steel: &SteelRecord) -> bool {
        if let Some(producer) = non_blank(&self.producer) {
            if !steel.producer.eq_ignore_ascii_case(producer) {
                return false;
            }
        }

        if let Some(family) = non_blank(&self.family) {
            let matches_family = steel
                .family
                .as_deref()
                .map(|value| value.eq_ignore_ascii_case(family))
                .unwrap_or(false);
            if !matches_family {
                return false;
            }
        }

        if let Some(search) = non_blank(&self.search) {
            let needle = search.to_lowercase();
            if !steel.name.to_lowercase().contains(&needle)
                && !steel.id.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        Metric::ordered().into_iter().all(|metric| {
            self.minimum(metric)
                .map(|minimum| steel.metric(metric) >= minimum)
                .unwrap_or(true)
        })
    }

    pub(crate) fn apply<'a>(&self, steels: &'a [SteelRecord]) -> Vec<&'a SteelRecord> {
        let mut matched: Vec<&SteelRecord> =
            steels.iter().filter(|steel| self.matches(steel)).collect();

        match self.sort {
            None => {}
            Some(CatalogSort::Name) => {
                matched.sort_by_key(|steel| steel.name.to_lowercase());
            }
            Some(sort) => {
                if let Some(metric) = sort.metric() {
                    matched.sort_by(|a, b| b.metric(metric).total_cmp(&a.metric(metric)));
                }
            }
        }

        matched
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
