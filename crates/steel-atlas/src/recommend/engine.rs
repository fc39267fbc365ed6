use super::answers::{Answers, QuestionOption};
use super::weights::{resolve_weights, WeightVector};
use crate::catalog::{Metric, SteelRecord};
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;
pub const MAX_RECOMMENDATION_LIMIT: usize = 50;

/// Ratings below this never appear in a result's explanation.
pub const EXPLANATION_THRESHOLD: f64 = 5.0;
const EXPLAINED_METRICS: usize = 2;

/// How much one metric added to a steel's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricContribution {
    pub metric: Metric,
    pub value: f64,
    pub weight: f64,
    pub contribution: f64,
}

/// A ranked steel with its match score and the metrics that explain it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    #[serde(flatten)]
    pub steel: SteelRecord,
    pub match_score: u8,
    pub top_metrics: Vec<MetricContribution>,
}

/// Stateless ranker returning at most `limit` steels per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationEngine {
    limit: usize,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(DEFAULT_RECOMMENDATION_LIMIT)
    }
}

impl RecommendationEngine {
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.clamp(1, MAX_RECOMMENDATION_LIMIT),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn recommend(&self, catalog: &[SteelRecord], answers: &Answers) -> Vec<ScoredResult> {
        recommend_with_limit(catalog, answers, self.limit)
    }
}

/// Ranks the catalog for the given answers and returns the top five.
pub fn recommend(catalog: &[SteelRecord], answers: &Answers) -> Vec<ScoredResult> {
    recommend_with_limit(catalog, answers, DEFAULT_RECOMMENDATION_LIMIT)
}

pub fn recommend_with_limit(
    catalog: &[SteelRecord],
    answers: &Answers,
    limit: usize,
) -> Vec<ScoredResult> {
    let weights = resolve_weights(answers);
    debug!(
        use_case = answers.use_case.key(),
        priority = answers.priority.key(),
        maintenance = answers.maintenance.key(),
        sharpenability = answers.sharpenability.key(),
        edge = weights.edge,
        toughness = weights.toughness,
        corrosion = weights.corrosion,
        sharpen = weights.sharpen,
        steels = catalog.len(),
        "resolved recommendation weights"
    );

    let mut ranked: Vec<(usize, u8)> = catalog
        .iter()
        .enumerate()
        .map(|(index, steel)| (index, match_score(steel, &weights)))
        .collect();
    // Vec::sort_by is stable, so equal scores keep catalog order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(limit)
        .map(|(index, score)| {
            let steel = &catalog[index];
            ScoredResult {
                steel: steel.clone(),
                match_score: score,
                top_metrics: top_metrics(steel, &weights),
            }
        })
        .collect()
}

/// `round(Σ weight·rating / 10 · 100)`, kept inside 0..=100.
pub fn match_score(steel: &SteelRecord, weights: &WeightVector) -> u8 {
    let raw: f64 = Metric::ordered()
        .into_iter()
        .map(|metric| weights.get(metric) * steel.metric(metric))
        .sum();
    let percent = (raw / 10.0 * 100.0).round();
    if percent.is_finite() {
        percent.clamp(0.0, 100.0) as u8
    } else {
        0
    }
}

/// The two largest contributions, dropping any whose rating is below the
/// explanation threshold.
pub fn top_metrics(steel: &SteelRecord, weights: &WeightVector) -> Vec<MetricContribution> {
    let mut contributions: Vec<MetricContribution> = Metric::ordered()
        .into_iter()
        .map(|metric| {
            let value = steel.metric(metric);
            let weight = weights.get(metric);
            MetricContribution {
                metric,
                value,
                weight,
                contribution: weight * value,
            }
        })
        .collect();
    contributions.sort_by(|a, b| b.contribution.total_cmp(&a.contribution));

    contributions
        .into_iter()
        .take(EXPLAINED_METRICS)
        .filter(|entry| entry.value >= EXPLANATION_THRESHOLD)
        .collect()
}
