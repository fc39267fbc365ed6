use crate::catalog::{CatalogError, CatalogFilter, SteelCatalog, SteelComparison, SteelRecord};
use crate::heat_treat::{simulate, TemperatureUnit, TemperingReading};
use crate::recommend::{recommend_with_limit, Answers, RecommendationEngine, ScoredResult};
use std::sync::Arc;
use tracing::info;

/// Service composing the loaded catalog with the recommendation engine and
/// heat-treat simulator.
#[derive(Debug, Clone)]
pub struct SteelAtlasService {
    catalog: Arc<SteelCatalog>,
    engine: RecommendationEngine,
}

impl SteelAtlasService {
    pub fn new(catalog: Arc<SteelCatalog>, engine: RecommendationEngine) -> Self {
        Self { catalog, engine }
    }

    pub fn catalog(&self) -> &SteelCatalog {
        &self.catalog
    }

    pub fn engine(&self) -> RecommendationEngine {
        self.engine
    }

    pub fn list(&self, filter: &CatalogFilter) -> Vec<&SteelRecord> {
        self.catalog.filter(filter)
    }

    pub fn steel(&self, id: &str) -> Result<&SteelRecord, CatalogError> {
        self.catalog.require(id)
    }

    pub fn producers(&self) -> Vec<&str> {
        self.catalog.producers()
    }

    pub fn compare(&self, ids: &[String]) -> Result<SteelComparison, CatalogError> {
        self.catalog.compare(ids)
    }

    pub fn tempering(
        &self,
        id: &str,
        temperature: f64,
        unit: TemperatureUnit,
    ) -> Result<TemperingReading, CatalogError> {
        if !temperature.is_finite() {
            return Err(CatalogError::InvalidTemperature(temperature));
        }
        let steel = self.catalog.require(id)?;
        Ok(simulate(steel, temperature, unit))
    }

    /// Ranks the catalog; `limit` overrides the engine default but never
    /// exceeds it.
    pub fn recommend(&self, answers: &Answers, limit: Option<usize>) -> Vec<ScoredResult> {
        let results = match limit {
            Some(limit) => recommend_with_limit(
                self.catalog.all(),
                answers,
                limit.clamp(1, self.engine.limit()),
            ),
            None => self.engine.recommend(self.catalog.all(), answers),
        };

        info!(
            results = results.len(),
            top_score = results.first().map(|result| result.match_score),
            "recommendations generated"
        );
        results
    }
}
