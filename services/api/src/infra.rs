use metrics_exporter_prometheus::PrometheusHandle;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use steel_atlas::catalog::{CatalogImportError, SteelCatalog};
use steel_atlas::config::CatalogConfig;
use steel_atlas::recommend::RecommendationEngine;
use steel_atlas::SteelAtlasService;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Picks the CLI override first, then the configured path, then the bundled dataset.
pub(crate) fn catalog_source(
    override_path: Option<PathBuf>,
    config: &CatalogConfig,
) -> Option<PathBuf> {
    override_path.or_else(|| config.path.clone())
}

pub(crate) fn load_catalog(path: Option<&Path>) -> Result<SteelCatalog, CatalogImportError> {
    match path {
        Some(path) => SteelCatalog::from_path(path),
        None => SteelCatalog::bundled(),
    }
}

pub(crate) fn build_service(catalog: SteelCatalog, config: &CatalogConfig) -> SteelAtlasService {
    SteelAtlasService::new(
        Arc::new(catalog),
        RecommendationEngine::new(config.recommendation_limit),
    )
}
