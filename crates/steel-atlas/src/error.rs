use crate::catalog::{CatalogError, CatalogImportError};
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog import error: {0}")]
    Import(#[from] CatalogImportError),
    #[error("{0}")]
    Catalog(#[from] CatalogError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Catalog(CatalogError::SteelNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Catalog(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Import(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_map_to_client_statuses() {
        let missing = AppError::from(CatalogError::SteelNotFound("x".to_string()));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.to_string(), "steel 'x' not found");

        let too_few = AppError::from(CatalogError::TooFewToCompare {
            found: 1,
            minimum: 2,
        });
        assert_eq!(too_few.status(), StatusCode::BAD_REQUEST);

        let temperature = AppError::from(CatalogError::InvalidTemperature(f64::INFINITY));
        assert_eq!(temperature.status(), StatusCode::BAD_REQUEST);

        let import = AppError::from(CatalogImportError::DuplicateId("a".to_string()));
        assert_eq!(import.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
