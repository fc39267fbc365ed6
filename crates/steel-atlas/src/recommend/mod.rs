//! Questionnaire-driven steel recommendations.
//!
//! Answers select a base weight table for the use case, which three
//! preference multipliers then adjust. The normalized weights rank every
//! steel in the catalog.

mod answers;
mod engine;
mod weights;

pub use answers::{Answers, Maintenance, Priority, QuestionOption, Sharpenability, UseCase};
pub use engine::{
    match_score, recommend, recommend_with_limit, top_metrics, MetricContribution,
    RecommendationEngine, ScoredResult, DEFAULT_RECOMMENDATION_LIMIT, EXPLANATION_THRESHOLD,
    MAX_RECOMMENDATION_LIMIT,
};
pub use weights::{
    base_weights, maintenance_multipliers, priority_multipliers, resolve_weights,
    sharpenability_multipliers, WeightVector,
};
