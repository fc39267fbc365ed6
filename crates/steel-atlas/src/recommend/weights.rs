use super::answers::{Answers, Maintenance, Priority, Sharpenability, UseCase};
use crate::catalog::Metric;
use serde::Serialize;

/// Per-metric weights used to combine a steel's ratings into one score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightVector {
    pub edge: f64,
    pub toughness: f64,
    pub corrosion: f64,
    pub sharpen: f64,
}

impl WeightVector {
    pub const EQUAL: Self = Self::new(0.25, 0.25, 0.25, 0.25);
    pub const UNIT: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(edge: f64, toughness: f64, corrosion: f64, sharpen: f64) -> Self {
        Self {
            edge,
            toughness,
            corrosion,
            sharpen,
        }
    }

    pub const fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Edge => self.edge,
            Metric::Toughness => self.toughness,
            Metric::Corrosion => self.corrosion,
            Metric::Sharpen => self.sharpen,
        }
    }

    pub fn sum(&self) -> f64 {
        self.edge + self.toughness + self.corrosion + self.sharpen
    }

    /// Elementwise product with a multiplier vector.
    pub fn scaled(self, multipliers: Self) -> Self {
        Self::new(
            self.edge * multipliers.edge,
            self.toughness * multipliers.toughness,
            self.corrosion * multipliers.corrosion,
            self.sharpen * multipliers.sharpen,
        )
    }

    /// Rescales so the weights sum to 1.0. A zero or non-finite total
    /// yields an equal split.
    pub fn normalized(self) -> Self {
        let total = self.sum();
        if !total.is_finite() || total <= 0.0 {
            return Self::EQUAL;
        }

        Self::new(
            self.edge / total,
            self.toughness / total,
            self.corrosion / total,
            self.sharpen / total,
        )
    }
}

pub const fn base_weights(use_case: UseCase) -> WeightVector {
    match use_case {
        UseCase::Edc => WeightVector::new(0.30, 0.20, 0.30, 0.20),
        UseCase::Kitchen => WeightVector::new(0.35, 0.10, 0.35, 0.20),
        UseCase::Outdoor => WeightVector::new(0.20, 0.40, 0.25, 0.15),
        UseCase::HardUse => WeightVector::new(0.15, 0.50, 0.15, 0.20),
    }
}

pub const fn priority_multipliers(priority: Priority) -> WeightVector {
    match priority {
        Priority::Edge => WeightVector::new(1.5, 0.8, 1.0, 1.0),
        Priority::Toughness => WeightVector::new(0.8, 1.5, 1.0, 1.0),
        Priority::Balanced => WeightVector::UNIT,
    }
}

pub const fn maintenance_multipliers(maintenance: Maintenance) -> WeightVector {
    match maintenance {
        Maintenance::Low => WeightVector::new(1.0, 1.0, 1.5, 1.0),
        Maintenance::DontMind => WeightVector::new(1.0, 1.0, 0.7, 1.0),
    }
}

pub const fn sharpenability_multipliers(sharpenability: Sharpenability) -> WeightVector {
    match sharpenability {
        Sharpenability::Easy => WeightVector::new(0.9, 1.0, 1.0, 1.5),
        Sharpenability::MaximumEdge => WeightVector::new(1.3, 1.0, 1.0, 0.7),
    }
}

/// Base table for the use case, adjusted by each preference, then normalized.
pub fn resolve_weights(answers: &Answers) -> WeightVector {
    base_weights(answers.use_case)
        .scaled(priority_multipliers(answers.priority))
        .scaled(maintenance_multipliers(answers.maintenance))
        .scaled(sharpenability_multipliers(answers.sharpenability))
        .normalized()
}
