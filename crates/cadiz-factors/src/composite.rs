//! Composite Value Score
//!
//! Blends inverted cross-sectional ranks with a 52-week discount term into a
//! single 0-100 score. Higher means more undervalued.

use crate::cross_section::CrossSectionalRanks;
use crate::metric::ValuationMetric;
use crate::percentile::NEUTRAL_PERCENTILE;
use serde::{Deserialize, Serialize};

/// Blend weights for the composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Weight for inverted P/E rank (default: 0.30)
    pub pe: f64,
    /// Weight for inverted P/B rank (default: 0.20)
    pub pb: f64,
    /// Weight for inverted PEG rank (default: 0.20)
    pub peg: f64,
    /// Weight for inverted P/S rank (default: 0.15)
    pub ps: f64,
    /// Weight for the 52-week discount term (default: 0.15)
    pub discount: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            pe: 0.30,
            pb: 0.20,
            peg: 0.20,
            ps: 0.15,
            discount: 0.15,
        }
    }
}

impl ScoringWeights {
    /// Weight applied to one metric's inverted rank.
    pub const fn weight_of(&self, metric: ValuationMetric) -> f64 {
        match metric {
            ValuationMetric::TrailingPe => self.pe,
            ValuationMetric::PriceToBook => self.pb,
            ValuationMetric::Peg => self.peg,
            ValuationMetric::PriceToSales => self.ps,
        }
    }
}

/// Configuration for the composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeConfig {
    /// Blend weights
    pub weights: ScoringWeights,
    /// Points of discount term per percent below the 52-week high (default: 2.0)
    pub discount_multiplier: f64,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            discount_multiplier: 2.0,
        }
    }
}

/// Composite value scorer
#[derive(Debug, Clone, Default)]
pub struct CompositeScorer {
    config: CompositeConfig,
}

impl CompositeScorer {
    /// Create a scorer with the given configuration.
    pub const fn with_config(config: CompositeConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub const fn config(&self) -> &CompositeConfig {
        &self.config
    }

    /// Discount term in `[0, 100]`.
    ///
    /// A stock 20% below its high (`-20.0`) scores 40 with the default
    /// multiplier; at or above its high it scores 0. An absent discount is
    /// neutral.
    pub fn discount_term(&self, discount_52w: Option<f64>) -> f64 {
        match discount_52w.filter(|d| d.is_finite()) {
            Some(discount) => (-discount * self.config.discount_multiplier).clamp(0.0, 100.0),
            None => f64::from(NEUTRAL_PERCENTILE),
        }
    }

    /// Unrounded score.
    ///
    /// All five weights always apply; absent ranks are already neutral.
    pub fn raw_score(&self, ranks: &CrossSectionalRanks, discount_52w: Option<f64>) -> f64 {
        let weights = &self.config.weights;
        let ranked: f64 = ValuationMetric::ALL
            .into_iter()
            .map(|metric| (100.0 - f64::from(ranks.get(metric))) * weights.weight_of(metric))
            .sum();

        (ranked + self.discount_term(discount_52w) * weights.discount).clamp(0.0, 100.0)
    }

    /// Score rounded to the nearest integer, in `[0, 100]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cadiz_factors::{CompositeScorer, CrossSectionalRanks};
    ///
    /// let scorer = CompositeScorer::default();
    /// let ranks = CrossSectionalRanks { pe: 0, pb: 0, peg: 0, ps: 0 };
    /// assert_eq!(scorer.score(&ranks, Some(-80.0)), 100);
    /// ```
    pub fn score(&self, ranks: &CrossSectionalRanks, discount_52w: Option<f64>) -> u8 {
        self.raw_score(ranks, discount_52w).round() as u8
    }
}
