//! Weighted driver suitability scoring.
//!
//! A driver's score blends four normalised factors:
//!
//! | Factor     | Normalised as                         | Better when |
//! |------------|---------------------------------------|-------------|
//! | distance   | `min(distance / map_diameter, 1)`     | lower       |
//! | workload   | `min(deliveries / max_load, 1)`       | lower       |
//! | rating     | `rating / 5`                          | higher      |
//! | efficiency | `efficiency / 100`                    | higher      |
//!
//! Lower-is-better factors are inverted before weighting, so with the default
//! weights an idle, top-rated driver standing on the pickup scores `1.0`.

use courier_core::{
    Delivery, Driver, DriverScorer, INELIGIBLE_SCORE, MAX_EFFICIENCY, MAX_RATING, RoadGraph,
};
use geo::{Distance, Euclidean, Point};
use thiserror::Error;

/// Relative importance of each scoring factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Weight of proximity to the pickup.
    pub distance: f64,
    /// Weight of spare capacity.
    pub workload: f64,
    /// Weight of customer rating.
    pub rating: f64,
    /// Weight of historical efficiency.
    pub efficiency: f64,
}

impl ScoreWeights {
    /// Weights used when none are supplied.
    pub const DEFAULT: Self = Self {
        distance: 0.4,
        workload: 0.3,
        rating: 0.2,
        efficiency: 0.1,
    };

    const fn values(self) -> [f64; 4] {
        [self.distance, self.workload, self.rating, self.efficiency]
    }

    /// Check every weight is finite and non-negative and at least one is
    /// positive.
    ///
    /// # Errors
    /// Returns [`AssignmentError::InvalidWeights`] otherwise.
    pub fn validate(&self) -> Result<(), AssignmentError> {
        let values = self.values();
        let all_usable = values.iter().all(|w| w.is_finite() && *w >= 0.0);
        let any_positive = values.iter().any(|w| *w > 0.0);
        if all_usable && any_positive {
            Ok(())
        } else {
            Err(AssignmentError::InvalidWeights(*self))
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scales used to normalise distance and workload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringLimits {
    /// Distance, in coordinate units, treated as "as far as it gets".
    pub map_diameter: f64,
    /// Concurrent deliveries treated as a full load.
    pub max_load: u32,
}

impl ScoringLimits {
    /// Limits used when none are supplied.
    pub const DEFAULT: Self = Self {
        map_diameter: 1000.0,
        max_load: 5,
    };

    /// Check the diameter is finite and positive and the load is non-zero.
    ///
    /// # Errors
    /// Returns [`AssignmentError::InvalidLimits`] otherwise.
    pub fn validate(&self) -> Result<(), AssignmentError> {
        if self.map_diameter.is_finite() && self.map_diameter > 0.0 && self.max_load > 0 {
            Ok(())
        } else {
            Err(AssignmentError::InvalidLimits(*self))
        }
    }
}

impl Default for ScoringLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Errors raised when configuring an [`AssignmentScorer`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssignmentError {
    /// Weights were negative, non-finite or all zero.
    #[error("invalid score weights: {0:?}")]
    InvalidWeights(ScoreWeights),
    /// The map diameter or maximum load was unusable.
    #[error("invalid scoring limits: {0:?}")]
    InvalidLimits(ScoringLimits),
}

/// Scores drivers against pickups on one road graph.
///
/// Distances are straight-line distances between intersection coordinates.
/// A driver or pickup without a known coordinate counts as maximally far.
///
/// # Examples
///
/// ```
/// use courier_core::{Delivery, Driver, test_support::sample_graph};
/// use courier_dispatch::AssignmentScorer;
///
/// let graph = sample_graph();
/// let scorer = AssignmentScorer::new(&graph);
/// let drivers = [Driver::new("D1", "Ana", "A"), Driver::new("D2", "Ben", "B")];
/// let delivery = Delivery::new("DEL1", "A");
///
/// let best = scorer.find_best_driver(&delivery, &drivers);
/// assert_eq!(best.map(Driver::id), Some("D1"));
/// assert_eq!(scorer.score_driver(&drivers[0], "A"), 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AssignmentScorer<'g> {
    graph: &'g RoadGraph,
    weights: ScoreWeights,
    limits: ScoringLimits,
}

impl<'g> AssignmentScorer<'g> {
    /// Create a scorer with default weights and limits.
    #[must_use]
    pub const fn new(graph: &'g RoadGraph) -> Self {
        Self {
            graph,
            weights: ScoreWeights::DEFAULT,
            limits: ScoringLimits::DEFAULT,
        }
    }

    /// Create a scorer with validated weights and limits.
    ///
    /// # Errors
    /// Returns [`AssignmentError`] when either part fails validation.
    pub fn with_config(
        graph: &'g RoadGraph,
        weights: ScoreWeights,
        limits: ScoringLimits,
    ) -> Result<Self, AssignmentError> {
        weights.validate()?;
        limits.validate()?;
        Ok(Self {
            graph,
            weights,
            limits,
        })
    }

    /// The graph supplying coordinates.
    #[must_use]
    pub const fn graph(&self) -> &'g RoadGraph {
        self.graph
    }

    /// Active weights.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Active limits.
    #[must_use]
    pub const fn limits(&self) -> ScoringLimits {
        self.limits
    }

    /// Straight-line distance between two intersections.
    ///
    /// Infinite when either intersection is unknown or has no coordinate.
    #[must_use]
    pub fn distance(&self, from: &str, to: &str) -> f64 {
        match (self.graph.coord(from), self.graph.coord(to)) {
            (Some(a), Some(b)) => Euclidean.distance(Point::from(a), Point::from(b)),
            _ => f64::INFINITY,
        }
    }

    /// Score `driver` for collecting from `pickup`; higher is better.
    ///
    /// Busy drivers score [`INELIGIBLE_SCORE`].
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "scores are weighted sums of normalised factors"
    )]
    pub fn score_driver(&self, driver: &Driver, pickup: &str) -> f64 {
        if !driver.is_available() {
            return INELIGIBLE_SCORE;
        }
        let distance = (self.distance(driver.location(), pickup) / self.limits.map_diameter).min(1.0);
        let load = u32::try_from(driver.workload()).unwrap_or(u32::MAX);
        let workload = (f64::from(load) / f64::from(self.limits.max_load)).min(1.0);
        let rating = driver.rating() / MAX_RATING;
        let efficiency = driver.efficiency() / MAX_EFFICIENCY;

        self.weights.distance * (1.0 - distance)
            + self.weights.workload * (1.0 - workload)
            + self.weights.rating * rating
            + self.weights.efficiency * efficiency
    }

    /// Best available driver for `delivery`, scored against its destination.
    ///
    /// The first driver with the strictly highest score wins. `None` when
    /// `drivers` is empty or every driver is busy.
    #[must_use]
    pub fn find_best_driver<'d>(&self, delivery: &Delivery, drivers: &'d [Driver]) -> Option<&'d Driver> {
        self.best_driver(delivery, drivers)
    }
}

impl DriverScorer for AssignmentScorer<'_> {
    fn score(&self, driver: &Driver, pickup: &str) -> f64 {
        self.score_driver(driver, pickup)
    }
}
