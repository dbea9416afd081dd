//! Rank drivers for a pickup location.
//!
//! The `DriverScorer` trait assigns a suitability score to a [`Driver`] for a
//! pickup intersection. `courier-dispatch` provides the weighted
//! distance/workload/rating/efficiency implementation.

use crate::{Delivery, Driver};

/// Score returned for drivers that cannot take the job.
///
/// It sits below every legitimate score, which are non-negative.
pub const INELIGIBLE_SCORE: f64 = -1.0;

/// Calculate how well a driver suits a pickup.
///
/// Higher is better. Implementations must return [`INELIGIBLE_SCORE`] for
/// drivers that cannot be assigned and a finite, non-negative value
/// otherwise. Scorers must be `Send + Sync` so dispatchers can share them.
///
/// # Examples
///
/// ```rust
/// use courier_core::{Delivery, Driver, DriverScorer, INELIGIBLE_SCORE};
///
/// struct FirstAvailable;
///
/// impl DriverScorer for FirstAvailable {
///     fn score(&self, driver: &Driver, _pickup: &str) -> f64 {
///         if driver.is_available() { 1.0 } else { INELIGIBLE_SCORE }
///     }
/// }
///
/// let mut busy = Driver::new("D1", "Busy", "A");
/// busy.assign_delivery("DEL0").expect("fresh assignment");
/// let drivers = [busy, Driver::new("D2", "Free", "B")];
/// let delivery = Delivery::new("DEL1", "C");
///
/// let best = FirstAvailable.best_driver(&delivery, &drivers);
/// assert_eq!(best.map(Driver::id), Some("D2"));
/// ```
pub trait DriverScorer: Send + Sync {
    /// Return a score for `driver` collecting from `pickup`.
    fn score(&self, driver: &Driver, pickup: &str) -> f64;

    /// Pick the highest-scoring eligible driver for `delivery`.
    ///
    /// The delivery destination stands in for the pickup point. The first
    /// driver with the strictly highest score wins; `None` when every driver
    /// is ineligible or the slice is empty.
    fn best_driver<'d>(&self, delivery: &Delivery, drivers: &'d [Driver]) -> Option<&'d Driver> {
        let mut best: Option<(&Driver, f64)> = None;
        for driver in drivers {
            let score = self.score(driver, delivery.destination());
            let current = best.map_or(INELIGIBLE_SCORE, |(_, top)| top);
            if score > current {
                best = Some((driver, score));
            }
        }
        best.map(|(driver, _)| driver)
    }
}
