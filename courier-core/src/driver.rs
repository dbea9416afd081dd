//! Drivers and their delivery workload.
//!
//! A driver's status is never stored: it is `Busy` exactly when the driver
//! holds at least one assigned delivery.

use std::fmt;

use thiserror::Error;

/// Highest rating a driver can hold.
pub const MAX_RATING: f64 = 5.0;

/// Highest efficiency score a driver can hold.
pub const MAX_EFFICIENCY: f64 = 100.0;

/// Whether a driver can take new work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DriverStatus {
    /// No deliveries assigned.
    Available,
    /// At least one delivery assigned.
    Busy,
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => f.write_str("Available"),
            Self::Busy => f.write_str("Busy"),
        }
    }
}

/// One recorded move between intersections.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LocationChange {
    /// Intersection the driver left.
    pub from: String,
    /// Intersection the driver arrived at.
    pub to: String,
}

/// Errors from [`Driver`] construction and mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DriverError {
    /// Rating outside `0.0..=5.0`.
    #[error("driver rating {0} must be between 0 and 5")]
    RatingOutOfRange(f64),
    /// Efficiency outside `0.0..=100.0`.
    #[error("driver efficiency {0} must be between 0 and 100")]
    EfficiencyOutOfRange(f64),
    /// A delivery identifier was empty.
    #[error("delivery identifier must not be empty")]
    EmptyDeliveryId,
    /// The delivery is already on this driver's list.
    #[error("delivery {0} is already assigned to this driver")]
    AlreadyAssigned(String),
    /// The delivery is not on this driver's list.
    #[error("delivery {0} is not assigned to this driver")]
    NotAssigned(String),
}

/// A courier positioned at an intersection.
///
/// # Examples
///
/// ```
/// use courier_core::{Driver, DriverStatus};
///
/// # fn main() -> Result<(), courier_core::DriverError> {
/// let mut driver = Driver::new("D001", "John Doe", "A").with_rating(4.5)?;
/// driver.assign_delivery("DEL001")?;
/// assert_eq!(driver.status(), DriverStatus::Busy);
///
/// driver.complete_delivery("DEL001")?;
/// assert!(driver.is_available());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Driver {
    id: String,
    name: String,
    location: String,
    assigned: Vec<String>,
    rating: f64,
    efficiency: f64,
    route_history: Vec<LocationChange>,
}

impl Driver {
    /// Create an available driver with a full rating and efficiency.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            assigned: Vec::new(),
            rating: MAX_RATING,
            efficiency: MAX_EFFICIENCY,
            route_history: Vec::new(),
        }
    }

    /// Set the rating.
    ///
    /// # Errors
    /// Returns [`DriverError::RatingOutOfRange`] outside `0.0..=5.0`.
    pub fn with_rating(mut self, rating: f64) -> Result<Self, DriverError> {
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(DriverError::RatingOutOfRange(rating));
        }
        self.rating = rating;
        Ok(self)
    }

    /// Set the efficiency score.
    ///
    /// # Errors
    /// Returns [`DriverError::EfficiencyOutOfRange`] outside `0.0..=100.0`.
    pub fn with_efficiency(mut self, efficiency: f64) -> Result<Self, DriverError> {
        if !(0.0..=MAX_EFFICIENCY).contains(&efficiency) {
            return Err(DriverError::EfficiencyOutOfRange(efficiency));
        }
        self.efficiency = efficiency;
        Ok(self)
    }

    /// Add a delivery to the end of the driver's list.
    ///
    /// # Errors
    /// Returns [`DriverError::EmptyDeliveryId`] for an empty id and
    /// [`DriverError::AlreadyAssigned`] for a duplicate.
    pub fn assign_delivery(&mut self, delivery_id: &str) -> Result<(), DriverError> {
        if delivery_id.is_empty() {
            return Err(DriverError::EmptyDeliveryId);
        }
        if self.holds(delivery_id) {
            return Err(DriverError::AlreadyAssigned(delivery_id.to_owned()));
        }
        self.assigned.push(delivery_id.to_owned());
        Ok(())
    }

    /// Remove a delivery from the driver's list.
    ///
    /// # Errors
    /// Returns [`DriverError::NotAssigned`] when the driver does not hold it.
    pub fn complete_delivery(&mut self, delivery_id: &str) -> Result<(), DriverError> {
        let Some(position) = self.assigned.iter().position(|held| held == delivery_id) else {
            return Err(DriverError::NotAssigned(delivery_id.to_owned()));
        };
        self.assigned.remove(position);
        Ok(())
    }

    /// Move the driver, recording the change in the route history.
    pub fn update_location(&mut self, destination: impl Into<String>) {
        let to = destination.into();
        let from = std::mem::replace(&mut self.location, to.clone());
        self.route_history.push(LocationChange { from, to });
    }

    /// Identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current intersection.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Rating in `0.0..=5.0`.
    #[must_use]
    pub const fn rating(&self) -> f64 {
        self.rating
    }

    /// Efficiency score in `0.0..=100.0`.
    #[must_use]
    pub const fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Assigned delivery ids in assignment order.
    #[must_use]
    pub fn assigned_deliveries(&self) -> &[String] {
        &self.assigned
    }

    /// Recorded moves, oldest first.
    #[must_use]
    pub fn route_history(&self) -> &[LocationChange] {
        &self.route_history
    }

    /// Report whether the driver holds `delivery_id`.
    #[must_use]
    pub fn holds(&self, delivery_id: &str) -> bool {
        self.assigned.iter().any(|held| held == delivery_id)
    }

    /// Number of assigned deliveries.
    #[must_use]
    pub fn workload(&self) -> usize {
        self.assigned.len()
    }

    /// Derived status.
    #[must_use]
    pub fn status(&self) -> DriverStatus {
        if self.assigned.is_empty() {
            DriverStatus::Available
        } else {
            DriverStatus::Busy
        }
    }

    /// Report whether the driver can take new work.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status() == DriverStatus::Available
    }
}
