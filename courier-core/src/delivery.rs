//! Deliveries and their progress through the dispatch lifecycle.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Progress value at which a delivery counts as complete.
pub const COMPLETE_PROGRESS: u8 = 100;

/// Lifecycle stage of a delivery.
///
/// Callers drive the transitions; the only automatic one is reaching full
/// progress, which forces [`DeliveryStatus::Completed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DeliveryStatus {
    /// Waiting for a driver.
    Pending,
    /// Held by a driver.
    Assigned,
    /// On the road.
    InTransit,
    /// Handed over to the customer.
    Delivered,
    /// Closed.
    Completed,
}

impl DeliveryStatus {
    /// Every status in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Assigned,
        Self::InTransit,
        Self::Delivered,
        Self::Completed,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Assigned => "Assigned",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
            Self::Completed => "Completed",
        }
    }

    /// Report whether a driver is currently working on the delivery.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Assigned | Self::InTransit)
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors from parsing delivery data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The text did not name a [`DeliveryStatus`].
    #[error("unknown delivery status {0:?}")]
    UnknownStatus(String),
}

impl FromStr for DeliveryStatus {
    type Err = DeliveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| {
                status.label().eq_ignore_ascii_case(wanted)
                    || status.label().replace(' ', "").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| DeliveryError::UnknownStatus(s.to_owned()))
    }
}

/// A parcel bound for an intersection.
///
/// # Examples
///
/// ```
/// use courier_core::{Delivery, DeliveryStatus};
///
/// let mut delivery = Delivery::new("DEL001", "C");
/// delivery.update_progress(60);
/// assert_eq!(delivery.status(), DeliveryStatus::Pending);
///
/// delivery.update_progress(60);
/// assert_eq!(delivery.progress(), 100);
/// assert_eq!(delivery.status(), DeliveryStatus::Completed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Delivery {
    id: String,
    destination: String,
    status: DeliveryStatus,
    progress: u8,
}

impl Delivery {
    /// Create a pending delivery with no progress.
    #[must_use]
    pub fn new(id: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            destination: destination.into(),
            status: DeliveryStatus::Pending,
            progress: 0,
        }
    }

    /// Set the status explicitly, independent of progress.
    pub const fn update_status(&mut self, status: DeliveryStatus) {
        self.status = status;
    }

    /// Advance progress by `increment` percentage points.
    ///
    /// Progress saturates at 100, which also marks the delivery completed.
    pub fn update_progress(&mut self, increment: u8) {
        self.progress = self
            .progress
            .saturating_add(increment)
            .min(COMPLETE_PROGRESS);
        if self.progress >= COMPLETE_PROGRESS {
            self.status = DeliveryStatus::Completed;
        }
    }

    /// Identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Destination intersection.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> DeliveryStatus {
        self.status
    }

    /// Progress percentage in `0..=100`.
    #[must_use]
    pub const fn progress(&self) -> u8 {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_delivery_is_pending() {
        let delivery = Delivery::new("DEL1", "B");
        assert_eq!(delivery.status(), DeliveryStatus::Pending);
        assert_eq!(delivery.progress(), 0);
        assert_eq!(delivery.destination(), "B");
    }

    #[rstest]
    fn progress_saturates_and_completes() {
        let mut delivery = Delivery::new("DEL1", "B");
        delivery.update_status(DeliveryStatus::InTransit);
        delivery.update_progress(95);
        assert_eq!(delivery.status(), DeliveryStatus::InTransit);
        delivery.update_progress(15);
        assert_eq!(delivery.progress(), 100);
        assert_eq!(delivery.status(), DeliveryStatus::Completed);
    }

    #[rstest]
    fn status_can_be_set_without_progress() {
        let mut delivery = Delivery::new("DEL1", "B");
        delivery.update_status(DeliveryStatus::Delivered);
        assert_eq!(delivery.status(), DeliveryStatus::Delivered);
        assert_eq!(delivery.progress(), 0);
    }

    #[rstest]
    #[case("Pending", DeliveryStatus::Pending)]
    #[case("In Transit", DeliveryStatus::InTransit)]
    #[case("intransit", DeliveryStatus::InTransit)]
    #[case(" completed ", DeliveryStatus::Completed)]
    fn statuses_parse_from_labels(#[case] text: &str, #[case] expected: DeliveryStatus) {
        assert_eq!(text.parse::<DeliveryStatus>(), Ok(expected));
    }

    #[rstest]
    fn unknown_status_is_rejected() {
        assert_eq!(
            "Lost".parse::<DeliveryStatus>(),
            Err(DeliveryError::UnknownStatus("Lost".into()))
        );
    }

    #[rstest]
    fn labels_round_trip_through_display() {
        for status in DeliveryStatus::ALL {
            assert_eq!(status.to_string().parse::<DeliveryStatus>(), Ok(status));
        }
    }
}
