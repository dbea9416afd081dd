//! In-process dispatch session.
//!
//! A [`DispatchBoard`] owns the drivers and deliveries of one session and
//! borrows the road graph they move on. It keeps both sides consistent: a
//! delivery is held by at most one driver, and completing a delivery frees
//! that driver.

mod error;

pub use error::DispatchError;

use courier_core::{Delivery, DeliveryStatus, Driver, DriverScorer, RoadGraph};
use courier_routing::PathFinder;
use log::{debug, warn};

use crate::AssignmentScorer;

/// The fastest route for one active delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRoute {
    /// Delivery being served.
    pub delivery_id: String,
    /// Driver holding the delivery.
    pub driver_id: String,
    /// Driver's current intersection.
    pub from: String,
    /// Delivery destination.
    pub to: String,
    /// Fastest route, or `None` when the destination is unreachable.
    pub path: Option<Vec<String>>,
    /// Travel time of `path` in minutes.
    pub minutes: Option<f64>,
}

/// Head counts for a board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardSummary {
    /// Registered drivers.
    pub drivers: usize,
    /// Drivers with no assigned deliveries.
    pub available_drivers: usize,
    /// Drivers holding at least one delivery.
    pub busy_drivers: usize,
    /// Deliveries waiting for a driver.
    pub pending: usize,
    /// Deliveries that are assigned or in transit.
    pub active: usize,
    /// Deliveries dropped off but not yet closed.
    pub delivered: usize,
    /// Closed deliveries.
    pub completed: usize,
}

/// Drivers and deliveries of one dispatch session.
///
/// # Examples
///
/// ```
/// use courier_core::{Delivery, DeliveryStatus, Driver, test_support::sample_graph};
/// use courier_dispatch::DispatchBoard;
///
/// let graph = sample_graph();
/// let mut board = DispatchBoard::new(&graph);
/// board.add_driver(Driver::new("D1", "Ana", "A"))?;
/// board.add_delivery(Delivery::new("DEL1", "I"))?;
///
/// assert_eq!(board.auto_assign("DEL1")?, "D1");
/// let routes = board.plan_active_routes();
/// assert_eq!(routes.first().and_then(|route| route.minutes), Some(18.0));
///
/// board.complete("DEL1")?;
/// assert_eq!(board.delivery("DEL1").map(Delivery::status), Some(DeliveryStatus::Completed));
/// # Ok::<(), courier_dispatch::DispatchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DispatchBoard<'g, S = AssignmentScorer<'g>> {
    graph: &'g RoadGraph,
    scorer: S,
    drivers: Vec<Driver>,
    deliveries: Vec<Delivery>,
}

impl<'g> DispatchBoard<'g> {
    /// Create an empty board scoring drivers with the default
    /// [`AssignmentScorer`].
    #[must_use]
    pub const fn new(graph: &'g RoadGraph) -> Self {
        Self::with_scorer(graph, AssignmentScorer::new(graph))
    }
}

impl<'g, S: DriverScorer> DispatchBoard<'g, S> {
    /// Create an empty board with a custom scorer.
    #[must_use]
    pub const fn with_scorer(graph: &'g RoadGraph, scorer: S) -> Self {
        Self {
            graph,
            scorer,
            drivers: Vec::new(),
            deliveries: Vec::new(),
        }
    }

    /// Register a driver.
    ///
    /// The driver must not hold any deliveries yet.
    ///
    /// # Errors
    /// [`DispatchError::DuplicateDriver`] for a repeated id,
    /// [`DispatchError::DriverNotIdle`] for a driver that already holds
    /// deliveries and [`DispatchError::UnknownLocation`] when the driver is
    /// off the map.
    pub fn add_driver(&mut self, driver: Driver) -> Result<(), DispatchError> {
        if self.driver(driver.id()).is_some() {
            return Err(DispatchError::DuplicateDriver(driver.id().to_owned()));
        }
        if driver.workload() > 0 {
            return Err(DispatchError::DriverNotIdle {
                id: driver.id().to_owned(),
                held: driver.workload(),
            });
        }
        self.require_location(driver.location())?;
        self.drivers.push(driver);
        Ok(())
    }

    /// Register a delivery.
    ///
    /// # Errors
    /// [`DispatchError::DuplicateDelivery`] for a repeated id and
    /// [`DispatchError::UnknownLocation`] when the destination is off the
    /// map.
    pub fn add_delivery(&mut self, delivery: Delivery) -> Result<(), DispatchError> {
        if self.delivery(delivery.id()).is_some() {
            return Err(DispatchError::DuplicateDelivery(delivery.id().to_owned()));
        }
        self.require_location(delivery.destination())?;
        self.deliveries.push(delivery);
        Ok(())
    }

    /// Drivers in registration order.
    #[must_use]
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// Deliveries in registration order.
    #[must_use]
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Look up a driver.
    #[must_use]
    pub fn driver(&self, id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|driver| driver.id() == id)
    }

    /// Look up a delivery.
    #[must_use]
    pub fn delivery(&self, id: &str) -> Option<&Delivery> {
        self.deliveries.iter().find(|delivery| delivery.id() == id)
    }

    /// The driver currently holding `delivery_id`, if any.
    #[must_use]
    pub fn holder_of(&self, delivery_id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|driver| driver.holds(delivery_id))
    }

    /// Give a pending delivery to the best-scoring available driver.
    ///
    /// Returns the chosen driver's id.
    ///
    /// # Errors
    /// [`DispatchError::DeliveryNotFound`], [`DispatchError::DeliveryNotPending`]
    /// or [`DispatchError::NoAvailableDriver`].
    pub fn auto_assign(&mut self, delivery_id: &str) -> Result<String, DispatchError> {
        let delivery = self.pending_delivery(delivery_id)?;
        let driver_id = self
            .scorer
            .best_driver(delivery, &self.drivers)
            .map(|driver| driver.id().to_owned())
            .ok_or_else(|| DispatchError::NoAvailableDriver(delivery_id.to_owned()))?;
        self.assign(&driver_id, delivery_id)?;
        Ok(driver_id)
    }

    /// Give a pending delivery to a chosen driver.
    ///
    /// The driver does not need to be idle.
    ///
    /// # Errors
    /// [`DispatchError::DriverNotFound`], [`DispatchError::DeliveryNotFound`]
    /// or [`DispatchError::DeliveryNotPending`].
    pub fn assign(&mut self, driver_id: &str, delivery_id: &str) -> Result<(), DispatchError> {
        self.pending_delivery(delivery_id)?;
        self.driver_mut(driver_id)?.assign_delivery(delivery_id)?;
        self.delivery_mut(delivery_id)?
            .update_status(DeliveryStatus::Assigned);
        debug!("assigned delivery {delivery_id} to driver {driver_id}");
        Ok(())
    }

    /// Close a delivery and release it from its driver.
    ///
    /// # Errors
    /// [`DispatchError::DeliveryNotFound`] for an unknown id.
    pub fn complete(&mut self, delivery_id: &str) -> Result<(), DispatchError> {
        self.delivery_mut(delivery_id)?
            .update_status(DeliveryStatus::Completed);
        self.release(delivery_id);
        Ok(())
    }

    /// Move a driver to another intersection, recording the change.
    ///
    /// # Errors
    /// [`DispatchError::UnknownLocation`] or [`DispatchError::DriverNotFound`].
    pub fn move_driver(&mut self, driver_id: &str, to: &str) -> Result<(), DispatchError> {
        self.require_location(to)?;
        self.driver_mut(driver_id)?.update_location(to);
        Ok(())
    }

    /// Advance delivery progress; reaching 100 % completes it.
    ///
    /// # Errors
    /// [`DispatchError::DeliveryNotFound`] for an unknown id.
    pub fn update_progress(&mut self, delivery_id: &str, increment: u8) -> Result<(), DispatchError> {
        let delivery = self.delivery_mut(delivery_id)?;
        delivery.update_progress(increment);
        if delivery.status() == DeliveryStatus::Completed {
            self.release(delivery_id);
        }
        Ok(())
    }

    /// Overwrite a delivery's status.
    ///
    /// `Completed` and `Pending` both release the delivery from its driver.
    /// `Assigned` and `InTransit` are only accepted while a driver holds it.
    ///
    /// # Errors
    /// [`DispatchError::DeliveryNotFound`] for an unknown id and
    /// [`DispatchError::DeliveryNotHeld`] for an active status on an
    /// unheld delivery.
    pub fn update_status(
        &mut self,
        delivery_id: &str,
        status: DeliveryStatus,
    ) -> Result<(), DispatchError> {
        if self.delivery(delivery_id).is_none() {
            return Err(DispatchError::DeliveryNotFound(delivery_id.to_owned()));
        }
        if status.is_active() && self.holder_of(delivery_id).is_none() {
            return Err(DispatchError::DeliveryNotHeld {
                id: delivery_id.to_owned(),
                status,
            });
        }
        self.delivery_mut(delivery_id)?.update_status(status);
        if matches!(status, DeliveryStatus::Completed | DeliveryStatus::Pending) {
            self.release(delivery_id);
        }
        Ok(())
    }

    /// Fastest route for every assigned or in-transit delivery that has a
    /// driver, in delivery registration order.
    #[must_use]
    pub fn plan_active_routes(&self) -> Vec<PlannedRoute> {
        let finder = PathFinder::new(self.graph);
        self.deliveries
            .iter()
            .filter(|delivery| delivery.status().is_active())
            .filter_map(|delivery| {
                let driver = self.holder_of(delivery.id())?;
                let path = finder.shortest_path_weighted(driver.location(), delivery.destination());
                if path.is_none() {
                    warn!(
                        "no route from {} to {} for delivery {}",
                        driver.location(),
                        delivery.destination(),
                        delivery.id()
                    );
                }
                let minutes = path.as_deref().map(|route| finder.route_time(route));
                Some(PlannedRoute {
                    delivery_id: delivery.id().to_owned(),
                    driver_id: driver.id().to_owned(),
                    from: driver.location().to_owned(),
                    to: delivery.destination().to_owned(),
                    path,
                    minutes,
                })
            })
            .collect()
    }

    /// Count drivers and deliveries by state.
    #[must_use]
    pub fn summary(&self) -> BoardSummary {
        let available_drivers = self.drivers.iter().filter(|d| d.is_available()).count();
        let mut summary = BoardSummary {
            drivers: self.drivers.len(),
            available_drivers,
            busy_drivers: self.drivers.len().saturating_sub(available_drivers),
            ..BoardSummary::default()
        };
        for delivery in &self.deliveries {
            let counter = match delivery.status() {
                DeliveryStatus::Pending => &mut summary.pending,
                DeliveryStatus::Assigned | DeliveryStatus::InTransit => &mut summary.active,
                DeliveryStatus::Delivered => &mut summary.delivered,
                DeliveryStatus::Completed => &mut summary.completed,
            };
            *counter = counter.saturating_add(1);
        }
        summary
    }

    fn require_location(&self, id: &str) -> Result<(), DispatchError> {
        if self.graph.contains_node(id) {
            Ok(())
        } else {
            Err(DispatchError::UnknownLocation(id.to_owned()))
        }
    }

    fn pending_delivery(&self, id: &str) -> Result<&Delivery, DispatchError> {
        let delivery = self
            .delivery(id)
            .ok_or_else(|| DispatchError::DeliveryNotFound(id.to_owned()))?;
        match delivery.status() {
            DeliveryStatus::Pending => Ok(delivery),
            status => Err(DispatchError::DeliveryNotPending {
                id: id.to_owned(),
                status,
            }),
        }
    }

    fn driver_mut(&mut self, id: &str) -> Result<&mut Driver, DispatchError> {
        self.drivers
            .iter_mut()
            .find(|driver| driver.id() == id)
            .ok_or_else(|| DispatchError::DriverNotFound(id.to_owned()))
    }

    fn delivery_mut(&mut self, id: &str) -> Result<&mut Delivery, DispatchError> {
        self.deliveries
            .iter_mut()
            .find(|delivery| delivery.id() == id)
            .ok_or_else(|| DispatchError::DeliveryNotFound(id.to_owned()))
    }

    fn release(&mut self, delivery_id: &str) {
        if let Some(driver) = self.drivers.iter_mut().find(|d| d.holds(delivery_id))
            && driver.complete_delivery(delivery_id).is_ok()
        {
            debug!("driver {} released delivery {delivery_id}", driver.id());
        }
    }
}

#[cfg(test)]
mod tests;
