use courier_core::{DeliveryStatus, DriverError};
use thiserror::Error;

/// Errors raised by [`super::DispatchBoard`] operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// A driver with this id is already on the board.
    #[error("driver `{0}` is already registered")]
    DuplicateDriver(String),
    /// A delivery with this id is already on the board.
    #[error("delivery `{0}` is already registered")]
    DuplicateDelivery(String),
    /// The intersection is not part of the road graph.
    #[error("intersection `{0}` is not on the map")]
    UnknownLocation(String),
    /// No driver has this id.
    #[error("driver `{0}` not found")]
    DriverNotFound(String),
    /// No delivery has this id.
    #[error("delivery `{0}` not found")]
    DeliveryNotFound(String),
    /// Only pending deliveries can be assigned.
    #[error("delivery `{id}` is {status}, not pending")]
    DeliveryNotPending {
        /// Delivery identifier.
        id: String,
        /// Status at the time of the request.
        status: DeliveryStatus,
    },
    /// Drivers must join the board without deliveries so that the board
    /// alone decides who holds what.
    #[error("driver `{id}` already holds {held} deliveries")]
    DriverNotIdle {
        /// Driver identifier.
        id: String,
        /// Number of deliveries the driver arrived with.
        held: usize,
    },
    /// Assigned and in-transit deliveries need a driver holding them.
    #[error("delivery `{id}` cannot be {status} without a driver")]
    DeliveryNotHeld {
        /// Delivery identifier.
        id: String,
        /// Requested status.
        status: DeliveryStatus,
    },
    /// Every driver was busy when automatic assignment ran.
    #[error("no available driver for delivery `{0}`")]
    NoAvailableDriver(String),
    /// The driver rejected the change.
    #[error(transparent)]
    Driver(#[from] DriverError),
}
