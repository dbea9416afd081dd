//! Unit tests for the dispatch board.

use courier_core::test_support::sample_graph;
use courier_core::{DriverError, INELIGIBLE_SCORE};
use rstest::{fixture, rstest};

use super::*;

#[fixture]
fn graph() -> RoadGraph {
    sample_graph()
}

fn board_with(graph: &RoadGraph) -> DispatchBoard<'_> {
    let mut board = DispatchBoard::new(graph);
    board
        .add_driver(Driver::new("D1", "Ana", "A"))
        .expect("valid driver");
    board
        .add_driver(Driver::new("D2", "Ben", "I"))
        .expect("valid driver");
    for (id, destination) in [("DEL1", "B"), ("DEL2", "H"), ("DEL3", "E")] {
        board
            .add_delivery(Delivery::new(id, destination))
            .expect("valid delivery");
    }
    board
}

#[rstest]
fn registration_rejects_duplicates_and_unknown_locations(graph: RoadGraph) {
    let mut board = board_with(&graph);
    assert_eq!(
        board.add_driver(Driver::new("D1", "Again", "B")),
        Err(DispatchError::DuplicateDriver("D1".into()))
    );
    assert_eq!(
        board.add_driver(Driver::new("D3", "Cy", "Z")),
        Err(DispatchError::UnknownLocation("Z".into()))
    );
    assert_eq!(
        board.add_delivery(Delivery::new("DEL1", "C")),
        Err(DispatchError::DuplicateDelivery("DEL1".into()))
    );
    assert_eq!(
        board.add_delivery(Delivery::new("DEL9", "Z")),
        Err(DispatchError::UnknownLocation("Z".into()))
    );
    assert_eq!(board.drivers().len(), 2);
    assert_eq!(board.deliveries().len(), 3);
}

#[rstest]
fn auto_assign_picks_the_nearest_idle_driver(graph: RoadGraph) {
    let mut board = board_with(&graph);
    assert_eq!(board.auto_assign("DEL1"), Ok("D1".to_owned()));
    assert_eq!(board.auto_assign("DEL2"), Ok("D2".to_owned()));
    assert_eq!(
        board.delivery("DEL1").map(Delivery::status),
        Some(DeliveryStatus::Assigned)
    );
    assert_eq!(board.holder_of("DEL2").map(Driver::id), Some("D2"));
}

#[rstest]
fn auto_assign_skips_busy_drivers(graph: RoadGraph) {
    let mut board = board_with(&graph);
    board.assign("D1", "DEL1").expect("manual assignment");
    assert_eq!(board.auto_assign("DEL3"), Ok("D2".to_owned()));
    assert_eq!(
        board.auto_assign("DEL2"),
        Err(DispatchError::NoAvailableDriver("DEL2".into()))
    );
    assert_eq!(
        board.delivery("DEL2").map(Delivery::status),
        Some(DeliveryStatus::Pending)
    );
}

#[rstest]
fn only_pending_deliveries_are_assigned(graph: RoadGraph) {
    let mut board = board_with(&graph);
    board.assign("D1", "DEL1").expect("manual assignment");
    assert_eq!(
        board.assign("D2", "DEL1"),
        Err(DispatchError::DeliveryNotPending {
            id: "DEL1".into(),
            status: DeliveryStatus::Assigned,
        })
    );
    assert_eq!(
        board.auto_assign("missing"),
        Err(DispatchError::DeliveryNotFound("missing".into()))
    );
    assert_eq!(
        board.assign("nobody", "DEL2"),
        Err(DispatchError::DriverNotFound("nobody".into()))
    );
}

#[rstest]
fn manual_assignment_may_stack_work(graph: RoadGraph) {
    let mut board = board_with(&graph);
    board.assign("D1", "DEL1").expect("manual assignment");
    board.assign("D1", "DEL2").expect("manual assignment");
    assert_eq!(board.driver("D1").map(Driver::workload), Some(2));
    let scorer = AssignmentScorer::new(&graph);
    let busy = board.driver("D1").expect("registered driver");
    assert_eq!(scorer.score_driver(busy, "A"), INELIGIBLE_SCORE);
}

#[rstest]
fn completing_releases_the_driver(graph: RoadGraph) {
    let mut board = board_with(&graph);
    board.assign("D1", "DEL1").expect("manual assignment");
    board.complete("DEL1").expect("known delivery");
    assert!(board.driver("D1").is_some_and(Driver::is_available));
    assert!(board.holder_of("DEL1").is_none());
    assert_eq!(
        board.complete("missing"),
        Err(DispatchError::DeliveryNotFound("missing".into()))
    );
}

#[rstest]
fn full_progress_completes_and_releases(graph: RoadGraph) {
    let mut board = board_with(&graph);
    board.assign("D2", "DEL2").expect("manual assignment");
    board.update_progress("DEL2", 70).expect("known delivery");
    assert!(board.holder_of("DEL2").is_some());
    board.update_progress("DEL2", 70).expect("known delivery");
    let delivery = board.delivery("DEL2").expect("registered delivery");
    assert_eq!(delivery.progress(), 100);
    assert_eq!(delivery.status(), DeliveryStatus::Completed);
    assert!(board.holder_of("DEL2").is_none());
}

#[rstest]
fn resetting_to_pending_frees_the_delivery(graph: RoadGraph) {
    let mut board = board_with(&graph);
    board.assign("D1", "DEL1").expect("manual assignment");
    board
        .update_status("DEL1", DeliveryStatus::InTransit)
        .expect("known delivery");
    assert!(board.holder_of("DEL1").is_some());
    board
        .update_status("DEL1", DeliveryStatus::Pending)
        .expect("known delivery");
    assert!(board.holder_of("DEL1").is_none());
    assert_eq!(board.auto_assign("DEL1"), Ok("D1".to_owned()));
}

#[rstest]
fn moving_drivers_is_validated(graph: RoadGraph) {
    let mut board = board_with(&graph);
    board.move_driver("D1", "E").expect("known driver and location");
    assert_eq!(board.driver("D1").map(Driver::location), Some("E"));
    assert_eq!(
        board.move_driver("D1", "Z"),
        Err(DispatchError::UnknownLocation("Z".into()))
    );
    assert_eq!(
        board.move_driver("nobody", "A"),
        Err(DispatchError::DriverNotFound("nobody".into()))
    );
}

#[rstest]
fn planned_routes_cover_active_held_deliveries(graph: RoadGraph) {
    let mut board = board_with(&graph);
    board.assign("D1", "DEL2").expect("manual assignment");
    board.assign("D2", "DEL3").expect("manual assignment");
    board
        .update_status("DEL3", DeliveryStatus::InTransit)
        .expect("known delivery");
    let routes = board.plan_active_routes();
    assert_eq!(routes.len(), 2);
    let first = routes.first().expect("route for DEL2");
    assert_eq!(first.delivery_id, "DEL2");
    assert_eq!(first.from, "A");
    assert_eq!(first.minutes, Some(15.0));
    let second = routes.get(1).expect("route for DEL3");
    assert_eq!(second.driver_id, "D2");
    assert_eq!(second.minutes, Some(9.0));
}

#[rstest]
fn unreachable_destinations_are_reported_without_a_path() {
    let mut graph = sample_graph();
    graph.add_node("Z", None).expect("valid node");
    let mut board = DispatchBoard::new(&graph);
    board
        .add_driver(Driver::new("D1", "Ana", "A"))
        .expect("valid driver");
    board
        .add_delivery(Delivery::new("DEL1", "Z"))
        .expect("valid delivery");
    board.auto_assign("DEL1").expect("idle driver");
    let routes = board.plan_active_routes();
    assert_eq!(routes.len(), 1);
    assert!(routes.iter().all(|route| route.path.is_none() && route.minutes.is_none()));
}

#[rstest]
fn summary_counts_drivers_and_deliveries(graph: RoadGraph) {
    let mut board = board_with(&graph);
    board.assign("D1", "DEL1").expect("manual assignment");
    board.assign("D1", "DEL2").expect("manual assignment");
    board.complete("DEL2").expect("known delivery");
    board
        .update_status("DEL3", DeliveryStatus::Delivered)
        .expect("known delivery");
    assert_eq!(
        board.summary(),
        BoardSummary {
            drivers: 2,
            available_drivers: 1,
            busy_drivers: 1,
            pending: 0,
            active: 1,
            delivered: 1,
            completed: 1,
        }
    );
}

#[rstest]
fn driver_errors_are_wrapped() {
    let err: DispatchError = DriverError::EmptyDeliveryId.into();
    assert_eq!(err, DispatchError::Driver(DriverError::EmptyDeliveryId));
}

struct AlwaysLast;

impl DriverScorer for AlwaysLast {
    fn score(&self, driver: &Driver, _pickup: &str) -> f64 {
        if driver.id() == "D2" { 1.0 } else { 0.0 }
    }
}

#[rstest]
fn custom_scorers_drive_auto_assignment(graph: RoadGraph) {
    let mut board = DispatchBoard::with_scorer(&graph, AlwaysLast);
    board
        .add_driver(Driver::new("D1", "Ana", "A"))
        .expect("valid driver");
    board
        .add_driver(Driver::new("D2", "Ben", "I"))
        .expect("valid driver");
    board
        .add_delivery(Delivery::new("DEL1", "A"))
        .expect("valid delivery");
    assert_eq!(board.auto_assign("DEL1"), Ok("D2".to_owned()));
}

#[rstest]
fn drivers_arriving_with_deliveries_are_rejected(graph: RoadGraph) {
    let mut board = DispatchBoard::new(&graph);
    let mut loaded = Driver::new("D1", "Ana", "A");
    loaded.assign_delivery("DEL1").expect("fresh driver");
    assert_eq!(
        board.add_driver(loaded),
        Err(DispatchError::DriverNotIdle {
            id: "D1".into(),
            held: 1,
        })
    );
    board
        .add_driver(Driver::new("D2", "Ben", "B"))
        .expect("idle driver");
    board
        .add_delivery(Delivery::new("DEL1", "C"))
        .expect("valid delivery");

    assert_eq!(board.auto_assign("DEL1"), Ok("D2".to_owned()));
    let holders: Vec<_> = board
        .drivers()
        .iter()
        .filter(|driver| driver.holds("DEL1"))
        .map(Driver::id)
        .collect();
    assert_eq!(holders, ["D2"]);
    board.complete("DEL1").expect("known delivery");
    assert!(board.drivers().iter().all(Driver::is_available));
}

#[rstest]
#[case(DeliveryStatus::Assigned)]
#[case(DeliveryStatus::InTransit)]
fn active_statuses_need_a_holder(graph: RoadGraph, #[case] status: DeliveryStatus) {
    let mut board = board_with(&graph);
    assert_eq!(
        board.update_status("DEL1", status),
        Err(DispatchError::DeliveryNotHeld {
            id: "DEL1".into(),
            status,
        })
    );
    assert_eq!(
        board.delivery("DEL1").map(Delivery::status),
        Some(DeliveryStatus::Pending)
    );
    assert!(board.plan_active_routes().is_empty());

    board.assign("D1", "DEL1").expect("manual assignment");
    board
        .update_status("DEL1", status)
        .expect("held deliveries accept active statuses");
    assert_eq!(board.plan_active_routes().len(), 1);
}

#[rstest]
fn status_updates_report_unknown_deliveries(graph: RoadGraph) {
    let mut board = board_with(&graph);
    assert_eq!(
        board.update_status("DEL9", DeliveryStatus::InTransit),
        Err(DispatchError::DeliveryNotFound("DEL9".into()))
    );
}
