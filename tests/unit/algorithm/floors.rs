//! Tests for per-floor planning

#[cfg(test)]
mod tests {
    use crate::support::plain;
    use vastuplan::algorithm::executor::{LayoutConfig, LayoutEngine};
    use vastuplan::algorithm::floors::FloorPlanner;
    use vastuplan::io::error::PlannerError;
    use vastuplan::rooms::kind::RoomType;
    use vastuplan::rooms::layout::PlacedRoom;
    use vastuplan::rooms::request::Floor;
    use vastuplan::spatial::plot::Plot;

    // Tests that each floor is laid out on its own, ground first
    // Verified by placing the first-floor room on top of the ground-floor room
    #[test]
    fn test_floors_are_independent() {
        let requests = [
            plain(RoomType::Bedroom, 10.0, 10.0).on_floor(Floor::First),
            plain(RoomType::Hall, 10.0, 10.0),
        ];

        let floors = FloorPlanner::default()
            .plan(&requests, Plot::new(30.0, 30.0), &[])
            .expect("plan");

        assert_eq!(floors.len(), 2);
        assert_eq!(floors[0].floor, Floor::Ground);
        assert_eq!(floors[1].floor, Floor::First);
        assert_eq!(floors[0].layout.rooms[0].room_type(), RoomType::Hall);
        assert_eq!(floors[1].layout.rooms[0].room_type(), RoomType::Bedroom);

        // Both start from an empty plot, so both scan to the origin
        assert_eq!(floors[0].layout.rooms[0].rect, floors[1].layout.rooms[0].rect);
    }

    #[test]
    fn test_empty_floors_are_skipped() {
        let requests = [plain(RoomType::Bedroom, 10.0, 10.0).on_floor(Floor::First)];
        let floors = FloorPlanner::default()
            .plan(&requests, Plot::new(30.0, 30.0), &[])
            .expect("plan");

        assert_eq!(floors.len(), 1);
        assert_eq!(floors[0].floor, Floor::First);
    }

    #[test]
    fn test_fixed_rooms_stay_on_their_floor() {
        let balcony = PlacedRoom::fixed(
            plain(RoomType::Balcony, 6.0, 6.0).on_floor(Floor::First),
            0.0,
            0.0,
        );
        let requests = [plain(RoomType::Hall, 10.0, 10.0)];

        let floors = FloorPlanner::default()
            .plan(&requests, Plot::new(30.0, 30.0), &[balcony])
            .expect("plan");

        assert_eq!(floors[0].layout.len(), 1);
        assert_eq!(floors[1].layout.len(), 1);
        assert_eq!(floors[1].layout.rooms[0].room_type(), RoomType::Balcony);
    }

    // Tests that strict failures name the floor they came from
    #[test]
    fn test_strict_error_is_tagged_with_floor() {
        let planner = FloorPlanner::new(LayoutEngine::new(LayoutConfig::default().with_strict(true)));
        let requests = [
            plain(RoomType::Hall, 10.0, 10.0),
            plain(RoomType::Bedroom, 30.0, 30.0).on_floor(Floor::First),
        ];

        let error = planner
            .plan(&requests, Plot::new(20.0, 20.0), &[])
            .expect_err("first floor exceeds the plot");

        assert!(matches!(
            error,
            PlannerError::LayoutInfeasible {
                floor: Some(Floor::First),
                ..
            }
        ));
        assert!(error.to_string().starts_with("First Floor is infeasible"));
    }

    #[test]
    fn test_callback_sees_every_floor() {
        let requests = [
            plain(RoomType::Hall, 10.0, 10.0),
            plain(RoomType::Bedroom, 10.0, 10.0).on_floor(Floor::First),
            plain(RoomType::Bathroom, 5.0, 5.0).on_floor(Floor::First),
        ];

        let mut seen = Vec::new();
        let planner = FloorPlanner::default();
        planner
            .plan_with(&requests, Plot::new(30.0, 30.0), &[], |floor| {
                seen.push((floor.floor, floor.layout.len()));
            })
            .expect("plan");

        assert_eq!(seen, vec![(Floor::Ground, 1), (Floor::First, 2)]);
        assert!(!planner.engine().config().strict);
    }
}
