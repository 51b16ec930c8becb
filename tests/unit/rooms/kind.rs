//! Tests for the room-type catalog

#[cfg(test)]
mod tests {
    use vastuplan::rooms::kind::{PLACEMENT_PRIORITY, RoomType};

    // Tests that priority() agrees with the position in the priority list
    // Verified by swapping kitchen and bedroom priorities
    #[test]
    fn test_priority_matches_priority_list() {
        for (position, room_type) in PLACEMENT_PRIORITY.iter().enumerate() {
            assert_eq!(room_type.priority(), position, "{room_type}");
        }
        assert!(RoomType::Kitchen.priority() < RoomType::Dining.priority());
    }

    // Tests that the priority list ranks every room type exactly once
    #[test]
    fn test_priority_list_covers_every_type() {
        let mut ranks: Vec<usize> = RoomType::ALL.iter().map(|room_type| room_type.priority()).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (0..RoomType::ALL.len()).collect::<Vec<_>>());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_catalog_areas() {
        assert_eq!(RoomType::Hall.default_area(), 200.0);
        assert_eq!(RoomType::Bedroom.default_area(), 150.0);
        assert_eq!(RoomType::Toilet.default_area(), 40.0);
        let total: f64 = RoomType::ALL.iter().map(|r| r.default_area()).sum();
        assert_eq!(total, 980.0);
    }

    // Tests that avoidance lists are mutual where the catalog says so
    #[test]
    fn test_kitchen_and_toilet_avoid_each_other() {
        assert!(RoomType::Kitchen.default_avoided_neighbors().contains(&RoomType::Toilet));
        assert!(RoomType::Toilet.default_avoided_neighbors().contains(&RoomType::Kitchen));
        assert_eq!(RoomType::Kitchen.default_preferred_neighbors(), &[RoomType::Dining]);
        assert!(RoomType::Hall.default_preferred_neighbors().is_empty());
    }

    #[test]
    fn test_labels_and_serde_names() {
        assert_eq!(RoomType::StoreRoom.to_string(), "Store Room");
        assert_eq!(RoomType::Entrance.label(), "Main Entrance");

        let parsed: Vec<RoomType> =
            serde_json::from_str(r#"["store_room", "storeroom", "main_entrance", "living_room"]"#)
                .unwrap();
        assert_eq!(
            parsed,
            vec![
                RoomType::StoreRoom,
                RoomType::StoreRoom,
                RoomType::Entrance,
                RoomType::Hall
            ]
        );
    }

    #[test]
    fn test_colors_are_opaque_and_distinct() {
        for (i, a) in RoomType::ALL.iter().enumerate() {
            assert_eq!(a.color()[3], 0xff);
            for b in RoomType::ALL.iter().skip(i + 1) {
                assert_ne!(a.color(), b.color(), "{a} and {b} share a colour");
            }
        }
    }
}
