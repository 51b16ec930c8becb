//! Tests for the zodiac table and sign-specific lookups

#[cfg(test)]
mod tests {
    use vastuplan::compliance::rules::{ComplianceLookup, Rating, StandardVastu};
    use vastuplan::compliance::zodiac::{ZodiacSign, ZodiacTable, ZodiacVastu, lookup_for};
    use vastuplan::io::error::PlannerError;
    use vastuplan::rooms::kind::RoomType;
    use vastuplan::spatial::compass::Direction;

    // Tests that the embedded table covers every sign and every room type
    #[test]
    fn test_builtin_table_is_complete() {
        let table = ZodiacTable::builtin().expect("embedded table parses");
        assert_eq!(table.profiles().len(), 12);

        for sign in ZodiacSign::ALL {
            let profile = table.profile(sign).expect("every sign has a profile");
            for room in RoomType::ALL {
                assert!(
                    !profile.directions.get(room).is_empty(),
                    "{sign} has no directions for {room}"
                );
            }
        }
    }

    #[test]
    fn test_leo_profile() {
        let lookup = ZodiacVastu::for_sign(ZodiacSign::Leo).expect("leo");
        let profile = lookup.profile();

        assert_eq!(profile.name, "Leo (Simha)");
        assert_eq!(profile.ruler, "Sun");
        assert_eq!(
            lookup.recommended(RoomType::Kitchen),
            vec![Direction::SouthEast, Direction::East]
        );
    }

    // Tests that sign directions win and everything else is capped at neutral
    // Verified by letting standard favorable verdicts through uncapped
    #[test]
    fn test_sign_refines_standard_rules() {
        let lookup = ZodiacVastu::for_sign(ZodiacSign::Leo).expect("leo");

        // East is unfavorable for a kitchen by the standard table
        let listed = lookup.assess(RoomType::Kitchen, Direction::East);
        assert_eq!(listed.rating, Rating::Favorable);
        assert_eq!(listed.advice, "East suits a Kitchen for Leo (Simha).");

        // Northwest is favorable for a toilet by the standard table
        let capped = lookup.assess(RoomType::Toilet, Direction::NorthWest);
        assert_eq!(capped.rating, Rating::Neutral);

        let unlisted = lookup.assess(RoomType::Kitchen, Direction::North);
        assert_eq!(unlisted.rating, Rating::Unfavorable);
        assert_eq!(
            unlisted.advice,
            StandardVastu.assess(RoomType::Kitchen, Direction::North).advice
        );
    }

    #[test]
    fn test_parse_rejects_incomplete_table() {
        let text = r#"
            [[signs]]
            sign = "aries"
            name = "Aries"
            element = "Fire"
            ruler = "Mars"
            description = ""
            [signs.directions]
            main_entrance = ["east"]
        "#;

        match ZodiacTable::parse(text) {
            Err(PlannerError::DataTable { table, reason }) => {
                assert_eq!(table, "zodiac");
                assert!(reason.contains("Taurus"), "{reason}");
            }
            other => panic!("expected DataTable error, got {other:?}"),
        }

        assert!(matches!(
            ZodiacTable::parse("signs = 3"),
            Err(PlannerError::DataTable { .. })
        ));
    }

    #[test]
    fn test_lookup_for_profile() {
        let standard = lookup_for(None);
        assert_eq!(
            standard.assess(RoomType::Toilet, Direction::NorthWest).rating,
            Rating::Favorable
        );

        let table = ZodiacTable::builtin().expect("embedded table parses");
        let aries = table.profile(ZodiacSign::Aries);
        let zodiac = lookup_for(aries);
        assert_eq!(
            zodiac.recommended(RoomType::Entrance),
            vec![Direction::East, Direction::North, Direction::NorthEast]
        );
    }

    #[test]
    fn test_sign_names_parse_lowercase() {
        let sign: ZodiacSign = serde_json::from_str("\"sagittarius\"").expect("lowercase sign");
        assert_eq!(sign, ZodiacSign::Sagittarius);
        assert_eq!(sign.to_string(), "Sagittarius");
    }
}
