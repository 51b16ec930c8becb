//! Tests for command-line parsing and batch processing of plan files

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use vastuplan::algorithm::executor::LayoutMode;
    use vastuplan::io::cli::{Cli, FileProcessor, image_path, report_path};
    use vastuplan::io::configuration::DEFAULT_PIXELS_PER_FOOT;
    use vastuplan::io::error::PlannerError;
    use vastuplan::rooms::request::Floor;

    const HOUSE: &str = r#"
        zodiac = "leo"

        [plot]
        width = 40.0
        height = 40.0

        [[rooms]]
        type = "kitchen"
        direction = "southeast"

        [[rooms]]
        type = "bedroom"
        count = 2
        direction = "southwest"

        [[rooms]]
        type = "balcony"
        floor = "first"
        direction = "north"
    "#;

    fn quiet_cli(target: &Path, extra: &[&str]) -> Cli {
        let mut args = vec!["vastuplan", "--quiet"];
        args.extend_from_slice(extra);
        let target = target.to_string_lossy().to_string();
        Cli::parse_from(args.into_iter().map(String::from).chain([target]))
    }

    // Tests CLI parsing with only the required target
    // Verified by changing default values
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["vastuplan", "house.toml"]);

        assert_eq!(cli.target, PathBuf::from("house.toml"));
        assert_eq!(cli.mode, None);
        assert_eq!(cli.scale, DEFAULT_PIXELS_PER_FOOT);
        assert!(!cli.strict);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
    }

    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "vastuplan",
            "plans",
            "--mode",
            "rows",
            "--strict",
            "--scale",
            "4",
            "--no-image",
            "--quiet",
            "--no-skip",
            "--verbose",
        ]);

        assert_eq!(cli.mode, Some(LayoutMode::Rows));
        assert!(cli.strict);
        assert_eq!(cli.scale, 4);
        assert!(cli.no_image);
        assert!(!cli.should_show_progress());
        assert!(!cli.skip_existing());
        assert!(cli.verbose);
    }

    // Tests the scale bounds are enforced at parse time
    #[test]
    fn test_cli_rejects_out_of_range_scale() {
        assert!(Cli::try_parse_from(["vastuplan", "house.toml", "-p", "0"]).is_err());
        assert!(Cli::try_parse_from(["vastuplan", "house.toml", "-p", "101"]).is_err());
        assert!(Cli::try_parse_from(["vastuplan", "house.toml", "-m", "spiral"]).is_err());
    }

    #[test]
    fn test_output_paths() {
        let plan = Path::new("plans/house.toml");
        assert_eq!(report_path(plan), PathBuf::from("plans/house_report.json"));
        assert_eq!(
            image_path(plan, Floor::First),
            PathBuf::from("plans/house_first.png")
        );
    }

    // Tests a full run writes the report and one raster per floor
    // Verified by dropping the per-floor image loop
    #[test]
    fn test_process_single_plan() {
        let temp_dir = TempDir::new().expect("temp dir");
        let plan = temp_dir.path().join("house.toml");
        fs::write(&plan, HOUSE).expect("write plan");

        let mut processor = FileProcessor::new(quiet_cli(&plan, &["-p", "2"]));
        assert_eq!(processor.process().expect("process"), 1);

        let report = fs::read_to_string(report_path(&plan)).expect("report written");
        let json: serde_json::Value = serde_json::from_str(&report).expect("valid json");
        assert_eq!(json["zodiac"]["sign"], "leo");
        assert_eq!(json["assessed_rooms"], 4);
        assert_eq!(json["floors"].as_array().map(Vec::len), Some(2));

        let ground = image::open(image_path(&plan, Floor::Ground)).expect("ground raster");
        assert_eq!((ground.width(), ground.height()), (80, 80));
        assert!(image_path(&plan, Floor::First).exists());
    }

    // Tests that plans with an existing report are skipped unless --no-skip
    #[test]
    fn test_directory_skip_logic() {
        let temp_dir = TempDir::new().expect("temp dir");
        fs::write(temp_dir.path().join("a.toml"), HOUSE).expect("write plan");
        fs::write(temp_dir.path().join("b.toml"), HOUSE).expect("write plan");
        fs::write(temp_dir.path().join("notes.txt"), "ignored").expect("write notes");
        fs::write(temp_dir.path().join("b_report.json"), "{}").expect("write report");

        let mut processor = FileProcessor::new(quiet_cli(temp_dir.path(), &["--no-image"]));
        assert_eq!(processor.process().expect("process"), 1);
        assert!(temp_dir.path().join("a_report.json").exists());
        assert!(!temp_dir.path().join("a_ground.png").exists());

        let mut again = FileProcessor::new(quiet_cli(temp_dir.path(), &["--no-image"]));
        assert_eq!(again.process().expect("process"), 0);

        let mut forced =
            FileProcessor::new(quiet_cli(temp_dir.path(), &["--no-image", "--no-skip"]));
        assert_eq!(forced.process().expect("process"), 2);
    }

    #[test]
    fn test_process_rejects_bad_targets() {
        let temp_dir = TempDir::new().expect("temp dir");

        let missing = temp_dir.path().join("missing.toml");
        let result = FileProcessor::new(quiet_cli(&missing, &[])).process();
        assert!(matches!(result, Err(PlannerError::InvalidParameter { .. })));

        let notes = temp_dir.path().join("notes.txt");
        fs::write(&notes, "not a plan").expect("write notes");
        let result = FileProcessor::new(quiet_cli(&notes, &[])).process();
        assert!(matches!(result, Err(PlannerError::InvalidParameter { .. })));
    }

    // Tests that --strict turns an over-full plan into an error
    #[test]
    fn test_strict_run_fails_on_crowded_plan() {
        let temp_dir = TempDir::new().expect("temp dir");
        let plan = temp_dir.path().join("crowded.toml");
        fs::write(
            &plan,
            r#"
                [plot]
                width = 20.0
                height = 20.0

                [[rooms]]
                type = "hall"
                width = 15.0
                height = 15.0

                [[rooms]]
                type = "bedroom"
                width = 15.0
                height = 15.0
            "#,
        )
        .expect("write plan");

        let result = FileProcessor::new(quiet_cli(&plan, &["--strict", "--no-image"])).process();
        assert!(matches!(
            result,
            Err(PlannerError::LayoutInfeasible {
                floor: Some(Floor::Ground),
                ..
            })
        ));
        assert!(!report_path(&plan).exists());
    }
}
