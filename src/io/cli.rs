//! Command-line interface for batch processing plan files

use crate::algorithm::executor::{LayoutConfig, LayoutEngine, LayoutMode};
use crate::algorithm::floors::FloorPlanner;
use crate::compliance::report::{PlanReport, fill_missing_directions};
use crate::compliance::zodiac::{ZodiacVastu, lookup_for};
use crate::io::configuration::{
    DEFAULT_PIXELS_PER_FOOT, MAX_PIXELS_PER_FOOT, PLAN_EXTENSION, REPORT_SUFFIX,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::export::export_report;
use crate::io::image::export_layout_as_png;
use crate::io::plan::Plan;
use crate::io::progress::ProgressManager;
use crate::rooms::request::Floor;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "vastuplan")]
#[command(
    author,
    version,
    about = "Lay out rooms on a plot following Vastu direction guidelines"
)]
/// Command-line arguments for the floor-plan tool
// Independent output switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Plan file (.toml) or directory of plan files to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Placement strategy, overriding the plan's `mode`
    #[arg(short, long, value_enum)]
    pub mode: Option<LayoutMode>,

    /// Fail instead of accepting overlapping fallback placements
    #[arg(short, long)]
    pub strict: bool,

    /// Raster scale in pixels per foot
    #[arg(
        short = 'p',
        long,
        default_value_t = DEFAULT_PIXELS_PER_FOOT,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PIXELS_PER_FOOT))
    )]
    pub scale: u32,

    /// Skip PNG export
    #[arg(long)]
    pub no_image: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process plans even if a report exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log placement decisions
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if plans with an existing report should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch processing of plan files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process plans according to CLI arguments
    ///
    /// Returns the number of plans processed.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or plan processing fails
    pub fn process(&mut self) -> Result<usize> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(0);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(files.len())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_plan_file(target) {
                Ok(self
                    .should_process_file(target)
                    .then(|| target.clone())
                    .into_iter()
                    .collect())
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"file must be a .toml plan",
                ))
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target)
                .map_err(|e| file_system_error(target, "read directory", e))?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|e| file_system_error(target, "read directory", e))?
                    .path();
                if is_plan_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a plan file or directory",
            ))
        }
    }

    fn should_process_file(&self, plan_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if report_path(plan_path).exists() {
            tracing::info!(plan = %plan_path.display(), "skipping, report exists");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, plan_path: &Path, index: usize) -> Result<()> {
        let plan = Plan::load(plan_path)?;

        let profile = plan
            .zodiac
            .map(ZodiacVastu::for_sign)
            .transpose()?
            .map(|lookup| lookup.profile().clone());
        let lookup = lookup_for(profile.as_ref());

        let mut requests = plan.rooms.clone();
        if plan.auto_directions {
            let filled = fill_missing_directions(&mut requests, lookup.as_ref());
            tracing::debug!(filled, "filled missing directions");
        }

        let config = LayoutConfig {
            max_rooms_per_row: plan.max_rooms_per_row,
            ..LayoutConfig::default()
        }
        .with_mode(self.cli.mode.unwrap_or(plan.mode))
        .with_strict(self.cli.strict);
        let planner = FloorPlanner::new(LayoutEngine::new(config));

        let total_rooms = requests.len() + plan.fixed.len();
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_plan(index, plan_path, total_rooms);
        }

        let progress = &mut self.progress_manager;
        let floors = planner.plan_with(&requests, plan.plot, &plan.fixed, |floor| {
            if let Some(pm) = progress.as_mut() {
                pm.advance(index, floor.layout.len());
            }
        })?;

        let report = PlanReport::build(
            &requests,
            plan.plot,
            &floors,
            lookup.as_ref(),
            profile.as_ref(),
        );
        export_report(&report, &report_path(plan_path))?;

        if !self.cli.no_image {
            for floor in &floors {
                export_layout_as_png(
                    &floor.layout,
                    self.cli.scale,
                    &image_path(plan_path, floor.floor),
                )?;
            }
        }

        tracing::info!(
            plan = %plan_path.display(),
            score = report.vastu_score,
            floors = floors.len(),
            overlaps = report.overlap_count(),
            degraded = report.degraded_count(),
            "plan processed"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_plan(index);
        }

        Ok(())
    }
}

fn is_plan_file(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(PLAN_EXTENSION)
}

fn sibling_path(plan_path: &Path, suffix: &str) -> PathBuf {
    let stem = plan_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}", stem.to_string_lossy());

    if let Some(parent) = plan_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

/// Where the JSON report of a plan is written
pub fn report_path(plan_path: &Path) -> PathBuf {
    sibling_path(plan_path, &format!("{REPORT_SUFFIX}.json"))
}

/// Where the raster of one floor of a plan is written
pub fn image_path(plan_path: &Path, floor: Floor) -> PathBuf {
    sibling_path(plan_path, &format!("_{}.png", floor.slug()))
}
