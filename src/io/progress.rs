//! Multi-plan progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Display state of one plan file
#[derive(Debug, Clone, Default)]
struct PlanState {
    name: String,
    placed: usize,
    rooms: usize,
}

/// Coordinates progress display for batch operations
///
/// Shows one bar per plan (rooms placed out of rooms requested) for small
/// batches and adds a single batch bar for large ones. Only the most recent
/// plans keep a bar.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    plan_bars: Vec<ProgressBar>,
    plan_states: Vec<PlanState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PLAN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Plans: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            plan_bars: Vec::new(),
            plan_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on plan count
    pub fn initialize(&mut self, plan_count: usize) {
        // Batch bar only when the per-plan bars can't show everything
        if plan_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(plan_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..plan_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(0);
            pb.set_style(PLAN_STYLE.clone());
            self.plan_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Configure progress for a new plan
    pub fn start_plan(&mut self, index: usize, path: &Path, rooms: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.plan_states.len() {
            self.plan_states.resize(index + 1, PlanState::default());
        }
        if let Some(state) = self.plan_states.get_mut(index) {
            *state = PlanState {
                name,
                placed: 0,
                rooms,
            };
        }
        self.update_bars();
    }

    /// Record `rooms` more placed rooms for a plan
    pub fn advance(&mut self, index: usize, rooms: usize) {
        if let Some(state) = self.plan_states.get_mut(index) {
            state.placed = (state.placed + rooms).min(state.rooms);
        }
        self.update_bars();
    }

    /// Mark a plan as completed and update batch progress
    pub fn complete_plan(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.plan_states.get_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.placed = state.rooms;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All plans processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Point the bars at the most recent plans
    fn update_bars(&self) {
        let active: Vec<&PlanState> = self
            .plan_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, state) in self.plan_bars.iter().zip(visible) {
            bar.set_length(state.rooms as u64);
            bar.set_position(state.placed as u64);
            let width = state.rooms.to_string().len();
            bar.set_message(format!("{:>width$}/{} rooms", state.placed, state.rooms));
            bar.set_prefix(state.name.clone());
        }

        for bar in self.plan_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
