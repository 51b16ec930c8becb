//! Tests for progress tracking across plan batches

#[cfg(test)]
mod tests {
    use std::path::Path;
    use vastuplan::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use vastuplan::io::progress::ProgressManager;

    // Tests the full lifecycle of a single plan
    // Verified by panicking on out-of-range plan indices
    #[test]
    fn test_single_plan_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);

        pm.start_plan(0, Path::new("house.toml"), 9);
        pm.advance(0, 6);
        pm.advance(0, 6);
        pm.complete_plan(0);
        pm.finish();
    }

    #[test]
    fn test_default_matches_new() {
        let mut pm = ProgressManager::default();
        pm.initialize(0);
        pm.finish();
    }

    // Tests batches larger than the number of individual bars
    #[test]
    fn test_large_batch() {
        let mut pm = ProgressManager::new();
        let plans = MAX_INDIVIDUAL_PROGRESS_BARS * 2 + 1;
        pm.initialize(plans);

        for index in 0..plans {
            pm.start_plan(index, Path::new(&format!("plan_{index}.toml")), 4);
            pm.advance(index, 4);
            pm.complete_plan(index);
        }
        pm.finish();
    }

    #[test]
    fn test_updates_for_unknown_plans_are_ignored() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);

        pm.advance(7, 3);
        pm.complete_plan(7);
        pm.start_plan(1, Path::new("late.toml"), 2);
        pm.finish();
    }
}
