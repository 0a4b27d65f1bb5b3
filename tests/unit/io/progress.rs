//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use weavelab::io::configuration::MAX_INDIVIDUAL_PROGRESS_LINES;
    use weavelab::io::progress::{ProgressManager, Stage};

    // Tests stages advance in order up to the bar length
    // Verified by giving export the render position
    #[test]
    fn test_stage_positions() {
        let stages = [Stage::Render, Stage::Analyze, Stage::Export, Stage::Done];
        for pair in stages.windows(2) {
            assert!(pair[0].position() < pair[1].position());
        }
        assert_eq!(Stage::Done.position(), Stage::COUNT);
        assert_eq!(Stage::Analyze.label(), "analyze");
    }

    // Tests ProgressManager construction
    // Verified by setting wrong initial state
    #[test]
    fn test_progress_manager_new() {
        let mut pm = ProgressManager::new();

        pm.initialize(0);
        pm.finish();
        assert_eq!(pm.completed(), 0);

        pm.initialize(1);
        pm.advance(0, "navy_oxford", Stage::Render);
        pm.advance(0, "navy_oxford", Stage::Done);
        pm.finish();
        assert_eq!(pm.completed(), 1);
    }

    // Tests completion counts only colorways that reached done
    // Verified by counting every advanced colorway
    #[test]
    fn test_completed_count() {
        let mut pm = ProgressManager::default();
        pm.initialize(3);

        pm.advance(0, "a", Stage::Done);
        pm.advance(1, "b", Stage::Analyze);
        pm.advance(2, "c", Stage::Done);

        assert_eq!(pm.completed(), 2);
        pm.finish();
    }

    // Tests large batches use the rolling window without losing state
    // Verified by allocating one bar per colorway
    #[test]
    fn test_large_batch() {
        let count = MAX_INDIVIDUAL_PROGRESS_LINES * 3;
        let mut pm = ProgressManager::new();
        pm.initialize(count);

        for index in 0..count {
            let name = format!("colorway_{index}");
            pm.advance(index, &name, Stage::Render);
            pm.advance(index, &name, Stage::Export);
            pm.advance(index, &name, Stage::Done);
        }

        assert_eq!(pm.completed(), count);
        pm.finish();
    }

    // Tests out-of-order indices are tracked
    // Verified by ignoring indices past the current length
    #[test]
    fn test_sparse_indices() {
        let mut pm = ProgressManager::new();
        pm.initialize(4);
        pm.advance(3, "last", Stage::Done);

        assert_eq!(pm.completed(), 1);
        pm.finish();
    }
}
