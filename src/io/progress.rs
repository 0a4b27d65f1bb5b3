//! Batch progress display with a rolling window of per-colorway bars

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_LINES;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Stages a colorway goes through in a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Rendering the preview
    Render,
    /// Running the analysis engines
    Analyze,
    /// Writing files
    Export,
    /// All stages done
    Done,
}

impl Stage {
    /// Number of working stages before [`Stage::Done`]
    pub const COUNT: u64 = 3;

    /// Completed stage count
    pub const fn position(self) -> u64 {
        match self {
            Self::Render => 0,
            Self::Analyze => 1,
            Self::Export => 2,
            Self::Done => Self::COUNT,
        }
    }

    /// Short label shown next to the bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Render => "render",
            Self::Analyze => "analyze",
            Self::Export => "export",
            Self::Done => "done",
        }
    }
}

/// Coordinates progress display for a batch of colorways
///
/// Small batches get one bar per colorway. Larger batches add an overall
/// bar and only the most recent colorways keep a visible line.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    item_bars: Vec<ProgressBar>,
    /// (`name`, `stage`) of every colorway seen so far
    item_states: Vec<(String, Stage)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static ITEM_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:24} [{bar:20.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Colorways: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            item_bars: Vec::new(),
            item_states: Vec::new(),
        }
    }

    /// Create the bars for a batch of `item_count` colorways
    pub fn initialize(&mut self, item_count: usize) {
        if item_count > MAX_INDIVIDUAL_PROGRESS_LINES + 1 {
            let batch_bar = ProgressBar::new(item_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..item_count.min(MAX_INDIVIDUAL_PROGRESS_LINES) {
            let bar = ProgressBar::new(Stage::COUNT);
            bar.set_style(ITEM_STYLE.clone());
            self.item_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Move colorway `index` to `stage`
    pub fn advance(&mut self, index: usize, name: &str, stage: Stage) {
        if index >= self.item_states.len() {
            self.item_states.resize(index + 1, (String::new(), Stage::Render));
        }
        if let Some(state) = self.item_states.get_mut(index) {
            *state = (name.to_string(), stage);
        }
        if let (Stage::Done, Some(batch_bar)) = (stage, &self.batch_bar) {
            batch_bar.inc(1);
        }
        self.update_bars();
    }

    /// Number of colorways that reached [`Stage::Done`]
    pub fn completed(&self) -> usize {
        self.item_states
            .iter()
            .filter(|(_, stage)| *stage == Stage::Done)
            .count()
    }

    /// Clear all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All colorways processed");
        }
        let _ = self.multi_progress.clear();
    }

    // Shows the last N colorways that have started
    fn update_bars(&self) {
        let active: Vec<&(String, Stage)> = self
            .item_states
            .iter()
            .filter(|(name, _)| !name.is_empty())
            .collect();
        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_LINES);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar_index, (name, stage)) in visible.iter().enumerate() {
            if let Some(bar) = self.item_bars.get(bar_index) {
                bar.set_position(stage.position());
                bar.set_message(stage.label());
                let prefix = if *stage == Stage::Done {
                    format!("✓ {name}")
                } else {
                    name.clone()
                };
                bar.set_prefix(prefix);
            }
        }

        for bar_index in visible.len()..self.item_bars.len() {
            if let Some(bar) = self.item_bars.get(bar_index) {
                bar.set_position(0);
                bar.set_message("");
                bar.set_prefix("");
            }
        }
    }
}
