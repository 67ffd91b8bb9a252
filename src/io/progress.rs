//! Terminal progress display for a synthesis run

use crate::algorithm::observer::SynthesisObserver;
use crate::algorithm::scheduler::Ring;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Shows ring growth as a progress bar
///
/// The bar advances once per ring; its message tracks the committed pixel
/// count against the canvas area.
pub struct ProgressManager {
    bar: ProgressBar,
    label: String,
    total_pixels: u64,
    committed: u64,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    /// Create a progress manager that never draws
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(Self::ring_style());
        Self {
            bar,
            label: String::new(),
            total_pixels: 0,
            committed: 0,
        }
    }

    /// Label the bar with the exemplar being synthesized from
    pub fn set_source(&mut self, path: &Path) {
        self.label = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_prefix(self.label.clone());
    }

    /// Rings completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total rings expected
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Pixels committed so far, seed included
    pub const fn committed(&self) -> u64 {
        self.committed
    }

    fn update_message(&self) {
        let max_width = self.total_pixels.to_string().len();
        self.bar.set_message(format!(
            "{:>max_width$}/{} px",
            self.committed, self.total_pixels
        ));
    }

    fn ring_style() -> ProgressStyle {
        let template =
            format!("{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] ring {{pos}}/{{len}} {{msg}}");
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }
}

impl SynthesisObserver for ProgressManager {
    fn synthesis_started(&mut self, width: u32, height: u32, ring_count: usize) {
        self.total_pixels = u64::from(width) * u64::from(height);
        self.committed = 1;
        self.bar.set_length(ring_count as u64);
        self.bar.set_position(0);
        self.update_message();
    }

    fn ring_started(&mut self, ring: &Ring) {
        if ring.size > 0 {
            self.bar.inc(1);
        }
    }

    fn pixel_committed(&mut self, _position: [i32; 2]) {
        self.committed += 1;
        // Message refresh every 256 commits
        if self.committed.is_multiple_of(256) {
            self.update_message();
        }
    }

    fn synthesis_finished(&mut self, committed: usize) {
        self.committed = committed as u64;
        if let Some(length) = self.bar.length() {
            self.bar.set_position(length);
        }
        self.update_message();
        self.bar.finish();
    }
}
