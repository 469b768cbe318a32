//! Pipeline configuration.

/// Recognition thresholds shared by the default recognizers and the pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SketchCfg {
    /// Strokes with fewer samples than this score `1.0` as a dot.
    pub dot_max_samples: usize,
    /// Strokes with fewer samples than this cannot score as a line.
    pub line_min_samples: usize,
    /// Minimum number of distinct lines in a closed region.
    pub min_loop_lines: usize,
    /// Only the most recent pending shapes are offered to item recognizers.
    pub max_pending_shapes: usize,
}

impl Default for SketchCfg {
    fn default() -> Self {
        Self {
            dot_max_samples: 4,
            line_min_samples: 4,
            min_loop_lines: 3,
            max_pending_shapes: 64,
        }
    }
}
