// ============================================================
// PREVIEW SAMPLER
// ============================================================
// Bounded prefix of rows for display

use crate::domain::dataset::Row;

pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// Preview sampler
#[derive(Debug, Clone, Copy)]
pub struct PreviewSampler {
    limit: usize,
}

impl Default for PreviewSampler {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PREVIEW_LIMIT,
        }
    }
}

impl PreviewSampler {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// First `limit` rows, in original order
    pub fn sample<'a>(&self, rows: &'a [Row]) -> &'a [Row] {
        Self::sample_with_limit(rows, self.limit)
    }

    /// Same as [`sample`](Self::sample) with an explicit limit, clamped to `rows.len()`
    pub fn sample_with_limit(rows: &[Row], limit: usize) -> &[Row] {
        &rows[..limit.min(rows.len())]
    }
}
