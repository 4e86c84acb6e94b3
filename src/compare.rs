//! Size comparison of two trace bundles.
//!
//! `xctrace` has no compare command, so this only reports how the bundle
//! sizes differ and how to compare them by hand in Instruments.

use crate::utils::bundle::bundle_size;
use crate::utils::config::bytes_to_mb;
use crate::utils::error::TraceError;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleSize {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub size_mb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceComparison {
    pub baseline: BundleSize,
    pub current: BundleSize,
    pub size_diff_bytes: i64,
    pub size_diff_mb: f64,

    /// Relative to the baseline; 0 when the baseline is empty
    pub size_diff_percent: f64,

    pub recommendation: String,
    pub manual_steps: Vec<String>,
}

/// Compare the sizes of two existing bundles
pub fn compare_traces(baseline: &Path, current: &Path) -> Result<TraceComparison, TraceError> {
    let baseline = measure(baseline)?;
    let current = measure(current)?;

    let size_diff_bytes = current.size_bytes as i64 - baseline.size_bytes as i64;
    let size_diff_percent = if baseline.size_bytes > 0 {
        (size_diff_bytes as f64 / baseline.size_bytes as f64 * 1000.0).round() / 10.0
    } else {
        0.0
    };

    let manual_steps = vec![
        format!("1. Open baseline: open '{}'", baseline.path.display()),
        format!("2. Open current: open '{}'", current.path.display()),
        "3. In Instruments, select matching time ranges".to_string(),
        "4. Compare call trees, allocations, or other metrics".to_string(),
    ];

    Ok(TraceComparison {
        size_diff_mb: ((current.size_mb - baseline.size_mb) * 100.0).round() / 100.0,
        baseline,
        current,
        size_diff_bytes,
        size_diff_percent,
        recommendation: "For detailed comparison, open both traces in Instruments.app \
                         side-by-side. Use File > Open to load each trace, then compare \
                         the same time intervals."
            .to_string(),
        manual_steps,
    })
}

fn measure(path: &Path) -> Result<BundleSize, TraceError> {
    if !path.exists() {
        return Err(TraceError::NotFound(format!(
            "Trace not found: {}",
            path.display()
        )));
    }
    let size_bytes = bundle_size(path)?;
    Ok(BundleSize {
        path: path.to_path_buf(),
        size_bytes,
        size_mb: bytes_to_mb(size_bytes),
    })
}
