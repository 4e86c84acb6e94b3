//! Known schema patterns and the insight each one implies.

/// Pattern -> insight pair, matched as a case-insensitive substring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightRule {
    pub pattern: String,
    pub insight: String,
}

impl InsightRule {
    pub fn new(pattern: impl Into<String>, insight: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into().to_lowercase(),
            insight: insight.into(),
        }
    }

    /// `schema_lower` must already be lowercase
    pub fn matches(&self, schema_lower: &str) -> bool {
        schema_lower.contains(&self.pattern)
    }
}

/// Built-in catalog, in evaluation order.
///
/// "os-signpost" sits before "signpost" since the latter is a substring
/// of the former.
pub const DEFAULT_CATALOG: &[(&str, &str)] = &[
    (
        "time-profile",
        "CPU profiling data available - look for hot functions",
    ),
    (
        "allocations",
        "Memory allocation data - check for excessive allocations",
    ),
    ("leaks", "Memory leak detection - review any leaked objects"),
    (
        "hangs",
        "Hang/hitch data - identifies UI responsiveness issues",
    ),
    ("os-signpost", "OS-level signposts - system performance data"),
    ("signpost", "Signpost intervals - custom performance markers"),
    ("kdebug", "Kernel debug data - low-level system tracing"),
    ("metal-gpu", "Metal GPU data - graphics performance"),
    ("core-animation", "Core Animation commits - UI rendering"),
];

pub fn default_rules() -> Vec<InsightRule> {
    DEFAULT_CATALOG
        .iter()
        .map(|(pattern, insight)| InsightRule::new(*pattern, *insight))
        .collect()
}
