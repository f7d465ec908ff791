use crate::gc::counts::count_gc;
use crate::gc::error::GcError;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Display and axis settings bundled with each ratio function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioSpec {
    /// Name used on the command line
    pub name: &'static str,
    /// Chart title fragment
    pub title: &'static str,
    /// Y-axis (min, max)
    pub y_range: (f64, f64),
    pub y_label: &'static str,
}

/// The fixed set of window ratio functions.
///
/// Dispatch and CLI choices both go through this enum, so adding a
/// variant forces both `spec()` and `apply()` to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RatioFunc {
    /// (G+C)/(window size)
    #[value(name = "gc_ratio")]
    GcRatio,
    /// (G-C)/(G+C)
    #[value(name = "gc_skew")]
    GcSkew,
}

impl RatioFunc {
    pub const ALL: [RatioFunc; 2] = [RatioFunc::GcRatio, RatioFunc::GcSkew];

    pub fn spec(&self) -> RatioSpec {
        match self {
            RatioFunc::GcRatio => RatioSpec {
                name: "gc_ratio",
                title: "GC ratio (G+C)/(G+C+A+T)",
                y_range: (0.0, 1.0),
                y_label: "GC ratio",
            },
            RatioFunc::GcSkew => RatioSpec {
                name: "gc_skew",
                title: "GC skew (G-C)/(G+C)",
                y_range: (-0.5, 0.5),
                y_label: "GC skew",
            },
        }
    }

    /// Evaluate the function on a single window
    pub fn apply(&self, window: &[u8]) -> f64 {
        match self {
            RatioFunc::GcRatio => gc_ratio(window),
            RatioFunc::GcSkew => gc_skew(window),
        }
    }
}

impl fmt::Display for RatioFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}

impl FromStr for RatioFunc {
    type Err = GcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RatioFunc::ALL
            .into_iter()
            .find(|f| f.spec().name == s)
            .ok_or_else(|| GcError::WrongFunction(s.to_string()))
    }
}

/// Fraction of the window that is G or C.
///
/// Returns NaN for an empty window.
pub fn gc_ratio(window: &[u8]) -> f64 {
    if window.is_empty() {
        return f64::NAN;
    }
    count_gc(window).gc() as f64 / window.len() as f64
}

/// Normalized G/C imbalance of the window.
///
/// Windows without any G or C have no defined skew and yield NaN;
/// consumers must treat NaN as a gap.
pub fn gc_skew(window: &[u8]) -> f64 {
    let counts = count_gc(window);
    let total = counts.gc();
    if total == 0 {
        return f64::NAN;
    }
    (counts.g as f64 - counts.c as f64) / total as f64
}
