/// Summary of one scan
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScanCounters {
    pub windows: u64,
    /// Windows whose ratio is undefined (NaN)
    pub undefined: u64,
}

impl ScanCounters {
    pub fn from_series(ratios: &[f64]) -> Self {
        let mut counters = ScanCounters::default();
        for v in ratios {
            counters.windows += 1;
            if v.is_nan() {
                counters.undefined += 1;
            }
        }
        counters
    }
}
