// NOTE: Ambiguity codes (N, S, ...) are counted as neither G nor C.

/// G and C tallies for one window
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GcCounts {
    pub g: u64,
    pub c: u64,
}

impl GcCounts {
    /// Number of G plus C symbols
    pub fn gc(&self) -> u64 {
        self.g + self.c
    }
}

/// Count G and C symbols in a byte slice (soft-masked lowercase included)
pub fn count_gc(seq: &[u8]) -> GcCounts {
    let mut counts = GcCounts::default();
    for &b in seq {
        match b {
            b'G' | b'g' => counts.g += 1,
            b'C' | b'c' => counts.c += 1,
            _ => (),
        }
    }
    counts
}
