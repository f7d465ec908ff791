use crate::gc::error::{GcError, GcResult};

/// Check window/step parameters against a sequence length
///
/// * `window_size` must be positive and no longer than the sequence.
/// * `step` must be positive and no larger than `window_size`
///   (larger steps would leave unscanned gaps).
pub fn validate_params(seq_len: usize, window_size: usize, step: usize) -> GcResult<()> {
    if window_size == 0 || seq_len < window_size {
        return Err(GcError::WrongWindowSize);
    }
    if step == 0 || step > window_size {
        return Err(GcError::WrongStep);
    }
    Ok(())
}

/// Iterator over window end positions (exclusive), in scan order.
///
/// Starts at `window_size` and advances by `step` while the cursor is
/// strictly below the sequence length. A window ending exactly at the
/// sequence end is therefore never visited.
#[derive(Debug, Clone)]
pub struct WindowEnds {
    cursor: usize,
    step: usize,
    seq_len: usize,
}

impl WindowEnds {
    pub fn new(seq_len: usize, window_size: usize, step: usize) -> GcResult<Self> {
        validate_params(seq_len, window_size, step)?;
        Ok(WindowEnds {
            cursor: window_size,
            step,
            seq_len,
        })
    }
}

impl Iterator for WindowEnds {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.cursor >= self.seq_len {
            return None;
        }
        let end = self.cursor;
        self.cursor += self.step;
        Some(end)
    }
}

/// Slide a window over `seq` and apply `ratio_fn` to each window.
///
/// * `seq`         – full symbol sequence.
/// * `window_size` – window length in symbols.
/// * `step`        – distance between successive window ends.
/// * `ratio_fn`    – scalar function of one window.
///
/// Returns one value per visited window, ordered by window end.
pub fn scan<F>(seq: &[u8], window_size: usize, step: usize, ratio_fn: F) -> GcResult<Vec<f64>>
where
    F: Fn(&[u8]) -> f64,
{
    let ends = WindowEnds::new(seq.len(), window_size, step)?;
    let mut ratios = Vec::with_capacity(seq.len().saturating_sub(window_size) / step + 1);
    for end in ends {
        ratios.push(ratio_fn(&seq[end - window_size..end]));
    }
    Ok(ratios)
}
