use crate::gc::scan::WindowEnds;
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the ratio series as TSV.
///
/// Columns: `window_index`, `window_start`, `window_end` (0-based,
/// end-exclusive) and `value`. Undefined values are written as `NaN`.
///
/// * `seq_len`, `window_size`, `step` – the scan parameters `ratios` came
///   from; window coordinates are rebuilt from them.
///
/// Fails if `ratios` does not hold exactly one value per window.
pub fn write_series_tsv<W: Write>(
    out: &mut W,
    ratios: &[f64],
    seq_len: usize,
    window_size: usize,
    step: usize,
) -> Result<()> {
    let ends: Vec<usize> = WindowEnds::new(seq_len, window_size, step)?.collect();
    if ends.len() != ratios.len() {
        bail!(
            "series has {} values but the scan visits {} windows",
            ratios.len(),
            ends.len()
        );
    }
    writeln!(out, "window_index\twindow_start\twindow_end\tvalue")?;
    for (idx, (value, end)) in ratios.iter().zip(ends).enumerate() {
        writeln!(out, "{}\t{}\t{}\t{}", idx, end - window_size, end, value)?;
    }
    Ok(())
}

/// Write the ratio series to a TSV file at `path`
pub fn write_series_file(
    path: &Path,
    ratios: &[f64],
    seq_len: usize,
    window_size: usize,
    step: usize,
) -> Result<()> {
    let file = File::create(path).context(format!("Creating series file {:?}", path))?;
    let mut writer = BufWriter::new(file);
    write_series_tsv(&mut writer, ratios, seq_len, window_size, step)?;
    writer.flush().context("Flushing series file")?;
    Ok(())
}
