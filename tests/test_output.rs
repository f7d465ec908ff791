#[cfg(test)]
mod output_tests {
    use gcscan::cli::counters::ScanCounters;
    use gcscan::gc::plot::{chart_points, finite_segments, plot_series};
    use gcscan::gc::ratio::{gc_skew, RatioFunc};
    use gcscan::gc::scan::scan;
    use gcscan::gc::write::write_series_tsv;
    use tempfile::tempdir;

    #[test]
    fn nan_splits_segments() {
        let series = [0.1, 0.2, f64::NAN, f64::NAN, 0.3, f64::NAN, 0.4];
        let segments = finite_segments(&series);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], vec![(0, 0.1), (1, 0.2)]);
        assert_eq!(segments[1], vec![(4, 0.3)]);
        assert_eq!(segments[2], vec![(6, 0.4)]);
    }

    #[test]
    fn chart_points_clamp_to_y_range() {
        let y_range = RatioFunc::GcSkew.spec().y_range;
        let series = [0.9, -0.9, 0.25, f64::NAN, 1.0];
        let segments = chart_points(&series, y_range);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], vec![(0, 0.5), (1, -0.5), (2, 0.25)]);
        assert_eq!(segments[1], vec![(4, 0.5)]);
    }

    #[test]
    fn chart_points_keep_in_range_values() {
        let y_range = RatioFunc::GcRatio.spec().y_range;
        let segments = chart_points(&[0.0, 0.5, 1.0], y_range);
        assert_eq!(segments, vec![vec![(0, 0.0), (1, 0.5), (2, 1.0)]]);
    }

    #[test]
    fn all_nan_has_no_segments() {
        assert!(finite_segments(&[f64::NAN, f64::NAN]).is_empty());
        assert!(finite_segments(&[]).is_empty());
    }

    #[test]
    fn counters_track_undefined_windows() -> anyhow::Result<()> {
        // Last two windows are pure A/T and have no skew
        let seq = b"GGGGATATATATCCCC";
        let ratios = scan(seq, 4, 4, gc_skew)?;
        assert_eq!(ratios.len(), 3);
        let counters = ScanCounters::from_series(&ratios);
        assert_eq!(
            counters,
            ScanCounters {
                windows: 3,
                undefined: 2
            }
        );
        Ok(())
    }

    #[test]
    fn tsv_lists_window_coordinates() -> anyhow::Result<()> {
        let seq = b"ACGTACGTAC";
        let ratios = scan(seq, 4, 2, |w| RatioFunc::GcRatio.apply(w))?;
        let mut buf = Vec::new();
        write_series_tsv(&mut buf, &ratios, seq.len(), 4, 2)?;
        let text = String::from_utf8(buf)?;
        assert_eq!(
            text,
            "window_index\twindow_start\twindow_end\tvalue\n\
             0\t0\t4\t0.5\n\
             1\t2\t6\t0.5\n\
             2\t4\t8\t0.5\n"
        );
        Ok(())
    }

    #[test]
    fn tsv_rejects_series_of_wrong_length() {
        let mut buf = Vec::new();
        // 10 bp, w=4, s=2 visits three windows
        let res = write_series_tsv(&mut buf, &[0.5, 0.5], 10, 4, 2);
        assert!(res.is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn chart_is_written_as_svg() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("skew.svg");
        let series = [0.2, -0.1, f64::NAN, 0.9, -0.3];
        plot_series(&series, RatioFunc::GcSkew, &path)?;
        let svg = std::fs::read_to_string(&path)?;
        assert!(svg.contains("<svg"));
        assert!(svg.contains("GC calculations: GC skew (G-C)/(G+C)"));
        Ok(())
    }

    #[test]
    fn empty_series_still_renders() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("empty.svg");
        plot_series(&[], RatioFunc::GcRatio, &path)?;
        assert!(path.exists());
        Ok(())
    }
}
