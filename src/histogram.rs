//! Histogram artifacts for the corpus reports.
//!
//! Rendering sits behind [`HistogramSink`] so workflows and tests can swap
//! the artifact format; the default sink writes a self-contained SVG.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::constants::report::HISTOGRAM_BINS;
use crate::errors::DatasetError;

/// Renders one distribution to an artifact on disk.
pub trait HistogramSink {
    /// Render `values` under `title` to `out_path`.
    fn render(&self, title: &str, values: &[f64], out_path: &Path) -> Result<(), DatasetError>;
}

/// Fixed-bin SVG histogram writer.
#[derive(Clone, Debug)]
pub struct SvgHistogram {
    bins: usize,
    width: u32,
    height: u32,
}

impl Default for SvgHistogram {
    fn default() -> Self {
        Self {
            bins: HISTOGRAM_BINS,
            width: 640,
            height: 480,
        }
    }
}

impl SvgHistogram {
    /// Override the bin count.
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins.max(1);
        self
    }

    /// Bucket `values` into `self.bins` equal-width bins over `[min, max]`.
    fn bin(&self, values: &[f64]) -> (Vec<usize>, f64, f64) {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mut counts = vec![0usize; self.bins];
        let span = max - min;
        for &value in values {
            let index = if span == 0.0 {
                0
            } else {
                // The maximum value lands in the last bin, not past it.
                (((value - min) / span) * self.bins as f64).min(self.bins as f64 - 1.0) as usize
            };
            counts[index] += 1;
        }
        (counts, min, max)
    }
}

impl HistogramSink for SvgHistogram {
    fn render(&self, title: &str, values: &[f64], out_path: &Path) -> Result<(), DatasetError> {
        if values.is_empty() {
            return Err(DatasetError::EmptyInput);
        }
        let (counts, min, max) = self.bin(values);
        let tallest = counts.iter().copied().max().unwrap_or(1).max(1);

        let margin = 48.0;
        let plot_w = self.width as f64 - 2.0 * margin;
        let plot_h = self.height as f64 - 2.0 * margin;
        let bar_w = plot_w / self.bins as f64;

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\">\n",
            self.width, self.height, self.width, self.height
        ));
        svg.push_str(&format!(
            "  <rect width=\"{}\" height=\"{}\" fill=\"white\"/>\n",
            self.width, self.height
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"24\" text-anchor=\"middle\" font-family=\"sans-serif\" \
             font-size=\"16\">{}</text>\n",
            self.width as f64 / 2.0,
            title
        ));
        for (index, &count) in counts.iter().enumerate() {
            let bar_h = plot_h * count as f64 / tallest as f64;
            let x = margin + index as f64 * bar_w;
            let y = margin + (plot_h - bar_h);
            svg.push_str(&format!(
                "  <rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{:.1}\" height=\"{bar_h:.1}\" \
                 fill=\"steelblue\" stroke=\"white\"/>\n",
                bar_w
            ));
        }
        // Axis line plus min/max labels are enough to read the artifact.
        svg.push_str(&format!(
            "  <line x1=\"{margin}\" y1=\"{y}\" x2=\"{x2}\" y2=\"{y}\" stroke=\"black\"/>\n",
            y = margin + plot_h,
            x2 = margin + plot_w
        ));
        svg.push_str(&format!(
            "  <text x=\"{margin}\" y=\"{y}\" font-family=\"sans-serif\" font-size=\"12\">\
             {min}</text>\n",
            y = margin + plot_h + 20.0
        ));
        svg.push_str(&format!(
            "  <text x=\"{x}\" y=\"{y}\" text-anchor=\"end\" font-family=\"sans-serif\" \
             font-size=\"12\">{max}</text>\n",
            x = margin + plot_w,
            y = margin + plot_h + 20.0
        ));
        svg.push_str("</svg>\n");

        fs::write(out_path, svg)?;
        debug!(path = %out_path.display(), samples = values.len(), "wrote histogram");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn bins_cover_the_full_range() {
        let hist = SvgHistogram::default().with_bins(4);
        let values = [0.0, 1.0, 2.0, 3.0, 4.0];
        let (counts, min, max) = hist.bin(&values);
        assert_eq!(min, 0.0);
        assert_eq!(max, 4.0);
        assert_eq!(counts.iter().sum::<usize>(), values.len());
        // The maximum value belongs to the last bin.
        assert_eq!(counts[3], 2);
    }

    #[test]
    fn identical_values_collapse_into_one_bin() {
        let hist = SvgHistogram::default();
        let (counts, _, _) = hist.bin(&[7.0, 7.0, 7.0]);
        assert_eq!(counts[0], 3);
        assert_eq!(counts[1..].iter().sum::<usize>(), 0);
    }

    #[test]
    fn render_writes_an_svg_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("hist.svg");
        SvgHistogram::default()
            .render("token counts", &[1.0, 2.0, 2.0, 5.0], &out)
            .unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("<svg"));
        assert!(text.contains("token counts"));
    }

    #[test]
    fn render_rejects_empty_input() {
        let dir = tempdir().unwrap();
        let err = SvgHistogram::default()
            .render("empty", &[], &dir.path().join("hist.svg"))
            .unwrap_err();
        assert!(matches!(err, DatasetError::EmptyInput));
    }
}
