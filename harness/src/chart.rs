//! Result series: smoothing and JSON chart export.

use crate::error::HarnessError;

/// Running mean of `values` over windows of `window` consecutive samples.
///
/// The result has `values.len() - window + 1` entries.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidWindow`] if `window` is 0 or longer than
/// `values`.
pub fn rolling(values: &[f64], window: usize) -> Result<Vec<f64>, HarnessError> {
    if window == 0 || window > values.len() {
        return Err(HarnessError::InvalidWindow {
            window,
            len: values.len(),
        });
    }
    #[allow(clippy::cast_precision_loss)]
    let w = window as f64;
    Ok(values
        .windows(window)
        .map(|chunk| chunk.iter().sum::<f64>() / w)
        .collect())
}

/// One labelled line of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesV1 {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl SeriesV1 {
    /// Build a series from matching x and y columns.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::SeriesLengthMismatch`] if the columns differ
    /// in length.
    pub fn new(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Result<Self, HarnessError> {
        let label = label.into();
        if x.len() != y.len() {
            return Err(HarnessError::SeriesLengthMismatch {
                label,
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { label, x, y })
    }

    /// A series whose x column is the sample index `0, 1, 2, ...`.
    #[must_use]
    pub fn indexed(label: impl Into<String>, y: Vec<f64>) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let x = (0..y.len()).map(|i| i as f64).collect();
        Self {
            label: label.into(),
            x,
            y,
        }
    }
}

/// A titled chart of one or more series, exported for an external plotter.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartV1 {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<SeriesV1>,
}

impl ChartV1 {
    /// Start an empty chart.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series: Vec::new(),
        }
    }

    /// Append a series.
    #[must_use]
    pub fn with_series(mut self, series: SeriesV1) -> Self {
        self.series.push(series);
        self
    }

    /// Render as a JSON object with sorted keys.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "series": self.series.iter().map(|s| serde_json::json!({
                "label": s.label,
                "x": s.x,
                "y": s.y,
            })).collect::<Vec<_>>(),
            "title": self.title,
            "x_label": self.x_label,
            "y_label": self.y_label,
        })
    }

    /// Serialize to compact JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if a value cannot be represented.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json())
    }
}
