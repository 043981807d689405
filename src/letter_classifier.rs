//! Instance-based Libras letter classifier.
//!
//! At startup the classifier reads a CSV dataset of flattened hand landmark
//! vectors (63 feature columns plus a `label` column), fits a per-feature
//! standardization transform and a brute-force k-nearest-neighbors model over
//! the standardized vectors. There is no runtime retraining; `reload` is the
//! only way to refresh the model.
//!
//! Failure to load is not an error for callers: the classifier degrades to a
//! "not loaded" state and every prediction returns the `MODEL_NOT_LOADED`
//! sentinel. A prediction with the wrong feature count returns the distinct
//! `FORMAT_ERROR` sentinel so callers can tell "nothing trained" apart from
//! "bad input this frame".

use crate::constants::KNN_NEIGHBORS;
use crate::{Error, Result};
use ndarray::{Array1, Array2, Axis};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Outcome of a single letter prediction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LetterPrediction {
    /// A letter label from the training dataset
    Letter(String),
    /// The classifier never loaded a dataset
    ModelNotLoaded,
    /// The feature vector did not match the trained dimensionality
    FormatError,
}

impl LetterPrediction {
    /// Sentinel string for the not-loaded state
    pub const MODEL_NOT_LOADED: &'static str = "MODEL_NOT_LOADED";
    /// Sentinel string for a malformed feature vector
    pub const FORMAT_ERROR: &'static str = "FORMAT_ERROR";

    /// String form: the letter label, or one of the two sentinels
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            LetterPrediction::Letter(letter) => letter,
            LetterPrediction::ModelNotLoaded => Self::MODEL_NOT_LOADED,
            LetterPrediction::FormatError => Self::FORMAT_ERROR,
        }
    }

    /// True only for an actual letter label
    #[must_use]
    pub fn is_letter(&self) -> bool {
        matches!(self, LetterPrediction::Letter(_))
    }
}

impl fmt::Display for LetterPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-feature standardization transform (mean / population std)
#[derive(Debug, Clone)]
struct StandardScaler {
    mean: Array1<f32>,
    scale: Array1<f32>,
}

impl StandardScaler {
    fn fit(samples: &Array2<f32>) -> Self {
        let n = samples.nrows() as f32;
        let mean = samples.sum_axis(Axis(0)) / n;

        let mut scale = Array1::zeros(samples.ncols());
        for (j, column) in samples.axis_iter(Axis(1)).enumerate() {
            let variance = column.iter().map(|v| (v - mean[j]).powi(2)).sum::<f32>() / n;
            let std_dev = variance.sqrt();
            // Constant features pass through unscaled
            scale[j] = if std_dev > 0.0 { std_dev } else { 1.0 };
        }

        Self { mean, scale }
    }

    fn transform(&self, features: &[f32]) -> Array1<f32> {
        let mut scaled = Array1::zeros(features.len());
        for (j, &value) in features.iter().enumerate() {
            scaled[j] = (value - self.mean[j]) / self.scale[j];
        }
        scaled
    }
}

/// Fitted classifier state, rebuilt only by reloading
struct FittedModel {
    scaler: StandardScaler,
    train: Array2<f32>,
    labels: Vec<String>,
    neighbors: usize,
}

impl FittedModel {
    fn n_features(&self) -> usize {
        self.train.ncols()
    }

    /// Majority label among the k nearest standardized training vectors.
    /// Ties go to the label whose nearest member comes first.
    fn nearest_label(&self, query: &Array1<f32>) -> String {
        let mut ranked: Vec<(f32, usize)> = self
            .train
            .axis_iter(Axis(0))
            .enumerate()
            .map(|(i, row)| {
                let distance = row
                    .iter()
                    .zip(query.iter())
                    .map(|(a, b)| (a - b).powi(2))
                    .sum::<f32>();
                (distance, i)
            })
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        ranked.truncate(self.neighbors);

        let mut votes: HashMap<&str, usize> = HashMap::new();
        for &(_, i) in &ranked {
            *votes.entry(self.labels[i].as_str()).or_insert(0) += 1;
        }
        let top = votes.values().copied().max().unwrap_or(0);

        ranked
            .iter()
            .map(|&(_, i)| self.labels[i].as_str())
            .find(|label| votes[label] == top)
            .unwrap_or_default()
            .to_string()
    }
}

/// Letter classifier over flattened hand landmark vectors
pub struct LetterClassifier {
    model: Option<FittedModel>,
}

impl LetterClassifier {
    /// An empty classifier that answers `ModelNotLoaded` to everything
    #[must_use]
    pub fn unloaded() -> Self {
        Self { model: None }
    }

    /// Load and fit from a CSV dataset.
    ///
    /// A missing or malformed file leaves the classifier in the not-loaded
    /// state; the failure is logged, never propagated.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::fit_from_file(path) {
            Ok(model) => {
                log::info!(
                    "Letter model loaded from {}: {} samples, {} features",
                    path.display(),
                    model.train.nrows(),
                    model.n_features()
                );
                Self { model: Some(model) }
            }
            Err(e) => {
                log::warn!(
                    "Letter model unavailable, predictions disabled ({}): {e}",
                    path.display()
                );
                Self { model: None }
            }
        }
    }

    /// Re-run the load against a (possibly updated) dataset file
    pub fn reload<P: AsRef<Path>>(&mut self, path: P) {
        *self = Self::load(path);
    }

    /// Whether a fitted model is available
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Predict the letter for one flattened landmark vector.
    ///
    /// Never fails: degraded states are reported through the sentinel
    /// variants instead.
    #[must_use]
    pub fn predict(&self, features: &[f32]) -> LetterPrediction {
        let Some(model) = &self.model else {
            return LetterPrediction::ModelNotLoaded;
        };
        if features.len() != model.n_features() {
            return LetterPrediction::FormatError;
        }

        let scaled = model.scaler.transform(features);
        LetterPrediction::Letter(model.nearest_label(&scaled))
    }

    fn fit_from_file(path: &Path) -> Result<FittedModel> {
        let mut reader = csv::Reader::from_path(path)?;

        let headers = reader.headers()?.clone();
        let label_column = headers
            .iter()
            .position(|h| h == "label")
            .ok_or_else(|| Error::Dataset("missing 'label' column".to_string()))?;
        let n_features = headers.len() - 1;
        if n_features == 0 {
            return Err(Error::Dataset("no feature columns".to_string()));
        }

        let mut values = Vec::new();
        let mut labels = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            for (column, field) in record.iter().enumerate() {
                if column == label_column {
                    labels.push(field.to_string());
                } else {
                    let value: f32 = field.parse().map_err(|_| {
                        Error::Dataset(format!("non-numeric value '{field}' at row {row}, column {column}"))
                    })?;
                    values.push(value);
                }
            }
        }
        if labels.is_empty() {
            return Err(Error::Dataset("dataset has no rows".to_string()));
        }

        let train = Array2::from_shape_vec((labels.len(), n_features), values)
            .map_err(|e| Error::Dataset(format!("inconsistent row widths: {e}")))?;

        let scaler = StandardScaler::fit(&train);
        let mut standardized = Array2::zeros(train.raw_dim());
        for (i, row) in train.axis_iter(Axis(0)).enumerate() {
            let row_vec: Vec<f32> = row.to_vec();
            standardized.row_mut(i).assign(&scaler.transform(&row_vec));
        }

        Ok(FittedModel {
            scaler,
            neighbors: KNN_NEIGHBORS.min(labels.len()),
            train: standardized,
            labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_unloaded_classifier_returns_sentinel() {
        let classifier = LetterClassifier::unloaded();
        assert_eq!(classifier.predict(&[0.0; 63]), LetterPrediction::ModelNotLoaded);
        assert_eq!(classifier.predict(&[]), LetterPrediction::ModelNotLoaded);
        assert!(!classifier.is_loaded());
    }

    #[test]
    fn test_load_missing_file_degrades() {
        let classifier = LetterClassifier::load("/nonexistent/libras_dataset.csv");
        assert!(!classifier.is_loaded());
        assert_eq!(classifier.predict(&[0.5; 63]), LetterPrediction::ModelNotLoaded);
    }

    #[test]
    fn test_scaler_standardizes_features() {
        let samples = array![[1.0, 10.0], [3.0, 10.0]];
        let scaler = StandardScaler::fit(&samples);

        let scaled = scaler.transform(&[2.0, 10.0]);
        assert!((scaled[0]).abs() < 1e-6);
        // Zero-variance column passes through centered but unscaled
        assert!((scaled[1]).abs() < 1e-6);

        let scaled = scaler.transform(&[3.0, 11.0]);
        assert!((scaled[0] - 1.0).abs() < 1e-6);
        assert!((scaled[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sentinel_strings() {
        assert_eq!(LetterPrediction::ModelNotLoaded.as_str(), "MODEL_NOT_LOADED");
        assert_eq!(LetterPrediction::FormatError.as_str(), "FORMAT_ERROR");
        assert_eq!(LetterPrediction::Letter("A".to_string()).as_str(), "A");
        assert!(LetterPrediction::Letter("A".to_string()).is_letter());
        assert!(!LetterPrediction::FormatError.is_letter());
    }

    #[test]
    fn test_nearest_label_majority_vote() {
        let model = FittedModel {
            scaler: StandardScaler {
                mean: Array1::zeros(1),
                scale: Array1::ones(1),
            },
            train: array![[0.0], [0.1], [0.2], [1.0], [1.1]],
            labels: vec![
                "A".to_string(),
                "A".to_string(),
                "A".to_string(),
                "B".to_string(),
                "B".to_string(),
            ],
            neighbors: 5,
        };

        assert_eq!(model.nearest_label(&array![0.05]), "A");
        // All five rows vote, A still holds the majority near B's cluster
        assert_eq!(model.nearest_label(&array![1.05]), "A");
    }

    #[test]
    fn test_nearest_label_tie_goes_to_closest() {
        let model = FittedModel {
            scaler: StandardScaler {
                mean: Array1::zeros(1),
                scale: Array1::ones(1),
            },
            train: array![[0.0], [0.3], [1.0], [1.3]],
            labels: vec![
                "A".to_string(),
                "A".to_string(),
                "B".to_string(),
                "B".to_string(),
            ],
            neighbors: 4,
        };

        // Two votes each; A owns the nearest neighbor at 0.2
        assert_eq!(model.nearest_label(&array![0.2]), "A");
        // Mirrored query, B owns the nearest neighbor
        assert_eq!(model.nearest_label(&array![1.1]), "B");
    }
}
