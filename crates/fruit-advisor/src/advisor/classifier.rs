use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Errors raised at the image classification boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifierError {
    #[error("Invalid image data: {0}")]
    InvalidImage(String),
    #[error("classifier unavailable: {0}")]
    Unavailable(String),
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("classifier returned no scores")]
    EmptyScores,
    #[error("Prediction index out of range (index {index}, {labels} labels)")]
    PredictionOutOfRange { index: usize, labels: usize },
}

/// Pre-trained image model producing one probability per vocabulary label.
///
/// Implementations own decoding, resizing to the model's square input, and
/// normalizing channels to `[0, 1]`.
pub trait ImageClassifier: Send + Sync {
    fn scores(&self, image: &[u8]) -> Result<Vec<f32>, ClassifierError>;
}

/// Ordered label list shared by the classifier output and the recommendation catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelVocabulary {
    labels: Vec<String>,
}

impl LabelVocabulary {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// One label per line; surrounding whitespace and blank lines are dropped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, std::io::Error> {
        let mut labels = Vec::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let label = line.trim();
            if !label.is_empty() {
                labels.push(label.to_string());
            }
        }
        Ok(Self { labels })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of the highest score. The first maximum wins on ties.
    pub fn label_for(&self, scores: &[f32]) -> Result<&str, ClassifierError> {
        let mut best: Option<(usize, f32)> = None;
        for (index, score) in scores.iter().copied().enumerate() {
            match best {
                Some((_, current)) if score <= current => {}
                _ => best = Some((index, score)),
            }
        }

        let (index, _) = best.ok_or(ClassifierError::EmptyScores)?;
        self.labels
            .get(index)
            .map(String::as_str)
            .ok_or(ClassifierError::PredictionOutOfRange {
                index,
                labels: self.labels.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> LabelVocabulary {
        LabelVocabulary::new(["Apple_Ripe", "Mango_Ripe", "Orange_Ripe"])
    }

    #[test]
    fn reader_trims_and_skips_blank_lines() {
        let vocabulary = LabelVocabulary::from_reader("Apple_Ripe\r\n\n  Mango_Ripe  \n".as_bytes())
            .expect("labels load");
        assert_eq!(vocabulary.labels(), ["Apple_Ripe", "Mango_Ripe"]);
    }

    #[test]
    fn label_for_picks_highest_score() {
        let vocabulary = vocabulary();
        let label = vocabulary.label_for(&[0.1, 0.7, 0.2]).expect("label resolves");
        assert_eq!(label, "Mango_Ripe");
    }

    #[test]
    fn label_for_prefers_first_maximum() {
        let vocabulary = vocabulary();
        let label = vocabulary.label_for(&[0.4, 0.4, 0.2]).expect("label resolves");
        assert_eq!(label, "Apple_Ripe");
    }

    #[test]
    fn label_for_rejects_index_beyond_vocabulary() {
        let error = vocabulary()
            .label_for(&[0.1, 0.1, 0.1, 0.7])
            .expect_err("index out of range");
        assert_eq!(
            error,
            ClassifierError::PredictionOutOfRange {
                index: 3,
                labels: 3
            }
        );
    }

    #[test]
    fn label_for_rejects_empty_scores() {
        assert_eq!(
            vocabulary().label_for(&[]),
            Err(ClassifierError::EmptyScores)
        );
    }
}
