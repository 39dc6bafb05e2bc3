use serde::{Deserialize, Deserializer, Serialize, de};

/// The single persisted document holding the best score ever submitted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HighScoreRecord {
    /// Highest score accepted so far, never negative. Documents without the key read as zero.
    #[serde(default, deserialize_with = "non_negative")]
    pub best_score: i64,
}

impl HighScoreRecord {
    /// Create a record holding `best_score`.
    pub fn new(best_score: i64) -> Self {
        Self { best_score }
    }

    /// Return the record that results from submitting `score`, or `None` when the
    /// submission does not beat the current best.
    pub fn improved_by(&self, score: i64) -> Option<Self> {
        (score > self.best_score).then_some(Self::new(score))
    }
}

fn non_negative<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    if value < 0 {
        return Err(de::Error::custom(format!(
            "best_score must not be negative (got {value})"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_score_improves_record() {
        let record = HighScoreRecord::new(50);
        assert_eq!(record.improved_by(75), Some(HighScoreRecord::new(75)));
    }

    #[test]
    fn lower_or_equal_score_keeps_record() {
        let record = HighScoreRecord::new(50);
        assert_eq!(record.improved_by(30), None);
        assert_eq!(record.improved_by(50), None);
    }

    #[test]
    fn negative_score_never_improves_record() {
        assert_eq!(HighScoreRecord::new(0).improved_by(-10), None);
        assert_eq!(HighScoreRecord::new(5).improved_by(i64::MIN), None);
    }

    #[test]
    fn improvement_is_max_of_both() {
        for best in [0_i64, 1, 10, 500] {
            for score in [0_i64, 1, 9, 10, 11, 499, 501] {
                let record = HighScoreRecord::new(best);
                let next = record.improved_by(score).unwrap_or(record);
                assert_eq!(next.best_score, best.max(score));
            }
        }
    }

    #[test]
    fn missing_key_deserializes_to_zero() {
        let record: HighScoreRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, HighScoreRecord::default());
    }

    #[test]
    fn negative_stored_value_is_rejected() {
        assert!(serde_json::from_str::<HighScoreRecord>(r#"{"best_score": -3}"#).is_err());
    }
}
