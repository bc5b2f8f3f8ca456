use std::collections::BTreeMap;

use serde::Serialize;

use super::solution::SolutionId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartResult {
    pub answer: String,
    pub time_us: u64,
}

/// What one benchmark invocation produced. Serializes either as the
/// `part<n>` map or as `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BenchOutcome {
    Parts(BTreeMap<String, PartResult>),
    Failed { error: String },
}

impl BenchOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        BenchOutcome::Failed {
            error: message.into(),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            BenchOutcome::Failed { error } => Some(error),
            BenchOutcome::Parts(_) => None,
        }
    }

    pub fn part(&self, n: u32) -> Option<&PartResult> {
        match self {
            BenchOutcome::Parts(parts) => parts.get(&format!("part{}", n)),
            BenchOutcome::Failed { .. } => None,
        }
    }

    /// Missing parts count as zero.
    pub fn part_time_us(&self, n: u32) -> u64 {
        self.part(n).map(|p| p.time_us).unwrap_or(0)
    }

    pub fn total_time_us(&self) -> u64 {
        self.part_time_us(1).saturating_add(self.part_time_us(2))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchRecord {
    #[serde(flatten)]
    pub id: SolutionId,
    pub result: BenchOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> BenchOutcome {
        let mut parts = BTreeMap::new();
        parts.insert(
            "part1".to_string(),
            PartResult {
                answer: "42".to_string(),
                time_us: 100,
            },
        );
        BenchOutcome::Parts(parts)
    }

    #[test]
    fn test_missing_part_counts_as_zero() {
        let outcome = sample();
        assert_eq!(outcome.part_time_us(1), 100);
        assert_eq!(outcome.part_time_us(2), 0);
        assert_eq!(outcome.total_time_us(), 100);
    }

    #[test]
    fn test_total_saturates() {
        let mut parts = BTreeMap::new();
        for (name, time_us) in [("part1", u64::MAX), ("part2", 5)] {
            parts.insert(
                name.to_string(),
                PartResult {
                    answer: "x".to_string(),
                    time_us,
                },
            );
        }
        assert_eq!(BenchOutcome::Parts(parts).total_time_us(), u64::MAX);
    }

    #[test]
    fn test_record_json_shape() {
        let record = BenchRecord {
            id: SolutionId { year: 2024, day: 1 },
            result: sample(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "year": 2024,
                "day": 1,
                "result": {"part1": {"answer": "42", "time_us": 100}}
            })
        );

        let failed = BenchRecord {
            id: SolutionId { year: 2024, day: 2 },
            result: BenchOutcome::error("boom"),
        };
        let value = serde_json::to_value(&failed).unwrap();
        assert_eq!(value["result"], json!({"error": "boom"}));
    }
}
