use crate::bench::format_time;
use crate::models::{BenchOutcome, BenchRecord};

/// The status half of a `Running ... ` console line.
pub fn outcome_line(outcome: &BenchOutcome) -> String {
    match outcome.error_message() {
        Some(error) => format!("❌ {}", error),
        None => format!(
            "✓ Part 1: {}, Part 2: {}",
            format_time(outcome.part_time_us(1)),
            format_time(outcome.part_time_us(2))
        ),
    }
}

pub fn markdown_table(records: &[BenchRecord]) -> String {
    let mut out = String::new();
    out.push_str("## Benchmark Results\n\n");
    out.push_str("| Year | Day | Part 1 | Part 2 | Total |\n");
    out.push_str("|------|-----|--------|--------|-------|\n");

    for record in records {
        let (year, day) = (record.id.year, record.id.day);
        let result = &record.result;
        if result.error_message().is_some() {
            out.push_str(&format!("| {} | {:02} | Error | Error | - |\n", year, day));
        } else {
            out.push_str(&format!(
                "| {} | {:02} | {} | {} | {} |\n",
                year,
                day,
                format_time(result.part_time_us(1)),
                format_time(result.part_time_us(2)),
                format_time(result.total_time_us())
            ));
        }
    }

    out
}

pub fn json_report(records: &[BenchRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::parse_output;
    use crate::models::SolutionId;

    fn records() -> Vec<BenchRecord> {
        vec![
            BenchRecord {
                id: SolutionId { year: 2025, day: 1 },
                result: BenchOutcome::Parts(parse_output(
                    "Part 1: 42 (100 µs)\nPart 2: 7 (9999 µs)\n",
                )),
            },
            BenchRecord {
                id: SolutionId { year: 2025, day: 2 },
                result: BenchOutcome::error("Timeout (>60s)"),
            },
        ]
    }

    #[test]
    fn test_outcome_line() {
        let recs = records();
        assert_eq!(
            outcome_line(&recs[0].result),
            "✓ Part 1: 100 µs, Part 2: 10.00 ms"
        );
        assert_eq!(outcome_line(&recs[1].result), "❌ Timeout (>60s)");
    }

    #[test]
    fn test_markdown_table() {
        let table = markdown_table(&records());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "## Benchmark Results");
        assert_eq!(lines[2], "| Year | Day | Part 1 | Part 2 | Total |");
        assert_eq!(lines[4], "| 2025 | 01 | 100 µs | 10.00 ms | 10.10 ms |");
        assert_eq!(lines[5], "| 2025 | 02 | Error | Error | - |");
    }

    #[test]
    fn test_json_report() {
        let json = json_report(&records()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["result"]["part2"]["time_us"], 9999);
        assert_eq!(value[1]["result"]["error"], "Timeout (>60s)");
    }
}
