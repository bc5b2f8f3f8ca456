use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::LazyLock;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use regex::Regex;
use tracing::debug;

use crate::models::project::MARKER_FILE;
use crate::models::solution::MAX_DAY;
use crate::models::{BenchOutcome, PartResult, ProjectLayout, SolutionId};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

// Only the µs unit is recognised; other units yield no parts.
static PART_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"Part (\d): (.+) \((\d+) µs\)").ok());

/// Captured result of a child process that ran to completion.
#[derive(Debug)]
pub struct Captured {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

enum Stream {
    Stdout,
    Stderr,
}

enum Execution {
    Finished(Captured),
    TimedOut,
}

/// Every implemented solution under `src/`, ascending by (year, day).
///
/// A day counts as implemented when its directory holds `solution.cpp`.
/// Directories whose names don't parse are skipped.
pub fn discover(layout: &ProjectLayout) -> io::Result<Vec<SolutionId>> {
    let src_root = layout.src_root();
    if !src_root.is_dir() {
        debug!(path = %src_root.display(), "no source directory");
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for year_entry in fs::read_dir(&src_root)? {
        let year_entry = year_entry?;
        if !year_entry.file_type()?.is_dir() {
            continue;
        }
        let name = year_entry.file_name();
        let Some(year) = name
            .to_str()
            .filter(|n| n.starts_with("20"))
            .and_then(|n| n.parse::<i32>().ok())
        else {
            continue;
        };

        for day_entry in fs::read_dir(year_entry.path())? {
            let day_entry = day_entry?;
            let name = day_entry.file_name();
            let Some(day) = name
                .to_str()
                .and_then(|n| n.strip_prefix("day"))
                .and_then(|n| n.parse::<i32>().ok())
                .filter(|d| (1..=MAX_DAY).contains(d))
            else {
                continue;
            };

            if day_entry.path().join(MARKER_FILE).is_file() {
                found.push(SolutionId { year, day });
            }
        }
    }

    found.sort();
    found.dedup();
    Ok(found)
}

/// Runs `<binary> <year> <day> --bench` and turns whatever happens into an
/// outcome. Never fails: launch errors and timeouts become error outcomes.
pub fn run_benchmark(binary: &Path, id: SolutionId, timeout: Duration) -> BenchOutcome {
    let outcome = match execute(binary, id, timeout) {
        Ok(Execution::Finished(captured)) => outcome_from_capture(&captured),
        Ok(Execution::TimedOut) => {
            BenchOutcome::error(format!("Timeout (>{}s)", timeout.as_secs()))
        }
        Err(e) => BenchOutcome::error(e.to_string()),
    };

    if let Some(error) = outcome.error_message() {
        debug!(%id, error, "benchmark failed");
    }
    outcome
}

pub fn outcome_from_capture(captured: &Captured) -> BenchOutcome {
    if !captured.success {
        let stderr = captured.stderr.trim();
        if stderr.is_empty() {
            return BenchOutcome::error("Unknown error");
        }
        return BenchOutcome::error(stderr);
    }
    BenchOutcome::Parts(parse_output(&captured.stdout))
}

/// Collects every `Part <n>: <answer> (<t> µs)` line. A later line for the
/// same part replaces an earlier one.
pub fn parse_output(output: &str) -> BTreeMap<String, PartResult> {
    let mut parts = BTreeMap::new();
    let Some(re) = PART_LINE.as_ref() else {
        return parts;
    };

    for caps in re.captures_iter(output) {
        let Ok(time_us) = caps[3].parse::<u64>() else {
            continue;
        };
        parts.insert(
            format!("part{}", &caps[1]),
            PartResult {
                answer: caps[2].to_string(),
                time_us,
            },
        );
    }
    parts
}

pub fn format_time(us: u64) -> String {
    if us < 1_000 {
        format!("{} µs", us)
    } else if us < 1_000_000 {
        format!("{:.2} ms", us as f64 / 1_000.0)
    } else {
        format!("{:.2} s", us as f64 / 1_000_000.0)
    }
}

fn execute(binary: &Path, id: SolutionId, timeout: Duration) -> io::Result<Execution> {
    debug!(binary = %binary.display(), year = id.year, day = id.day, "spawning benchmark");

    let mut child = Command::new(binary)
        .arg(id.year.to_string())
        .arg(id.day.to_string())
        .arg("--bench")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let (tx, rx) = mpsc::channel();
    if let Some(pipe) = child.stdout.take() {
        drain(pipe, Stream::Stdout, tx.clone());
    }
    if let Some(pipe) = child.stderr.take() {
        drain(pipe, Stream::Stderr, tx.clone());
    }
    drop(tx);

    let deadline = Instant::now() + timeout;
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if Instant::now() >= deadline {
            child.kill()?;
            child.wait()?;
            return Ok(Execution::TimedOut);
        }
        thread::sleep(POLL_INTERVAL);
    };

    // A background process left behind by the binary can keep the pipes
    // open after it exits, so reads share the same deadline.
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok((Stream::Stdout, bytes)) => stdout = bytes?,
            Ok((Stream::Stderr, bytes)) => stderr = bytes?,
            Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => return Ok(Execution::TimedOut),
        }
    }

    Ok(Execution::Finished(Captured {
        success: status.success(),
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
    }))
}

fn drain<R: Read + Send + 'static>(
    mut pipe: R,
    stream: Stream,
    tx: Sender<(Stream, io::Result<Vec<u8>>)>,
) {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let read = pipe.read_to_end(&mut buf).map(|_| buf);
        let _ = tx.send((stream, read));
    });
}
