use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::debug;

use crate::models::{ProjectLayout, SolutionId};

#[derive(Debug, Error)]
#[error("Failed to write {}: {source}", .path.display())]
pub struct ScaffoldError {
    pub path: PathBuf,
    pub source: io::Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Created,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub action: FileAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub header: FileEntry,
    pub source: FileEntry,
    pub example: FileEntry,
}

pub fn render_header(id: SolutionId) -> String {
    format!(
        r#"#pragma once

#include "common/solution.hpp"

namespace aoc::y{year} {{

class Day{day:02} : public Solution {{
public:
    std::string part1(const std::string& input) override;
    std::string part2(const std::string& input) override;

    int year() const override {{ return {year}; }}
    int day() const override {{ return {day}; }}
}};

}} // namespace aoc::y{year}
"#,
        year = id.year,
        day = id.day
    )
}

pub fn render_source(id: SolutionId) -> String {
    format!(
        r#"#include "solution.hpp"
#include "common/registry.hpp"
#include "common/utils.hpp"

namespace aoc::y{year} {{

std::string Day{day:02}::part1(const std::string& input) {{
    auto lines = split(input);

    // TODO: Implement part 1

    return "TODO";
}}

std::string Day{day:02}::part2(const std::string& input) {{
    auto lines = split(input);

    // TODO: Implement part 2

    return "TODO";
}}

REGISTER_SOLUTION(Day{day:02})

}} // namespace aoc::y{year}
"#,
        year = id.year,
        day = id.day
    )
}

/// Creates the source and data directories for `id` and writes the starter
/// files. Files that already exist are left alone and reported as skipped.
pub fn scaffold(layout: &ProjectLayout, id: SolutionId) -> Result<ScaffoldReport, ScaffoldError> {
    create_dir(&layout.src_dir(id))?;
    create_dir(&layout.data_dir(id))?;

    let header = write_if_absent(layout.header_path(id), &render_header(id))?;
    let source = write_if_absent(layout.source_path(id), &render_source(id))?;
    let example = write_if_absent(layout.example_path(id), "")?;

    Ok(ScaffoldReport {
        header,
        source,
        example,
    })
}

/// Runs the input fetcher for `id` against the same project root.
pub fn run_fetcher(fetcher: &Path, layout: &ProjectLayout, id: SolutionId) -> io::Result<ExitStatus> {
    debug!(fetcher = %fetcher.display(), %id, "running fetcher");
    Command::new(fetcher)
        .arg(id.year.to_string())
        .arg(id.day.to_string())
        .arg("--root")
        .arg(layout.root())
        .status()
}

fn create_dir(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(path).map_err(|source| ScaffoldError {
        path: path.to_path_buf(),
        source,
    })
}

fn write_if_absent(path: PathBuf, contents: &str) -> Result<FileEntry, ScaffoldError> {
    let file = OpenOptions::new().write(true).create_new(true).open(&path);
    let mut file = match file {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Ok(FileEntry {
                path,
                action: FileAction::Skipped,
            });
        }
        Err(source) => return Err(ScaffoldError { path, source }),
    };

    if let Err(source) = file.write_all(contents.as_bytes()) {
        return Err(ScaffoldError { path, source });
    }
    Ok(FileEntry {
        path,
        action: FileAction::Created,
    })
}
