use std::path::{Path, PathBuf};

use super::solution::SolutionId;

const SRC_DIR: &str = "src";
const DATA_DIR: &str = "data";
const ENV_FILE: &str = ".env";

pub const MARKER_FILE: &str = "solution.cpp";
pub const HEADER_FILE: &str = "solution.hpp";
pub const INPUT_FILE: &str = "input.txt";
pub const EXAMPLE_FILE: &str = "example.txt";

/// Paths inside the solutions project, all derived from its root.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn src_root(&self) -> PathBuf {
        self.root.join(SRC_DIR)
    }

    pub fn src_dir(&self, id: SolutionId) -> PathBuf {
        self.src_root().join(id.rel_path())
    }

    pub fn data_dir(&self, id: SolutionId) -> PathBuf {
        self.root.join(DATA_DIR).join(id.rel_path())
    }

    pub fn header_path(&self, id: SolutionId) -> PathBuf {
        self.src_dir(id).join(HEADER_FILE)
    }

    pub fn source_path(&self, id: SolutionId) -> PathBuf {
        self.src_dir(id).join(MARKER_FILE)
    }

    pub fn input_path(&self, id: SolutionId) -> PathBuf {
        self.data_dir(id).join(INPUT_FILE)
    }

    pub fn example_path(&self, id: SolutionId) -> PathBuf {
        self.data_dir(id).join(EXAMPLE_FILE)
    }

    pub fn binary_path(&self) -> PathBuf {
        self.root.join("build").join("aoc")
    }

    pub fn env_file(&self) -> PathBuf {
        self.root.join(ENV_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = ProjectLayout::new("/work/aoc");
        let id = SolutionId::new(2025, 7).unwrap();

        assert_eq!(
            layout.source_path(id),
            PathBuf::from("/work/aoc/src/2025/day07/solution.cpp")
        );
        assert_eq!(
            layout.header_path(id),
            PathBuf::from("/work/aoc/src/2025/day07/solution.hpp")
        );
        assert_eq!(
            layout.input_path(id),
            PathBuf::from("/work/aoc/data/2025/day07/input.txt")
        );
        assert_eq!(
            layout.example_path(id),
            PathBuf::from("/work/aoc/data/2025/day07/example.txt")
        );
        assert_eq!(layout.binary_path(), PathBuf::from("/work/aoc/build/aoc"));
        assert_eq!(layout.env_file(), PathBuf::from("/work/aoc/.env"));
    }
}
