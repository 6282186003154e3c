#![allow(dead_code)]

pub mod snapshot_utils;

use astgen::{CodeGenerator, FamilySpec};
use std::fs;
use std::path::{Path, PathBuf};

/// A fresh directory under the system temp dir, removed on drop
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(test_name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "astgen_test_{}_{}",
            test_name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("Failed to create scratch dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sorted names of the files currently in the directory
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.path)
            .expect("Failed to read scratch dir")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path.join(name))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Render a family with the default Go configuration
pub fn render(family: &FamilySpec) -> String {
    CodeGenerator::new().generate(family)
}

/// Lines of `source` inside the block opened by the exact line `opener {`
pub fn block_body<'a>(source: &'a str, opener: &str) -> Vec<&'a str> {
    let header = format!("{} {{", opener);
    let mut lines = source.lines().skip_while(|line| *line != header);
    assert!(lines.next().is_some(), "block `{}` not found", opener);
    lines.take_while(|line| *line != "}" && *line != ")").collect()
}

/// Count lines starting with `prefix`
pub fn count_lines_starting_with(source: &str, prefix: &str) -> usize {
    source.lines().filter(|line| line.starts_with(prefix)).count()
}
