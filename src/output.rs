//! Writing generated families to disk.
//!
//! Each family is rendered in memory first, then its file is created (or
//! truncated), written, and flushed before the next family starts. The first
//! failure stops the run.

use crate::codegen::CodeGenerator;
use crate::config::Config;
use crate::debug_println;
use crate::error::{OutputPathContext, Result};
use crate::family::{FamilySpec, Grammar};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// `<output_dir>/<lowercased family name>.<extension>`
pub fn output_path(output_dir: &Path, family: &FamilySpec, config: &Config) -> PathBuf {
    output_dir.join(family.file_name(&config.file_extension))
}

/// Render one family and overwrite its output file
pub fn write_family(
    output_dir: &Path,
    family: &FamilySpec,
    generator: &mut CodeGenerator,
) -> Result<PathBuf> {
    let source = generator.generate(family);
    let path = output_path(output_dir, family, generator.config());

    let file = File::create(&path).at_output_path(&path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(source.as_bytes()).at_output_path(&path)?;
    writer.flush().at_output_path(&path)?;

    debug_println!("wrote {} ({} bytes)", path.display(), source.len());
    Ok(path)
}

/// Generate every family of `grammar` into `output_dir`, in order
pub fn generate_grammar(output_dir: &Path, grammar: &Grammar) -> Result<Vec<PathBuf>> {
    let mut generator = CodeGenerator::with_config(grammar.config.clone());
    grammar
        .families()
        .map(|family| write_family(output_dir, family, &mut generator))
        .collect()
}
