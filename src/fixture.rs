// random_order: write permutation fixture files
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use crate::permutation::Permutation;
use anyhow::{Context, Error, Result};
use rand::Rng;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::info;

// default fixture locations, relative to the project root
pub const DEFAULT_IN_FILE: &str = "db/src/test/res/in.txt";
pub const DEFAULT_OUT_FILE: &str = "db/src/test/res/out.txt";

/// Where the "input" and "expected output" fixtures are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixturePaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for FixturePaths {
    fn default() -> Self {
        FixturePaths {
            input: PathBuf::from(DEFAULT_IN_FILE),
            output: PathBuf::from(DEFAULT_OUT_FILE),
        }
    }
}

// write one permutation as a single line, truncating previous content
pub fn write_fixture(path: &Path, permutation: &Permutation) -> Result<(), Error> {
    let outfile = File::create(path)
        .with_context(|| format!("Failed to create {}", path.to_string_lossy()))?;
    let mut writer = BufWriter::new(outfile);
    writeln!(writer, "{}", permutation)
        .with_context(|| format!("Failed to write {}", path.to_string_lossy()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.to_string_lossy()))?;
    info!(path = %path.display(), count = permutation.len(), "wrote fixture");
    Ok(())
}

/// Generate both fixtures of size `n`. The two permutations are drawn one
/// after the other from `rng`, with no relation between them.
pub fn generate<R: Rng + ?Sized>(
    n: usize,
    paths: &FixturePaths,
    rng: &mut R,
) -> Result<(), Error> {
    for path in [&paths.input, &paths.output] {
        let permutation = Permutation::generate(n, rng);
        write_fixture(path, &permutation)?;
    }
    Ok(())
}
