// random_order: shuffled permutations of 1..N
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use anyhow::{Context, Error, Result};
use rand::{seq::SliceRandom, Rng};
use std::fmt;

// field separator in fixture lines
const SEPARATOR: char = ',';

/// The integers `1..=n`, each exactly once, in some order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    // build 1..=n and shuffle it with the given random source
    pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut values: Vec<usize> = (1..=n).collect();
        values.shuffle(rng);
        Permutation(values)
    }

    /// Read a fixture line back. An empty line is the empty permutation.
    /// Only the number format is checked here; see [`Permutation::is_complete`].
    pub fn parse_line(line: &str) -> Result<Self, Error> {
        let line = line.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            return Ok(Permutation(Vec::new()));
        }
        let values = line
            .split(SEPARATOR)
            .map(|field| {
                field
                    .parse::<usize>()
                    .with_context(|| format!("bad fixture field {field:?}"))
            })
            .collect::<Result<Vec<usize>, Error>>()?;
        Ok(Permutation(values))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[usize] {
        &self.0
    }

    // true when every integer 1..=len appears exactly once
    pub fn is_complete(&self) -> bool {
        let mut seen = vec![false; self.0.len()];
        for &value in &self.0 {
            match value.checked_sub(1).and_then(|i| seen.get_mut(i)) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

// comma-joined decimal values, no trailing newline
impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.0.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, "{SEPARATOR}{value}")?;
            }
        }
        Ok(())
    }
}
