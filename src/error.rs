// random_order: error kinds recognized by the fixture generator
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use thiserror::Error;

/// Failures detected before any fixture file is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixtureError {
    /// the command line did not carry exactly one size argument
    #[error("requires exactly 1 argument, got {got}")]
    InvalidArgumentCount { got: usize },

    #[error("invalid size {text:?}: {reason}")]
    InvalidSize { text: String, reason: &'static str },
}
