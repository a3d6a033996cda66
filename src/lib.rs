// random_order: write randomly shuffled permutations of 1..N as test fixtures (library)
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use anyhow::{Error, Result};
use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod error;
pub mod fixture;
pub mod permutation;
pub mod size;

pub use cli::{process_cli, CliOpts};
pub use error::FixtureError;
pub use fixture::FixturePaths;
pub use permutation::Permutation;
pub use size::SizeMode;

// fallback when --log cannot be parsed
const DEFAULT_LOG_LEVEL: &str = "warn";

// diagnostics go to stderr, filtered by the --log option
pub fn init_logging(filter: &str) {
    let env_filter = match EnvFilter::try_new(filter) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("invalid log filter {filter:?} ({e}), using {DEFAULT_LOG_LEVEL:?}");
            EnvFilter::new(DEFAULT_LOG_LEVEL)
        }
    };
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        // an earlier call already installed a subscriber
        debug!("logging already initialized: {e}");
    }
}

// run: library side of command line called from main()
pub fn run(cli: &CliOpts) -> Result<(), Error> {
    // convert size argument before touching any file
    let size = size::parse_size(&cli.size_text, cli.size_mode)?;
    debug!(?cli, size, "parsed command line");

    // explicit seed for reproducible fixtures, otherwise OS entropy
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    fixture::generate(size, &cli.paths, &mut rng)
}
