// random_order: generate shuffled permutation fixtures for the db tests

use clap::error::ErrorKind;
use random_order::{init_logging, process_cli, run};
use std::{env, process};

// mainline - read size, write both fixtures
fn main() {
    // get command-line data
    let cli = match process_cli(env::args_os()) {
        Ok(x) => x,
        Err(e) => {
            // help and version requests are not failures
            if let Some(clap_err) = e.downcast_ref::<clap::Error>() {
                if matches!(
                    clap_err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
                ) {
                    clap_err.exit();
                }
            }
            eprintln!("{e}");
            process::exit(1);
        }
    };

    init_logging(&cli.log);

    if let Err(e) = run(&cli) {
        eprintln!("{e:#}");
        process::exit(1);
    }
}
