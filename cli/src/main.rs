use clap::Parser;
use log::{error, info};
use std::fs::File;
use std::io::{self, BufWriter};

mod args;
mod error;
mod trace;

use args::{parse_requests, parse_seed, Cli};
use error::CliError;
use hashmix_prng_core_rs::RandomNumberDevice;

fn run(cli: &Cli) -> Result<(), CliError> {
    let seed = parse_seed(&cli.seed_u8)?;
    let requests = parse_requests(&cli.types_of_arr)?;

    let mut device = RandomNumberDevice::new(cli.length_u8, &seed)?;
    info!(
        "Device ready: {} bytes, {} seed bytes, {} requests",
        cli.length_u8,
        seed.len(),
        requests.len()
    );

    match &cli.file_path {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            trace::write_trace(&mut out, &mut device, &requests)?;
            info!("Trace written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            trace::write_trace(&mut out, &mut device, &requests)?;
        }
    }

    Ok(())
}

fn main() {
    lovely_env_logger::init_default();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
