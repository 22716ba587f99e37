//! Command-line front end
//!
//! Only the generated tree goes to stdout. The banner, the configuration
//! dump and errors are written to stderr, so the output can be piped
//! straight into `dtc`.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::derive::{derive, parse_int, Options, DEFAULT_MEMORY_START};
use crate::generate::generate;
use crate::{DtGenError, Flavor, Target, VERSION};

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "vp-dtgen", version)]
#[command(about = "Device-tree source generator for the RISC-V qemu_virt VPs")]
pub struct Args {
    /// VP variant [qemu_virt32-sc-vp, qemu_virt32-vp, qemu_virt64-sc-vp, qemu_virt64-vp]
    #[arg(short, long)]
    pub target: String,

    /// Device-tree layout
    #[arg(short, long, value_enum, default_value_t = Flavor::Legacy)]
    pub flavor: Flavor,

    /// Memory start address
    #[arg(short = 'm', long, value_parser = parse_number, default_value_t = DEFAULT_MEMORY_START)]
    pub memory_start: u64,

    /// Memory size in bytes (default: rv32: 1GiB; rv64: 2GiB)
    #[arg(short = 's', long, value_parser = parse_number)]
    pub memory_size: Option<u64>,

    /// Bootargs string in chosen node (default: not set)
    #[arg(short, long)]
    pub bootargs: Option<String>,

    /// File to write the device-tree source to (default: stdout)
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,

    /// Quiet mode
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_number(s: &str) -> std::result::Result<u64, DtGenError> {
    parse_int(s)
}

impl Args {
    /// Resolve the arguments into generator options.
    ///
    /// # Errors
    ///
    /// Returns [`DtGenError::InvalidTarget`] for an unknown target name.
    pub fn options(&self) -> crate::Result<Options> {
        let target: Target = self.target.parse()?;
        let mut options = Options::new(target).with_memory_start(self.memory_start);
        options.memory_size = self.memory_size;
        options.bootargs = self.bootargs.clone();
        Ok(options)
    }
}

/// Install the stderr log subscriber.
///
/// `quiet` pins the level to `warn`; otherwise `RUST_LOG` may override the
/// default of `info`.
pub fn init_logging(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// Run the generator for parsed arguments.
pub fn run(args: &Args) -> Result<()> {
    info!("vp-dtgen {}: device-tree generator for qemu_virt VPs", VERSION);

    let options = args.options()?;
    let layout = args.flavor.layout();

    let mut config = derive(&options, layout);
    info!("Configuration:");
    for line in config.dump_lines() {
        info!("  {}", line);
    }

    let dts = generate(&mut config, layout);

    match &args.output_file {
        Some(path) => {
            fs::write(path, &dts)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = dts.len(), "device tree written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(dts.as_bytes())
                .context("Failed to write device tree to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
