use clap::Parser;

use vp_dtgen::cli::{self, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    cli::init_logging(args.quiet);
    cli::run(&args)
}
