//! CLI entry point for colorway previews and fabric analysis

use clap::Parser;
use weavelab::io::cli::{Cli, CommandRunner};
use weavelab::io::logging::init_logging;

fn main() -> weavelab::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let mut runner = CommandRunner::new(cli);
    runner.run()
}
