use clap::Parser;
use twr::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
