mod cli;
mod config;
mod diff;
mod error;
mod imports;
mod output;
mod process;
mod source;
mod walk;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = process::run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
