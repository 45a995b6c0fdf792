//! gopherc - control running Gopher desktop companions
//!
//! Finds live instances over local sockets (Unix) or named pipes (Windows)
//! and sends them jump, message, accessory and close commands.

use clap::Parser;
use gopherc::cli;
use gopherc::commands::Cli;
use gopherc::common::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    logging::init_cli(cli.verbose);

    if let Err(e) = cli::run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
