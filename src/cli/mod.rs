//! CLI command handling
//!
//! Turns a parsed command into a dispatch and reports the outcome.

use crate::commands::{Cli, Commands};
use crate::common::config::Config;
use crate::common::Result;
use crate::ipc::{platform_transport, DeliveryReport, Dispatcher};

/// Run a parsed invocation
///
/// Only discovery and configuration failures are returned; instances that
/// could not be reached are reported and otherwise ignored.
pub async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(dir) = cli.socket_dir {
        config.discovery.socket_dir = Some(dir);
    }

    dispatch(cli.command, &config).await
}

/// Dispatch a CLI command
pub async fn dispatch(command: Commands, config: &Config) -> Result<()> {
    let dispatcher = Dispatcher::new(platform_transport(config));

    let Some(msg) = command.message() else {
        for id in dispatcher.discover().await? {
            println!("{}", id);
        }
        return Ok(());
    };

    let report = dispatcher.deliver(&msg, &mut rand::thread_rng()).await?;
    print_report(&report);

    Ok(())
}

fn print_report(report: &DeliveryReport) {
    for (id, err) in report.failures() {
        println!("{}: Cannot send message to Gopher instance: {}", id, err);
    }

    if report.is_unclaimed() {
        eprintln!("No instance accepted the message");
    }
}
