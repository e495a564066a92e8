mod commands;
mod terminal;

use std::process::ExitCode;

use arise_common::config::Config;
use commands::{CommandLine, Commands, check, send, wake};
use terminal::{logging, print};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    logging::init(cfg.quiet);
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Wake { target, wol, retry } => {
            print::header("waking target", cfg.quiet);
            wake::wake(commands::wake_config(target, wol, retry), &cfg).await
        }
        Commands::Check { target } => {
            print::header("checking candidates", cfg.quiet);
            check::check(target, &cfg).await
        }
        Commands::Send { wol } => {
            print::header("sending magic packet", cfg.quiet);
            send::send(wol).await
        }
    }
}
