//! calc-api-check entry point

use calc_api_check::cli::{self, Cli, Commands};
use calc_api_check::logging;
use clap::Parser;
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // ガードはプロセス終了までログを書き出すため保持する
    let _guard = match logging::init(cli.verbose, cli.log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("failed to initialize logging: {e}");
            return ExitCode::from(cli::EXIT_SETUP_ERROR);
        }
    };

    match cli.command {
        Commands::Run(args) => {
            let result = cli::run::execute(&args).await;
            if let Err(e) = &result {
                error!("{e:#}");
            }
            ExitCode::from(cli::exit_status(&result))
        }
        Commands::List => {
            cli::list::execute();
            ExitCode::from(cli::EXIT_SUCCESS)
        }
    }
}
