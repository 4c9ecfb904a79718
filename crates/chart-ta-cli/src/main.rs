//! chart-ta command-line interface
//!
//! Reads observations from a CSV file and writes a chart series description
//! for one chart type.

use std::process::ExitCode;

use chart_ta_cli::args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse_args();
    match chart_ta_cli::run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
