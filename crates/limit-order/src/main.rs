use {clap::Parser, std::process::ExitCode};

#[tokio::main]
async fn main() -> ExitCode {
    let args = limit_order::arguments::Arguments::parse();
    let config = observe::Config::new(
        &args.logging.log_filter,
        args.logging.log_stderr_threshold.into_level(),
        args.logging.log_json,
    );
    observe::tracing::initialize(&config);
    tracing::info!("running limit order client with validated arguments:\n{}", args);
    match limit_order::run(args).await {
        Ok(limit_order::Outcome::Failed) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(?err, "command failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
