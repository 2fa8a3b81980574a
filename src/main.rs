use std::process::ExitCode;

use tokio::net::TcpListener;
use word_dash::config::Config;
use word_dash::metrics::register_metrics;
use word_dash::startup;

#[tokio::main]
async fn main() -> ExitCode {
    std_logger::Config::logfmt().init();

    let config = match Config::get() {
        Ok(config) => config,
        Err(error) => {
            log::error!("Unable to read the configuration. Error: '{error}'.");
            return ExitCode::FAILURE;
        }
    };
    register_metrics();

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(error) => {
            log::error!("Unable to bind to '{address}'. Error: '{error}'.");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = startup::create_web_server(config, listener).await {
        log::error!("The web server stopped. Error: '{error}'.");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
