#[macro_use]
mod log;
mod bot;
mod component;
mod components;
mod config;
mod event;


use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = log::init() {
        eprintln!("Impossible d'initialiser le logger: {}", e);
    }
    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log_debug!("{}", e);
            for line in e.operator_message() {
                println!("{}", line);
            }
            return ExitCode::FAILURE;
        }
    };
    let result = match bot::Bot::new(&config).await {
        Ok(mut bot) => bot.start().await,
        Err(e) => Err(e),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error!("{:?}", e);
            println!("{}", e.operator_message());
            ExitCode::FAILURE
        }
    }
}
