mod cli;
mod console;
mod infra;
mod routes;
mod server;

use fruit_advisor::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
