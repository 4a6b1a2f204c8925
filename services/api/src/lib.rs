mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use concierge_hiring::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
