mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use island_impact::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
