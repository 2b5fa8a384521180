mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use dv_charge::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
