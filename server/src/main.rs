#![recursion_limit = "256"]

mod config;
mod routes;
mod startup;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = startup::run(|key| std::env::var(key).ok()).await {
        tracing::error!(error = %e, "startup failed");
        std::process::exit(1);
    }
}
