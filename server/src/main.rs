#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use config::{MailerConfig, ServerConfig};
use services::mailer::{InquiryMailer, ResendMailer};

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        // A missing .env is normal in deployed environments.
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let server = ServerConfig::from_env().expect("invalid server configuration");

    // Mailer is optional: without it the site runs and the relay answers 500.
    let mailer: Option<Arc<dyn InquiryMailer>> = match MailerConfig::from_env() {
        Ok(config) => {
            tracing::info!(recipients = config.to.len(), "inquiry mailer initialized");
            Some(Arc::new(ResendMailer::new(config)) as Arc<dyn InquiryMailer>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "inquiry mailer not configured; email relay disabled");
            None
        }
    };

    let state = state::AppState::new(mailer);
    let relay_enabled = state.mailer_configured();
    let app = routes::leptos_app(state).expect("failed to build router");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", server.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = server.port, relay_enabled, "aricia site listening");
    axum::serve(listener, app).await.expect("server failed");
}
