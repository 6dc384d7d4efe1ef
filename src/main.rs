//! Greet GUI Client - Main Entry Point
//!
//! A native desktop demo client: greet a name, watch the backend clock tick.

use greet_gui::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Greet GUI Client...");

    // Run the GPUI application
    run_app();
}
