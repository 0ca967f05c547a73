//! ERC Sentry API Server
//!
//! REST API for standards browsing, risky-pattern scanning, and
//! AI-backed standard recommendations.
//!
//! Usage:
//!   cargo run --bin sentry_api
//!
//! Environment:
//!   PORT / SENTRY_PORT   - Server port (default: 8080)
//!   SENTRY_HOST          - Server host (default: 0.0.0.0)
//!   OPENAI_API_KEY       - AI gateway credential (required per /recommend request)
//!   OPENAI_BASE_URL      - Gateway base URL (default: https://api.openai.com/v1)
//!   OPENAI_MODEL         - Completion model (default: gpt-4o-mini)
//!   GATEWAY_TIMEOUT_SECS - Outbound call timeout (default: 10)
//!   RUST_LOG             - Log level (default: info)

use erc_sentry::api::{create_router, handlers::AppState, start_cleanup_task};
use erc_sentry::{validate_catalog, SentryConfig, TelemetryCollector};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    print_banner();

    // Static tables are authoritative; a dangling reference is fatal.
    validate_catalog()?;
    info!("📚 Catalog validated: tables are referentially consistent");

    let config = SentryConfig::default();

    // Initialize telemetry
    let telemetry = Arc::new(TelemetryCollector::new());
    let telemetry_for_shutdown = telemetry.clone();

    // Create app state
    let state = Arc::new(AppState::new(&config, telemetry));

    // Start background cleanup task for rate limiter
    start_cleanup_task();
    info!("🧹 Background cleanup task started");

    // Create router
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🚀 ERC Sentry API starting on http://{}", addr);
    info!("");
    info!("Endpoints:");
    info!("  POST /v1/recommend        - AI standard recommendation");
    info!("  POST /v1/scan             - Scan pasted source for risky standards");
    info!("  POST /v1/compare          - Compatibility verdict for a pair");
    info!("  GET  /v1/standards        - Browse the catalog (?category=, ?q=)");
    info!("  GET  /v1/standards/:id    - One standard with annotations");
    info!("  GET  /v1/stats            - Service statistics");
    info!("  GET  /v1/health           - Health check");
    info!("");
    info!("Press Ctrl+C for graceful shutdown");
    info!("");

    // Start server with graceful shutdown
    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    // Graceful shutdown sequence
    info!("");
    info!("🛑 Shutdown signal received, cleaning up...");

    let stats = telemetry_for_shutdown.get_stats();
    info!("📊 Final statistics:");
    info!("   Scans: {}", stats.scans_total);
    info!("   Risky hits flagged: {}", stats.risky_hits_total);
    info!("   Comparisons: {}", stats.comparisons_total);
    info!("   Recommendations: {}", stats.recommendations_total);
    info!("   Gateway failures: {}", stats.gateway_failures_total);

    info!("👋 ERC Sentry API shutdown complete");

    Ok(())
}

fn print_banner() {
    println!(
        r#"
    ╔═══════════════════════════════════════════════╗
    ║                                               ║
    ║           E R C   S E N T R Y                 ║
    ║                                               ║
    ║     Standards Catalog · Risk Scanner          ║
    ║     Compatibility · AI Recommendations        ║
    ║                                               ║
    ╚═══════════════════════════════════════════════╝
    "#
    );
}
