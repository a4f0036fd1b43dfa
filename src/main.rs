//! Clinic scheduling service entry point

use clinic_scheduler::{
    auth::jwt::TokenService, config::AppConfig, db, db::Database, handlers::health,
    middleware::AppState, routes, services::AuthService, telemetry,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" => {
                println!("clinic-scheduler {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[1]);
                print_help();
                std::process::exit(1);
            }
        }
    }

    // .env files are a development convenience; production sets real
    // environment variables
    if let Ok(profile) = std::env::var("CLINIC_ENV") {
        dotenv::from_filename(format!(".env.{}", profile)).ok();
    } else {
        dotenv::from_filename(".env.local").ok();
        dotenv::dotenv().ok();
    }

    health::set_start_time();

    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        anyhow::anyhow!("Failed to load configuration: {}", e)
    })?;

    telemetry::init_telemetry(&config);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Clinic scheduler starting...");

    let pool = db::create_pool(&config.database).await?;
    db::run_migrations(&pool).await?;

    tracing::info!("Database initialized");

    let database = Database::new(pool);
    let token_service = Arc::new(TokenService::from_config(&config)?);
    let auth_service = Arc::new(AuthService::new(database.clone(), token_service.clone()));

    let state = Arc::new(AppState {
        config: config.clone(),
        db: database,
        auth_service,
        token_service,
    });

    let app = routes::create_router(state);

    let addr = &config.server.addr;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Terminate signal received, starting graceful shutdown");
        },
    }
}

fn print_help() {
    println!("clinic-scheduler {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: clinic-scheduler [options]");
    println!();
    println!("Options:");
    println!("  --version     Print version information and exit");
    println!("  --help        Print this help and exit");
    println!();
    println!("Environment variables:");
    println!("  All configuration is environment-driven with the CLINIC_ prefix,");
    println!("  e.g. CLINIC_DATABASE__URL, CLINIC_JWT__SECRET, CLINIC_SERVER__ADDR");
}
