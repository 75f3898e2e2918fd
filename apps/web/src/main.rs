use actix_web::{App, HttpServer};
use admitwise_web::middleware::cors::cors_middleware;
use admitwise_web::middleware::request_gate::RequestGate;
use admitwise_web::middleware::request_trace::RequestTrace;
use admitwise_web::middleware::structured_logger::StructuredLogger;
use admitwise_web::routes;
use admitwise_web::state::app_state::AppState;
use admitwise_web::state::security_config::SecurityConfig;
use admitwise_web::upstream::client::UpstreamClient;
use admitwise_web::{GateConfig, UpstreamConfig};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("WEB_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("WEB_PORT must be a valid port number");
            std::process::exit(1);
        });

    // The gate fails closed without a signing secret; refuse to start.
    let jwt = match std::env::var("WEB_JWT_SECRET") {
        Ok(jwt) if !jwt.is_empty() => jwt,
        _ => {
            eprintln!("WEB_JWT_SECRET must be set");
            std::process::exit(1);
        }
    };
    let security_config = SecurityConfig::new(jwt.as_bytes());
    let mut gate_config = GateConfig::site_default();
    gate_config.secure_cookies = std::env::var("WEB_SECURE_COOKIES")
        .unwrap_or_default()
        .parse::<bool>()
        .unwrap_or(false);

    let upstream_config = UpstreamConfig::from_env();
    let upstream = match UpstreamClient::new(&upstream_config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to build upstream client: {e}");
            std::process::exit(1);
        }
    };

    println!("Starting Admitwise web layer on http://{}:{}", host, port);

    let app_state = AppState::new(security_config.clone(), gate_config.clone(), upstream);
    let data = actix_web::web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(RequestGate::new(gate_config.clone(), security_config.clone()))
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
