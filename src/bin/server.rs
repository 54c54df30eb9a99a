//! figures REST API server.
//!
//! Formats values over HTTP with the same operations as the CLI.
//!
//! Run with: `cargo run --bin figures-server --features server`
//!
//! Environment variables:
//! - `FIGURES_PORT` - Port to listen on (default: 8080)
//! - `FIGURES_HOST` - Host to bind to (default: 0.0.0.0)
//! - `FIGURES_API_TOKEN` - Bearer token for authentication (optional, if set all requests require it)

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use figures::cli::args::Operation;
use figures::format::address::DEFAULT_PREFIX_LEN;
use figures::format::number::{DEFAULT_MAX_PRECISION, DEFAULT_MIN_PRECISION};
use figures::format::percent::{DEFAULT_FALLBACK, DEFAULT_PRECISION};
use figures::orchestrator;
use figures::output::json::JsonOutput;

/// Server configuration from environment.
#[derive(Clone)]
struct Config {
    port: u16,
    host: String,
    api_token: Option<String>,
}

impl Config {
    fn from_env() -> Self {
        Self {
            port: std::env::var("FIGURES_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            host: std::env::var("FIGURES_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_token: std::env::var("FIGURES_API_TOKEN")
                .ok()
                .filter(|s| !s.is_empty()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "figures_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    if config.api_token.is_some() {
        tracing::info!("API token authentication enabled");
    } else {
        tracing::warn!("No FIGURES_API_TOKEN set - API is unauthenticated");
    }

    let shared_config = Arc::new(config);

    let app = Router::new()
        .route("/health", get(health))
        .route("/format", post(format_value))
        .with_state(shared_config)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("figures-server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Body of `POST /format`.
///
/// `value` may be a JSON number, a string, or null/absent. Options not used by the
/// named operation are ignored.
#[derive(Debug, Deserialize)]
struct FormatRequest {
    operation: String,
    #[serde(default)]
    value: Value,
    min: Option<usize>,
    max: Option<usize>,
    usd: Option<bool>,
    precision: Option<usize>,
    fallback: Option<String>,
    classes: Option<Vec<String>>,
    address: Option<String>,
    prefix: Option<usize>,
}

/// Format one value.
///
/// Requires `Authorization: Bearer <token>` header if `FIGURES_API_TOKEN` is set.
async fn format_value(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    Json(request): Json<FormatRequest>,
) -> Response {
    if let Some(expected_token) = &config.api_token {
        let auth_header = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        let provided_token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .unwrap_or("");

        if provided_token != expected_token {
            return error_response(StatusCode::UNAUTHORIZED, "Invalid or missing bearer token");
        }
    }

    let operation = match to_operation(request) {
        Ok(operation) => operation,
        Err(message) => {
            tracing::debug!(%message, "rejected format request");
            return error_response(StatusCode::BAD_REQUEST, &message);
        }
    };

    let formatted = orchestrator::format(&operation);
    tracing::debug!(
        operation = formatted.operation,
        output = %formatted.output,
        "formatted value"
    );
    (StatusCode::OK, Json(JsonOutput::new(&formatted))).into_response()
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Map a request onto the CLI's operation set.
fn to_operation(request: FormatRequest) -> Result<Operation, String> {
    let FormatRequest {
        operation,
        value,
        min,
        max,
        usd,
        precision,
        fallback,
        classes,
        address,
        prefix,
    } = request;

    match operation.as_str() {
        "number" => Ok(Operation::Number {
            value: value_text(value)?,
            min: min.unwrap_or(DEFAULT_MIN_PRECISION),
            max: max.unwrap_or(DEFAULT_MAX_PRECISION),
        }),
        "usd" => Ok(Operation::Usd {
            value: value_text(value)?,
        }),
        "scale" => Ok(Operation::Scale {
            value: value_text(value)?,
            usd: usd.unwrap_or(false),
        }),
        "percent" => Ok(Operation::Percent {
            value: value_text(value)?,
            precision: precision.unwrap_or(DEFAULT_PRECISION),
            fallback: fallback.unwrap_or_else(|| DEFAULT_FALLBACK.to_string()),
        }),
        "classes" => Ok(Operation::Classes {
            classes: classes.unwrap_or_default(),
        }),
        "address" => Ok(Operation::Address {
            address: address.ok_or("Missing required field: 'address'")?,
            prefix: prefix.unwrap_or(DEFAULT_PREFIX_LEN),
        }),
        other => Err(format!("Unknown operation: '{other}'")),
    }
}

/// JSON numbers keep their shortest round-trip text, so parsing it back is exact.
fn value_text(value: Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::String(text) => Ok(Some(text)),
        _ => Err("'value' must be a number, a string, or null".to_string()),
    }
}
