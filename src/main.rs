use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use canpath::calculators::bcpnp::BcPnpInput;
use canpath::calculators::crs::{ApplicantProfile, CrsResult};
use canpath::calculators::fsw::FswInput;
use canpath::calculators::{calculator_router, CalculatorService};
use canpath::config::AppConfig;
use canpath::error::AppError;
use canpath::telemetry;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "CanPath Calculators",
    about = "Serve or run the CanPath immigration point calculators from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a profile offline and print the breakdown
    Score {
        #[command(subcommand)]
        command: ScoreCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum ScoreCommand {
    /// Express Entry CRS score from a JSON applicant profile
    Crs(ScoreArgs),
    /// BC PNP skilled-worker score from a JSON input record
    Bcpnp(ScoreArgs),
    /// Federal Skilled Worker 67-point score from a JSON input record
    Fsw(ScoreArgs),
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Path to the JSON input file
    #[arg(long)]
    profile: PathBuf,
    /// Emit the raw result record as JSON instead of a rendered report
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Score { command } => run_score(command),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let service = Arc::new(CalculatorService::new(config.scoring));

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(calculator_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "calculator service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_score(command: ScoreCommand) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = CalculatorService::new(config.scoring);

    match command {
        ScoreCommand::Crs(args) => {
            let raw = std::fs::read_to_string(&args.profile)?;
            let profile: ApplicantProfile = serde_json::from_str(&raw)?;
            let result = service.score_crs(&profile)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                render_crs_report(&result);
            }
        }
        ScoreCommand::Bcpnp(args) => {
            let raw = std::fs::read_to_string(&args.profile)?;
            let input: BcPnpInput = serde_json::from_str(&raw)?;
            let result = service.score_bcpnp(&input);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("BC PNP score: {}", result.total_score);
                for entry in &result.breakdown.entries {
                    println!("- {}: {}", entry.label, entry.points);
                }
                println!("{}", result.message);
            }
        }
        ScoreCommand::Fsw(args) => {
            let raw = std::fs::read_to_string(&args.profile)?;
            let input: FswInput = serde_json::from_str(&raw)?;
            let result = service.score_fsw(&input);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "FSW score: {} ({})",
                    result.total_score,
                    if result.passes { "pass" } else { "fail" }
                );
                for entry in &result.breakdown.entries {
                    println!("- {}: {}", entry.label, entry.points);
                }
                println!("{}", result.message);
            }
        }
    }

    Ok(())
}

fn render_crs_report(result: &CrsResult) {
    println!("CRS score: {} ({:?})", result.total_score, result.scheme);
    for category in &result.breakdown.categories {
        println!("\n{}", category.name);
        for entry in &category.entries {
            println!("- {}: {}", entry.label, entry.points);
        }
        println!("小计: {}", category.subtotal);
    }
    println!("\n{}", result.message);
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
