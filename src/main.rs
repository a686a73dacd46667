use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use growth_manager::config::AppConfig;
use growth_manager::error::AppError;
use growth_manager::telemetry;
use growth_manager::workflows::qualification::{
    qualification_router, CallAnalysisService, MemoryCallStore, MemoryProspectStore,
    ScoringEngine, TranscriptEvaluation,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct OpsState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Growth Manager",
    about = "Score sales-call transcripts and advance qualified prospects through the pipeline",
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
    /// Score a transcript locally and print the analysis
    Analyze(AnalyzeArgs),
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

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Transcript text to score
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,
    /// Read the transcript from a file instead
    #[arg(long)]
    file: Option<PathBuf>,
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
        Command::Analyze(args) => run_analyze(args),
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

    telemetry::init(&config.telemetry)?;

    let (calls, prospects) = if config.stores.seed_fixtures {
        (
            Arc::new(MemoryCallStore::with_fixtures()),
            Arc::new(MemoryProspectStore::with_fixtures()),
        )
    } else {
        (
            Arc::new(MemoryCallStore::default()),
            Arc::new(MemoryProspectStore::default()),
        )
    };
    let service = Arc::new(CallAnalysisService::new(
        ScoringEngine::default(),
        calls,
        prospects,
    ));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = OpsState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(qualification_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "growth manager qualification service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<OpsState>) -> impl IntoResponse {
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

async fn metrics_endpoint(State(state): State<OpsState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let transcript = match (args.text, args.file) {
        (Some(text), _) => Some(text),
        (None, Some(path)) => Some(std::fs::read_to_string(path)?),
        (None, None) => None,
    };

    let engine = ScoringEngine::default();
    let evaluation = engine.evaluate(transcript.as_deref());
    let qualified = engine.is_qualified(evaluation.analysis.score);

    render_evaluation(&evaluation, qualified);
    Ok(())
}

fn render_evaluation(evaluation: &TranscriptEvaluation, qualified: bool) {
    let analysis = &evaluation.analysis;

    println!("Transcript analysis");
    println!(
        "Score: {}/50 ({})",
        analysis.score,
        if qualified {
            "qualified for discovery"
        } else {
            "not yet qualified"
        }
    );
    println!("Business size: {}", analysis.business_size.label());

    if analysis.pain_points.is_empty() {
        println!("\nPain points: none detected");
    } else {
        println!("\nPain points");
        for pain_point in &analysis.pain_points {
            println!("- {}", pain_point.label());
        }
    }

    if !evaluation.components.is_empty() {
        println!("\nScore breakdown");
        for component in &evaluation.components {
            println!("- +{} {}", component.points, component.notes);
        }
    }

    if !analysis.qualification_reasons.is_empty() {
        println!("\nQualification reasons");
        for reason in &analysis.qualification_reasons {
            println!("- {reason}");
        }
    }
}
