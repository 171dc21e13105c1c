//! classroom-api server entry point
//!
//! ```bash
//! classroom-api --config classroom.yaml
//! CLASSROOM_PORT=8080 classroom-api
//! ```

use classroom::prelude::*;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "classroom-api")]
#[command(about = "Serve the principal teachers API", long_about = None)]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long, env = "CLASSROOM_CONFIG")]
    config: Option<String>,

    /// Interface to bind, overrides server.host
    #[arg(long, env = "CLASSROOM_HOST")]
    host: Option<String>,

    /// Port to bind, overrides server.port
    #[arg(short, long, env = "CLASSROOM_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::from_yaml_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    fmt().with_target(false).with_env_filter(filter).init();

    let teachers = InMemoryDataService::new();
    for teacher in config.teachers.iter().cloned() {
        teachers.create(teacher).await?;
    }
    let count = teachers.len()?;
    tracing::info!(count, "teacher store seeded");

    ServerBuilder::new()
        .with_teacher_service(teachers)
        .with_principal_prefix(config.server.principal_prefix.clone())
        .serve(&config.bind_address())
        .await
}
