use std::path::PathBuf;
use uic_xref::error::IngestError;
use uic_xref::ingest::ingest_roots;
use uic_xref::runtime::logging::TracingLogger;
use uic_xref::runtime::output::{write_rows, write_rows_to_file};
use uic_xref::runtime::text_source::FsTextSource;
use uic_xref::sources::configs::RunConfig;

fn main() {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() || args.len() > 2 {
        eprintln!("Usage: uic-xref <config.json> [output.jsonl]");
        std::process::exit(2);
    }

    let config_path = args.remove(0);
    let mut config = match RunConfig::load_from_file(&config_path) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("[Main] {}", err);
            std::process::exit(1);
        }
    };
    if let Some(output) = args.pop() {
        config.output = Some(PathBuf::from(output));
    }

    let source = FsTextSource::new(config.encodings.clone());
    let output = match ingest_roots(&config, &source, &TracingLogger) {
        Ok(output) => output,
        Err(err) => {
            tracing::error!("[Main] Run aborted: {}", err);
            std::process::exit(1);
        }
    };

    let written = match &config.output {
        Some(path) => write_rows_to_file(&output.rows, path),
        None => write_rows(&output.rows, std::io::stdout().lock()),
    }
    .map_err(IngestError::Output);
    if let Err(err) = written {
        tracing::error!("[Main] {}", err);
        std::process::exit(1);
    }

    match serde_json::to_string(&output.summary) {
        Ok(summary) => tracing::info!("[Main] Summary: {}", summary),
        Err(err) => tracing::warn!("[Main] Failed to render summary: {}", err),
    }
}
