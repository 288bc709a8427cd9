use crate::error::IngestError;
use crate::resolver::{assign_block_ordinals, collect_tokens, Resolver};
use crate::runtime::logging::Logger;
use crate::runtime::text_source::TextSource;
use crate::sources::command::token_index::TokenIndex;
use crate::sources::configs::RunConfig;
use crate::sources::uic::adapter::process_document;
use crate::sources::uic::discover::{discover_documents, discover_files};
use crate::sources::xml::cross_references::{reference_pattern, ReferenceIndex};
use crate::types::{IngestOutput, RunSummary, UicDocument, Warning, WarningKind};
use crate::{info, warn};
use rayon::prelude::*;
use serde_json::json;
use std::path::PathBuf;

pub struct IngestContext<'a> {
    pub config: &'a RunConfig,
    pub source: &'a dyn TextSource,
    pub logger: &'a dyn Logger,
}

impl IngestContext<'_> {
    fn skip_file(&self, summary: &mut RunSummary, path: PathBuf, reason: String) {
        warn!(
            self,
            context: json!({ "path": path.display().to_string() }),
            "Skipping {}: {}",
            path.display(),
            reason
        );
        summary.warnings.push(Warning {
            kind: WarningKind::UnreadableFile,
            path: Some(path),
            message: reason,
        });
    }

    fn empty_corpus(&self, summary: &mut RunSummary, message: String) {
        warn!(self, "{}", message);
        summary.warnings.push(Warning {
            kind: WarningKind::EmptyCorpus,
            path: None,
            message,
        });
    }
}

fn validate_roots(config: &RunConfig) -> Result<(), IngestError> {
    if config.roots.is_empty() {
        return Err(IngestError::NoRoots);
    }
    if let Some(missing) = config.roots.iter().find(|root| !root.is_dir()) {
        return Err(IngestError::RootNotFound(missing.clone()));
    }
    Ok(())
}

/// Runs the whole pipeline: reference indices, document enrichment, token
/// index, resolution. Per-file failures are skipped and reported in the summary.
pub fn ingest_roots(
    config: &RunConfig,
    source: &dyn TextSource,
    logger: &dyn Logger,
) -> Result<IngestOutput, IngestError> {
    validate_roots(config)?;
    let ctx = IngestContext {
        config,
        source,
        logger,
    };
    let mut summary = RunSummary {
        generated_at: chrono::Utc::now().to_rfc3339(),
        ..RunSummary::default()
    };

    let references = build_reference_indices(&ctx, &mut summary)?;

    let command_files = discover_files(&config.roots, &config.command_extension)
        .map_err(IngestError::Config)?;
    info!(ctx, "[Index] {} .{} files found", command_files.len(), config.command_extension);

    let document_paths = discover_documents(&config.roots, &config.document_extension)
        .map_err(IngestError::Config)?;
    if document_paths.is_empty() {
        return Err(IngestError::NoDocuments(config.document_extension.clone()));
    }
    summary.documents_found = document_paths.len();

    let documents = process_documents(&ctx, &mut summary, &document_paths);
    summary.documents_processed = documents.len();

    let tokens = collect_tokens(&documents);
    summary.tokens = tokens.len();
    if command_files.is_empty() {
        ctx.empty_corpus(
            &mut summary,
            format!("No .{} files found; command columns stay empty", config.command_extension),
        );
    }
    let token_scan = TokenIndex::build(&tokens, &command_files, source);
    for (path, reason) in token_scan.skipped {
        ctx.skip_file(&mut summary, path, reason);
    }
    summary.command_files = token_scan.files_scanned;
    summary.matched_tokens = token_scan.index.len();
    info!(
        ctx,
        "[Index] {} of {} tokens found in {} command files",
        summary.matched_tokens,
        summary.tokens,
        summary.command_files
    );

    let resolver = Resolver::new(&token_scan.index, &references);
    let mut rows = documents
        .par_iter()
        .map(|document| resolver.resolve_document(document))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
    assign_block_ordinals(&mut rows);
    summary.rows = rows.len();

    info!(
        ctx,
        "[Resolve] {} rows from {} of {} documents",
        summary.rows,
        summary.documents_processed,
        summary.documents_found
    );

    Ok(IngestOutput { rows, summary })
}

fn build_reference_indices(
    ctx: &IngestContext<'_>,
    summary: &mut RunSummary,
) -> Result<Vec<ReferenceIndex>, IngestError> {
    let config = ctx.config;
    let pattern = reference_pattern(&config.reference_attribute, &config.document_extension)
        .map_err(IngestError::Config)?;

    let mut indices = Vec::with_capacity(config.roots.len());
    for (position, root) in config.roots.iter().enumerate() {
        let files = discover_files(std::slice::from_ref(root), &config.reference_extension)
            .map_err(IngestError::Config)?;
        let scan = ReferenceIndex::build(&files, ctx.source, &pattern);
        for (path, reason) in scan.skipped {
            ctx.skip_file(summary, path, reason);
        }

        info!(
            ctx,
            "[Index] Root {}: {} document keys referenced from {} .{} files",
            position + 1,
            scan.index.len(),
            files.len(),
            config.reference_extension
        );
        if scan.index.is_empty() {
            ctx.empty_corpus(
                summary,
                format!("No document references found under {}", root.display()),
            );
        }
        summary.reference_keys.push(scan.index.len());
        indices.push(scan.index);
    }

    Ok(indices)
}

fn process_documents(
    ctx: &IngestContext<'_>,
    summary: &mut RunSummary,
    paths: &[PathBuf],
) -> Vec<UicDocument> {
    let results = paths
        .par_iter()
        .map(|path| process_document(ctx.source, path))
        .collect::<Vec<_>>();

    let mut documents = Vec::with_capacity(results.len());
    for (path, result) in paths.iter().zip(results) {
        match result {
            Ok(document) => documents.push(document),
            Err(reason) => ctx.skip_file(summary, path.clone(), reason),
        }
    }
    documents
}
