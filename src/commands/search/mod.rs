//! `search` command: run one engine or all of them between two vertices

mod human;
mod json;

use std::path::Path;

use starpath_core::bail_usage;
use starpath_core::error::{Result, StarpathError};
use starpath_core::search::{search, Algorithm, SearchOptions, SearchResult};

use crate::cli::{AlgorithmChoice, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{load_graph, resolve_vertex};

/// Arguments of one `search` invocation
pub struct SearchRequest<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub algorithm: Option<AlgorithmChoice>,
    pub tolerance: Option<f64>,
    pub allow_negative_weights: bool,
    pub require_path: bool,
}

/// Result or failure of one engine
pub type Outcome = (Algorithm, Result<SearchResult>);

/// Execute the search command
pub fn execute(ctx: &CommandContext, graph_path: &Path, request: &SearchRequest) -> Result<()> {
    let (graph, _report) = load_graph(ctx, graph_path)?;
    let source = resolve_vertex(&graph, request.from)?;
    let target = resolve_vertex(&graph, request.to)?;
    let options = search_options(ctx, request)?;

    let choice = request
        .algorithm
        .unwrap_or(AlgorithmChoice::One(ctx.config.search.algorithm));

    let outcomes: Vec<Outcome> = choice
        .algorithms()
        .into_iter()
        .map(|algorithm| {
            let outcome = search(algorithm, &graph, source, target, options);
            if let Err(e) = &outcome {
                tracing::debug!(%algorithm, error = %e, "engine failed");
            }
            (algorithm, outcome)
        })
        .collect();

    tracing::debug!(elapsed = ?ctx.start.elapsed(), engines = outcomes.len(), "search");

    // A failure is only the command's failure when no engine produced an answer
    if outcomes.iter().all(|(_, outcome)| outcome.is_err()) {
        return outcomes
            .into_iter()
            .find_map(|(_, outcome)| outcome.err())
            .map_or(Ok(()), Err);
    }

    if request.require_path
        && outcomes
            .iter()
            .all(|(_, outcome)| outcome.as_ref().map_or(true, SearchResult::is_empty))
    {
        return Err(StarpathError::NoPathFound {
            from: source,
            to: target,
        });
    }

    match ctx.cli.format {
        OutputFormat::Human => human::output_outcomes(ctx.cli, &graph, source, target, &outcomes),
        OutputFormat::Json => json::output_outcomes(&graph, source, target, &outcomes)?,
    }
    Ok(())
}

/// Configured search options with command-line overrides applied
fn search_options(ctx: &CommandContext, request: &SearchRequest) -> Result<SearchOptions> {
    let mut options = ctx.config.search.options();
    if let Some(tolerance) = request.tolerance {
        if !tolerance.is_finite() || tolerance < 0.0 {
            bail_usage!(format!(
                "--tolerance must be a non-negative number, got {tolerance}"
            ));
        }
        options.tolerance = tolerance;
    }
    if request.allow_negative_weights {
        options.reject_negative_weights = false;
    }
    Ok(options)
}
