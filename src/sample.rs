//! `sample` command handler.

use crate::config::SampleConfig;
use crate::document::{count_leaves, document_strategy};
use anyhow::Context;
use std::io::Write;
use strategy_core::{DrawContext, Strategy};

/// Summary of one sampling run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleReport {
    /// Documents written
    pub documents: u64,

    /// Documents whose draw had to be retried at least once
    pub retried: u64,

    /// Largest leaf count seen
    pub max_leaves_seen: usize,

    /// Events noted while drawing, in order
    pub events: Vec<String>,
}

/// Generate `config.count` documents and write them to `out` as JSON lines.
pub fn run_sample(config: &SampleConfig, out: &mut impl Write) -> anyhow::Result<SampleReport> {
    let strategy = document_strategy(config);
    strategy
        .validate()
        .with_context(|| format!("Invalid document strategy {strategy:?}"))?;

    tracing::info!(
        count = config.count,
        max_leaves = config.max_leaves,
        tiers = strategy.tier_count(),
        "Sampling recursive documents"
    );

    let mut report = SampleReport::default();
    for index in 0..config.count {
        let mut ctx = DrawContext::with_config(&config.draw_config(index));
        let document = ctx
            .draw(&strategy)
            .with_context(|| format!("Failed to draw document {index}"))?;

        serde_json::to_writer(&mut *out, &document)?;
        writeln!(out)?;

        let events = ctx.take_events();
        if !events.is_empty() {
            report.retried += 1;
        }
        report.events.extend(events);
        report.max_leaves_seen = report.max_leaves_seen.max(count_leaves(&document));
        report.documents += 1;
    }

    tracing::info!(
        documents = report.documents,
        retried = report.retried,
        "Finished sampling"
    );
    Ok(report)
}
