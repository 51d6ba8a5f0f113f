//! Terminal rendering of an analysis result.
//!
//! A summary card followed by the risk and deadline alerts as Arrow
//! pretty-printed tables.

use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use clausewatch_core::{AnalysisResult, DeadlineStatus, alerts};

const MAX_SKIPPED: usize = 10;
const MAX_SENTENCE_CHARS: usize = 80;

/// Print the summary card, alert tables and skipped sentences.
pub fn print_result(result: &AnalysisResult) -> anyhow::Result<()> {
    println!("=== {} ===", result.document_name);
    println!();

    print_summary(result);

    let risks = shorten_sentences(alerts::risk_alerts_batch(result)?)?;
    print_table("Risk Alerts", risks)?;

    let deadlines = shorten_sentences(alerts::deadline_alerts_batch(result)?)?;
    print_table("Deadline Alerts", deadlines)?;

    print_skipped(result);
    Ok(())
}

// ── Sections ──

fn print_summary(result: &AnalysisResult) {
    let count = |s| result.deadlines_with_status(s).count();

    println!("Summary");
    println!("  {:<26} {}", "risk_alerts", result.risk_alerts.len());
    println!("  {:<26} {}", "deadline_alerts", result.deadline_alerts.len());
    println!("  {:<26} {}", "overdue", count(DeadlineStatus::Overdue));
    println!("  {:<26} {}", "upcoming", count(DeadlineStatus::Upcoming));
    println!("  {:<26} {}", "ok", count(DeadlineStatus::Ok));
    if result.skipped_count() > 0 {
        println!("  {:<26} {}", "skipped_sentences", result.skipped_count());
    }
    println!();
}

fn print_table(header: &str, batch: RecordBatch) -> anyhow::Result<()> {
    if batch.num_rows() == 0 {
        return Ok(());
    }
    println!("{header} ({})", batch.num_rows());
    println!("{}", pretty_format_batches(&[batch])?);
    println!();
    Ok(())
}

fn print_skipped(result: &AnalysisResult) {
    let skipped = &result.skipped_sentences;
    if skipped.is_empty() {
        return;
    }

    println!("Skipped Sentences ({}):", skipped.len());
    for s in skipped.iter().take(MAX_SKIPPED) {
        println!("  {}", truncate(&s.source_sentence, MAX_SENTENCE_CHARS));
        println!("    reason: {}", s.reason);
    }
    if skipped.len() > MAX_SKIPPED {
        println!("  ... and {} more", skipped.len() - MAX_SKIPPED);
    }
    println!();
}

// ── Helpers ──

/// Replace the `source_sentence` column with a truncated copy for display.
fn shorten_sentences(batch: RecordBatch) -> anyhow::Result<RecordBatch> {
    use arrow::array::{Array, ArrayRef, StringArray};
    use std::sync::Arc;

    let schema = batch.schema();
    let Ok(idx) = schema.index_of("source_sentence") else {
        return Ok(batch);
    };
    let Some(sentences) = batch.column(idx).as_any().downcast_ref::<StringArray>() else {
        return Ok(batch);
    };

    let short: StringArray = (0..sentences.len())
        .map(|i| Some(truncate(sentences.value(i), MAX_SENTENCE_CHARS)))
        .collect();

    let mut columns: Vec<ArrayRef> = batch.columns().to_vec();
    columns[idx] = Arc::new(short);
    Ok(RecordBatch::try_new(schema, columns)?)
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{head}...")
}
