use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::engine::{QueryEngine, QueryError};

/// One answer of the report, serialised as a `query,value` CSV row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReportRow {
    pub query: String,
    pub value: String,
}

impl ReportRow {
    fn new(query: &str, value: impl Into<String>) -> Self {
        ReportRow {
            query: query.to_owned(),
            value: value.into(),
        }
    }
}

fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Runs every query against the engine. Per-client rows are only added
/// when a client name is given.
pub fn build_report(
    engine: &QueryEngine,
    client_full_name: Option<&str>,
) -> Result<Vec<ReportRow>, QueryError> {
    let mut rows = vec![
        ReportRow::new(
            "total_amount",
            format_amount(engine.total_transaction_amount()?),
        ),
        ReportRow::new("max_amount", format_amount(engine.max_transaction_amount()?)),
        ReportRow::new(
            "unique_clients",
            engine.count_unique_clients()?.to_string(),
        ),
        ReportRow::new("top_sender", engine.top_sender()?.unwrap_or_default()),
    ];

    for id in engine.unsolved_issue_ids() {
        rows.push(ReportRow::new("unsolved_issue_id", id.to_string()));
    }

    for message in engine.all_solved_issue_messages() {
        rows.push(ReportRow::new(
            "solved_issue_message",
            message.unwrap_or_default(),
        ));
    }

    for tx in engine.top_3_transactions_by_amount()? {
        let mtn = tx.mtn().map(|m| m.to_string()).unwrap_or_default();
        let amount = format_amount(tx.required_amount()?);
        rows.push(ReportRow::new("top_transaction", format!("{mtn}:{amount}")));
    }

    for (beneficiary, txs) in engine.transactions_by_beneficiary_name()? {
        rows.push(ReportRow::new(
            "beneficiary_transactions",
            format!("{beneficiary}:{}", txs.len()),
        ));
    }

    if let Some(client) = client_full_name {
        rows.push(ReportRow::new(
            "amount_sent_by",
            format_amount(engine.total_transaction_amount_sent_by(client)?),
        ));
        rows.push(ReportRow::new(
            "has_open_compliance_issues",
            engine.has_open_compliance_issues(client)?.to_string(),
        ));
    }

    Ok(rows)
}

pub fn write_report<W: Write>(rows: &[ReportRow], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    log::debug!("Starting report serialisation");
    for row in rows {
        log::debug!("Serialising report row: {row:?}");
        wtr.serialize(row)
            .with_context(|| format!("Cannot serialise report row {}", row.query))?;
    }

    log::debug!("Report serialisation done -> Flushing");
    wtr.flush()?;

    Ok(())
}
