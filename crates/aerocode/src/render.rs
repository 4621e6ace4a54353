//! Text and JSON rendering of records, summaries and timelines.
//!
//! Three output formats are supported. `plain` prints one tab-separated line
//! per record with no header, `table` aligns columns under Portuguese
//! headers, and `json` pretty-prints the underlying data.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aggregate::StatusSummary;
use crate::classify::{Classification, StageState};
use crate::domain::{Aircraft, Category, Employee, Inspection, Part, Record, Stage};
use crate::error::Result;
use crate::timeline::Timeline;
use crate::view::View;

/// Output format for rendered data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated lines without a header
    Plain,
    /// Aligned table with a header
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// One column of a record table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Header text.
    pub header: &'static str,
    /// Record field shown in the column.
    pub field: &'static str,
    /// Text appended to every cell, e.g. `%`.
    pub suffix: &'static str,
}

const fn col(header: &'static str, field: &'static str) -> Column {
    Column {
        header,
        field,
        suffix: "",
    }
}

const fn percent(header: &'static str, field: &'static str) -> Column {
    Column {
        header,
        field,
        suffix: "%",
    }
}

/// A record type with a fixed table layout.
pub trait Tabular: Record + Serialize {
    /// Columns in display order.
    const COLUMNS: &'static [Column];

    /// Fields of the detail view of a single record.
    const DETAIL: &'static [Column] = Self::COLUMNS;
}

impl Tabular for Aircraft {
    const COLUMNS: &'static [Column] = &[
        col("ID", "id"),
        col("Modelo", "model"),
        col("Tipo", "type"),
        col("Status", "status"),
        percent("Progresso", "progress"),
        col("Início", "startDate"),
        col("Previsão", "estimatedCompletion"),
    ];
}

impl Tabular for Employee {
    const COLUMNS: &'static [Column] = &[
        col("ID", "id"),
        col("Iniciais", "initials"),
        col("Nome", "name"),
        col("Cargo", "role"),
        col("Departamento", "department"),
        col("E-mail", "email"),
        col("Telefone", "phone"),
        col("Status", "status"),
    ];
}

impl Tabular for Part {
    const COLUMNS: &'static [Column] = &[
        col("ID", "id"),
        col("Nome", "name"),
        col("Categoria", "category"),
        col("Quantidade", "quantity"),
        col("Mínimo", "minQuantity"),
        col("Localização", "location"),
        col("Fornecedor", "supplier"),
        col("Status", "status"),
    ];
}

impl Tabular for Stage {
    const COLUMNS: &'static [Column] = &[
        col("ID", "id"),
        col("Etapa", "name"),
        col("Aeronave", "aircraft"),
        col("Status", "status"),
        col("Início", "startDate"),
        col("Término", "endDate"),
        col("Responsável", "responsible"),
        percent("Progresso", "progress"),
    ];
}

impl Tabular for Inspection {
    const COLUMNS: &'static [Column] = &[
        col("ID", "id"),
        col("Teste", "name"),
        col("Aeronave", "aircraft"),
        col("Tipo", "type"),
        col("Data", "date"),
        col("Resultado", "result"),
        col("Inspetor", "inspector"),
    ];

    const DETAIL: &'static [Column] = &[
        col("ID", "id"),
        col("Teste", "name"),
        col("Aeronave", "aircraft"),
        col("Tipo", "type"),
        col("Data", "date"),
        col("Resultado", "result"),
        col("Inspetor", "inspector"),
        col("Observações", "notes"),
    ];
}

fn cell<R: Record>(record: &R, column: &Column) -> String {
    let value = record.field(column.field).unwrap_or_default();
    format!("{value}{}", column.suffix)
}

fn cells<R: Tabular>(record: &R) -> Vec<String> {
    R::COLUMNS.iter().map(|column| cell(record, column)).collect()
}

/// Align `rows` under `headers`. Widths are measured in characters.
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |row: &[&str]| -> String {
        let padded: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(line(headers));
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push(rule.join("  "));
    for row in rows {
        let row: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push(line(&row));
    }
    out.join("\n")
}

/// Render a list of records.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn records<R: Tabular>(records: &[&R], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Plain => Ok(records
            .iter()
            .map(|record| cells(*record).join("\t"))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => {
            let headers: Vec<&str> = R::COLUMNS.iter().map(|c| c.header).collect();
            let rows: Vec<Vec<String>> = records.iter().map(|record| cells(*record)).collect();
            Ok(table(&headers, &rows))
        }
    }
}

/// Render every field of a single record, one per line.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn record<R: Tabular>(record: &R, format: OutputFormat) -> Result<String> {
    let rows: Vec<Vec<String>> = R::DETAIL
        .iter()
        .map(|column| vec![column.header.to_string(), cell(record, column)])
        .collect();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Plain => Ok(rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => Ok(table(&["Campo", "Valor"], &rows)),
    }
}

/// Render a view's summary tiles.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn summary(view: View, summary: &StatusSummary, format: OutputFormat) -> Result<String> {
    let heading = format!("Total de {}: {}", view.label(), summary.total);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Plain => {
            let mut lines = vec![heading];
            lines.extend(
                summary
                    .tiles
                    .iter()
                    .map(|tile| format!("{}\t{}", tile.label, tile.count)),
            );
            Ok(lines.join("\n"))
        }
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = summary
                .tiles
                .iter()
                .map(|tile| {
                    vec![
                        tile.label.to_string(),
                        tile.count.to_string(),
                        tile.tone.to_string(),
                    ]
                })
                .collect();
            Ok(format!(
                "{heading}\n\n{}",
                table(&["Status", "Total", "Tom"], &rows)
            ))
        }
    }
}

/// Render stage timelines, one block per aircraft.
///
/// Each stage gets its status glyph; every stage but the last of its group
/// is followed by a connector line.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn timeline(timeline: &Timeline<'_>, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(timeline)?);
    }

    let mut blocks = Vec::with_capacity(timeline.len());
    for aircraft in timeline.aircraft() {
        let mut lines = vec![format!("Aeronave: {aircraft}")];
        for entry in timeline.entries(aircraft) {
            let stage = entry.stage;
            let glyph = StageState::from(stage.status).icon().glyph();
            lines.push(format!(
                "  {glyph} {}  {}  [{}]  {}%",
                stage.id,
                stage.name,
                stage.status.label(),
                stage.progress
            ));
            lines.push(format!(
                "  {}   {} · {} → {}",
                if entry.is_last() { ' ' } else { '│' },
                stage.responsible,
                stage.start_date,
                stage.end_date
            ));
        }
        let block: Vec<String> = lines
            .into_iter()
            .map(|line| line.trim_end().to_string())
            .collect();
        blocks.push(block.join("\n"));
    }
    Ok(blocks.join("\n\n"))
}

/// Render the classification of a status string.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn classification(
    status: &str,
    classification: Classification,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
            "status": status,
            "classification": classification,
            "tone": classification.tone(),
        }))?),
        OutputFormat::Plain | OutputFormat::Table => Ok(format!(
            "{status}: {} ({})",
            classification.tag(),
            classification.tone()
        )),
    }
}

/// Render the view catalogue.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn views(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let views: Vec<serde_json::Value> = View::ALL
                .iter()
                .map(|view| {
                    serde_json::json!({
                        "id": view.id(),
                        "label": view.label(),
                        "title": view.title(),
                        "domain": view.domain(),
                        "searchFields": view.search_fields(),
                    })
                })
                .collect();
            Ok(serde_json::to_string_pretty(&views)?)
        }
        OutputFormat::Plain => Ok(View::ALL
            .iter()
            .map(|view| format!("{}\t{}", view.id(), view.title()))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = View::ALL
                .iter()
                .map(|view| {
                    vec![
                        view.id().to_string(),
                        view.title().to_string(),
                        view.search_fields().join(", "),
                    ]
                })
                .collect();
            Ok(table(&["Visão", "Título", "Busca"], &rows))
        }
    }
}
