//! Ticket analytics core for spreadsheet-style operations dashboards.
//!
//! Decodes a CSV or XLSX export into loosely-typed rows, then derives
//! three independent views over them: headline status metrics, ticket
//! counts per calendar day, and a breakdown by an arbitrary logical
//! category. The aggregators accept any already-materialized `&[Row]`,
//! so callers with their own decoding keep the parser out entirely.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod parser;

pub use analyzer::{
    category_breakdown, compute_metrics, compute_metrics_with, tickets_per_day, CategoryPoint,
    Metrics, TimePoint,
};
pub use config::AnalysisConfig;
pub use error::AppError;
pub use parser::{
    parse_csv, parse_csv_reader, parse_rows, parse_xlsx, parse_xlsx_reader, ParseOutput,
    ParseWarning, Row,
};

// ─── E2E Integration Tests ──────────────────────────────────────────────────
