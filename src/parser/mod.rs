pub mod columns;
pub mod deserializers;
pub mod pipeline;
pub mod types;

pub use pipeline::{parse_csv, parse_csv_reader, parse_rows, parse_xlsx, parse_xlsx_reader};
pub use types::{ParseOutput, ParseWarning, Row};
