//! Service pricing projection: formatted prices per service type for one
//! (country, product type) pair, and the table rows derived from them.

pub mod columns;
pub mod dto;
pub mod table;

pub use columns::{table_columns, CellAlignment, ColumnType, TableColumn};
pub use dto::{PricingResult, TableRow};
pub use table::{build_table_rows, MISSING_AMOUNT};
