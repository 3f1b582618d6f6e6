//! Report exports for stored assessments.
//!
//! - [`csv`]: single-assessment and comparison spreadsheets
//! - [`html`]: a self-contained printable report
//! - [`text`]: terminal rendering of a recommendation report
//!
//! Every formatter is a pure function of its inputs; nothing is written to
//! disk here.

pub mod csv;
mod filename;
pub mod html;
pub mod text;

pub use csv::{assessment_csv, comparison_csv, quote};
pub use filename::export_filename;
pub use html::print_html;
pub use text::recommendation_text;
