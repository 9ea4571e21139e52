//! # caccalc-cli
//!
//! Report formatting, summary text, export lines and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{OutputFormat, ReportPresenter};
