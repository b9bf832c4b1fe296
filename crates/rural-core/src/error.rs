//! Error types for the rural investments dashboard

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Invalid investment amount on line {line}: {value:?}")]
    InvalidInvestment { line: u64, value: String },

    #[error("Total investment overflows on line {line}")]
    InvestmentOverflow { line: u64 },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

pub type Result<T> = std::result::Result<T, Error>;
