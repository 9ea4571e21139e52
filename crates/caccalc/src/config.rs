//! Application configuration from CLI flags and environment.
//!
//! Numeric fields are taken as raw text and read leniently: blank, invalid,
//! non-finite or negative values count as 0.

use std::path::PathBuf;

use clap::Parser;

use caccalc_cli::OutputFormat;
use caccalc_core::{parse_number, CacError, CacInputs, TimeUnit, Variant};

/// CacCalc — customer acquisition cost calculator.
///
/// Computes blended CAC, paid CAC, LTV:CAC and break-even orders from
/// acquisition spend and new customers.
#[derive(Parser, Debug)]
#[command(name = "caccalc", version, about)]
pub struct AppConfig {
    /// Calculator variant: basic, loaded, or ecommerce.
    #[arg(long, default_value = "basic", env = "CACCALC_VARIANT")]
    pub variant: String,

    /// New customers acquired in the period.
    #[arg(
        short = 'n',
        long,
        default_value = "",
        env = "CACCALC_NEW_CUSTOMERS",
        allow_hyphen_values = true,
    )]
    pub new_customers: String,

    /// Customers attributed to paid channels (loaded variant).
    #[arg(long, default_value = "", env = "CACCALC_PAID_CUSTOMERS", allow_hyphen_values = true)]
    pub paid_customers: String,

    /// Paid-channel acquisition spend.
    #[arg(
        short = 'p',
        long,
        default_value = "",
        env = "CACCALC_PAID_SPEND",
        allow_hyphen_values = true,
    )]
    pub paid_spend: String,

    /// Other acquisition spend (content, events, tools).
    #[arg(
        short = 'x',
        long,
        default_value = "",
        env = "CACCALC_OTHER_SPEND",
        allow_hyphen_values = true,
    )]
    pub other_spend: String,

    /// Sales and marketing salaries (loaded variant).
    #[arg(long, default_value = "", env = "CACCALC_SALARY_SPEND", allow_hyphen_values = true)]
    pub salary_spend: String,

    /// Overhead attributed to acquisition (loaded variant).
    #[arg(long, default_value = "", env = "CACCALC_OVERHEAD_SPEND", allow_hyphen_values = true)]
    pub overhead_spend: String,

    /// Lifetime value per customer.
    #[arg(short = 'l', long, default_value = "", env = "CACCALC_LTV", allow_hyphen_values = true)]
    pub ltv: String,

    /// Gross margin percent (ecommerce variant).
    #[arg(long, default_value = "", env = "CACCALC_GROSS_MARGIN", allow_hyphen_values = true)]
    pub gross_margin: String,

    /// Average order value (ecommerce variant).
    #[arg(long, default_value = "", env = "CACCALC_AOV", allow_hyphen_values = true)]
    pub aov: String,

    /// Period unit: month, week, or year.
    #[arg(short = 'u', long, default_value = "month", env = "CACCALC_TIME_UNIT")]
    pub time_unit: String,

    /// Period label, e.g. "Q1 2025".
    #[arg(long, default_value = "", env = "CACCALC_PERIOD")]
    pub period: String,

    /// Output format: text, json, or export.
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Also write the rendered report to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only output the blended CAC).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn variant(&self) -> Result<Variant, CacError> {
        self.variant.parse()
    }

    pub fn output_format(&self) -> Result<OutputFormat, CacError> {
        self.format.parse()
    }

    /// Build the input snapshot from the raw field text.
    pub fn inputs(&self) -> Result<CacInputs, CacError> {
        Ok(CacInputs {
            new_customers: parse_number(&self.new_customers),
            paid_customers: parse_number(&self.paid_customers),
            paid_spend: parse_number(&self.paid_spend),
            other_spend: parse_number(&self.other_spend),
            salary_spend: parse_number(&self.salary_spend),
            overhead_spend: parse_number(&self.overhead_spend),
            ltv_per_customer: parse_number(&self.ltv),
            gross_margin_percent: parse_number(&self.gross_margin),
            average_order_value: parse_number(&self.aov),
            time_unit: self.time_unit.parse::<TimeUnit>()?,
            period_label: self.period.trim().to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        let mut argv = vec!["caccalc"];
        argv.extend_from_slice(args);
        AppConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.variant().unwrap(), Variant::Basic);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
        let inputs = config.inputs().unwrap();
        assert_eq!(inputs.new_customers, 0.0);
        assert_eq!(inputs.time_unit, TimeUnit::Month);
        assert!(inputs.period_label.is_empty());
    }

    #[test]
    fn reference_fields() {
        let config = parse(&["-n", "250", "-p", "12000", "--other-spend", "8000", "-l", "420"]);
        let inputs = config.inputs().unwrap();
        assert_eq!(inputs.new_customers, 250.0);
        assert_eq!(inputs.paid_spend, 12_000.0);
        assert_eq!(inputs.other_spend, 8_000.0);
        assert_eq!(inputs.ltv_per_customer, 420.0);
    }

    #[test]
    fn other_spend_short_flag() {
        let config = parse(&["-n", "250", "-x", "8000"]);
        let inputs = config.inputs().unwrap();
        assert_eq!(inputs.other_spend, 8_000.0);
        assert_eq!(inputs.new_customers, 250.0);
    }

    #[test]
    fn invalid_numbers_read_as_zero() {
        let config = parse(&["-n", "lots", "-p", "-500", "--aov", "inf"]);
        let inputs = config.inputs().unwrap();
        assert_eq!(inputs.new_customers, 0.0);
        assert_eq!(inputs.paid_spend, 0.0);
        assert_eq!(inputs.average_order_value, 0.0);
    }

    #[test]
    fn unknown_time_unit() {
        let config = parse(&["-u", "fortnight"]);
        assert_eq!(
            config.inputs().unwrap_err(),
            CacError::UnknownTimeUnit("fortnight".into())
        );
    }

    #[test]
    fn unknown_variant_and_format() {
        let config = parse(&["--variant", "saas", "-f", "xml"]);
        assert!(config.variant().is_err());
        assert!(config.output_format().is_err());
    }

    #[test]
    fn period_label_trimmed() {
        let config = parse(&["--period", "  Q1 2025  ", "-u", "week"]);
        let inputs = config.inputs().unwrap();
        assert_eq!(inputs.period_label, "Q1 2025");
        assert_eq!(inputs.time_unit, TimeUnit::Week);
    }
}
