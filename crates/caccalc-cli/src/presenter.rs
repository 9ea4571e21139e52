//! Report rendering: KPI block, summary, JSON and export text.

use std::fmt;
use std::str::FromStr;

use caccalc_core::{CacError, CacReport, LtvCacHealth, PaidDenominator};
use tracing::debug;

use crate::output::{
    format_count, format_currency, format_orders, format_ratio, period_text, PLACEHOLDER,
};
use crate::ui;

/// Shown instead of a summary when there are no new customers.
pub const NO_CUSTOMERS_GUIDANCE: &str =
    "Enter new customers and acquisition spend, then calculate CAC.";

/// How a report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// KPI block with tags followed by summary lines.
    #[default]
    Text,
    /// Pretty-printed JSON of the whole report.
    Json,
    /// `label: value` lines for pasting elsewhere.
    Export,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Export => "export",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = CacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "export" | "copy" => Ok(Self::Export),
            other => Err(CacError::UnknownFormat(other.to_string())),
        }
    }
}

/// One displayed metric with its explanatory tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: String,
    pub tag: String,
    /// Set on the row whose tag is coloured by LTV:CAC health.
    pub health: Option<LtvCacHealth>,
}

/// The metrics shown for a report, in display order.
#[must_use]
pub fn kpis(report: &CacReport) -> Vec<Kpi> {
    let config = report.variant.config();
    let inputs = &report.inputs;

    let spend_tag = if config.include_loaded_costs {
        "Paid + other + salary + overhead costs"
    } else {
        "Paid + other acquisition costs"
    };
    let paid_by_paid_customers = config.paid_denominator == PaidDenominator::PaidCustomers
        && inputs.paid_customers > 0.0;
    let paid_tag = if paid_by_paid_customers {
        "Paid spend ÷ paid customers"
    } else {
        "Paid spend ÷ new customers"
    };

    let mut kpis = vec![
        Kpi {
            label: "Blended CAC",
            value: format_currency(report.blended_cac),
            tag: "Total acquisition spend ÷ new customers".to_string(),
            health: None,
        },
        Kpi {
            label: "Paid CAC",
            value: format_currency(report.paid_cac),
            tag: paid_tag.to_string(),
            health: None,
        },
        Kpi {
            label: "Total acquisition spend",
            value: format_currency(Some(report.total_spend)),
            tag: spend_tag.to_string(),
            health: None,
        },
        Kpi {
            label: "LTV:CAC",
            value: format_ratio(report.ltv_cac_ratio),
            tag: report.health.guidance(config.vocabulary),
            health: Some(report.health),
        },
    ];

    if config.break_even {
        let tag = match report.gross_profit_per_order {
            Some(profit) => format!(
                "Gross profit per order: {}",
                format_currency(Some(profit))
            ),
            None => "Add AOV and gross margin to see break-even orders.".to_string(),
        };
        kpis.push(Kpi {
            label: "Orders to break even",
            value: format_orders(report.orders_to_break_even),
            tag,
            health: None,
        });
    }

    kpis
}

/// Plain-language summary lines.
///
/// Without new customers this is the single guidance line.
#[must_use]
pub fn summary_lines(report: &CacReport) -> Vec<String> {
    if !report.has_customers() {
        return vec![NO_CUSTOMERS_GUIDANCE.to_string()];
    }
    let inputs = &report.inputs;
    let period = period_text(&inputs.period_label, inputs.time_unit);

    let mut lines = vec![
        format!(
            "For {period}, you acquired {} new customers with total acquisition spend of {}.",
            format_count(inputs.new_customers),
            format_currency(Some(report.total_spend)),
        ),
        format!(
            "Your blended CAC is {}, with paid CAC at {}.",
            format_currency(report.blended_cac),
            format_currency(report.paid_cac),
        ),
    ];

    if report.health.is_known() {
        lines.push(format!(
            "With LTV per customer at {}, your LTV:CAC is {}. Aim for 3x+ to sustain aggressive acquisition.",
            format_currency(Some(inputs.ltv_per_customer)),
            format_ratio(report.ltv_cac_ratio),
        ));
    }

    if let (Some(profit), Some(orders)) =
        (report.gross_profit_per_order, report.orders_to_break_even)
    {
        lines.push(format!(
            "At {} gross profit per order, it takes {} orders to recover one customer's acquisition cost.",
            format_currency(Some(profit)),
            format_orders(Some(orders)),
        ));
    }

    lines
}

/// `label: value` lines of the displayed results.
#[must_use]
pub fn export_text(report: &CacReport) -> String {
    let inputs = &report.inputs;
    let mut out = format!(
        "Period: {}\n",
        period_text(&inputs.period_label, inputs.time_unit)
    );
    out.push_str(&format!(
        "New customers: {}\n",
        format_count(inputs.new_customers)
    ));
    for kpi in kpis(report) {
        out.push_str(&format!("{}: {}\n", kpi.label, kpi.value));
    }
    if report.health.is_known() {
        let vocabulary = report.variant.config().vocabulary;
        out.push_str(&format!("Health: {}\n", report.health.label(vocabulary)));
    }
    out
}

/// Render the KPI block and summary.
#[must_use]
pub fn text_report(report: &CacReport, color: bool) -> String {
    let kpis = kpis(report);
    let width = kpis.iter().map(|k| k.label.len()).max().unwrap_or(0);
    let value_width = kpis
        .iter()
        .map(|k| k.value.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = ui::header(&format!("CAC ({})", report.variant), color);
    out.push('\n');
    for kpi in &kpis {
        let tag = match kpi.health {
            Some(health) => ui::health_tag(&kpi.tag, health, color),
            None => kpi.tag.clone(),
        };
        let pad = value_width.saturating_sub(kpi.value.chars().count());
        out.push_str(&format!(
            "  {:<width$}  {}{}  {tag}\n",
            kpi.label,
            kpi.value,
            " ".repeat(pad),
        ));
    }
    out.push_str("\nSummary\n");
    for line in summary_lines(report) {
        out.push_str(&format!("  - {line}\n"));
    }
    out
}

/// Presents reports in one output format.
pub struct ReportPresenter {
    format: OutputFormat,
    quiet: bool,
    color: bool,
}

impl ReportPresenter {
    #[must_use]
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self {
            format,
            quiet,
            color: !ui::is_color_disabled(),
        }
    }

    /// Force colour on or off (files never get colour).
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Render a report to a string.
    ///
    /// Quiet mode renders only the blended CAC.
    pub fn render(&self, report: &CacReport) -> Result<String, serde_json::Error> {
        debug!(format = %self.format, quiet = self.quiet, "rendering report");
        if self.quiet {
            return Ok(format!("{}\n", format_currency(report.blended_cac)));
        }
        match self.format {
            OutputFormat::Text => Ok(text_report(report, self.color)),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(report)?;
                json.push('\n');
                Ok(json)
            }
            OutputFormat::Export => Ok(export_text(report)),
        }
    }
}

/// Whether any displayed metric is a placeholder.
#[must_use]
pub fn is_incomplete(report: &CacReport) -> bool {
    kpis(report).iter().any(|k| k.value == PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use caccalc_core::{CacCalculator, CacInputs, TimeUnit, Variant};

    fn reference(variant: Variant, ltv: f64) -> CacReport {
        CacCalculator::for_variant(variant).calculate(&CacInputs {
            new_customers: 250.0,
            paid_spend: 12_000.0,
            other_spend: 8_000.0,
            ltv_per_customer: ltv,
            average_order_value: 100.0,
            gross_margin_percent: 40.0,
            ..Default::default()
        })
    }

    #[test]
    fn format_names() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("copy".parse::<OutputFormat>().unwrap(), OutputFormat::Export);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default().to_string(), "text");
    }

    #[test]
    fn basic_kpis() {
        let report = reference(Variant::Basic, 420.0);
        let kpis = kpis(&report);
        assert_eq!(kpis.len(), 4);
        assert_eq!(kpis[0].value, "$80.00");
        assert_eq!(kpis[1].value, "$48.00");
        assert_eq!(kpis[2].value, "$20,000.00");
        assert_eq!(kpis[2].tag, "Paid + other acquisition costs");
        assert_eq!(kpis[3].value, "5.3x");
        assert_eq!(kpis[3].tag, "Healthy: target is typically 3x+ LTV:CAC.");
    }

    #[test]
    fn only_ltv_row_carries_health() {
        let report = reference(Variant::Ecommerce, 150.0);
        let tagged: Vec<_> = kpis(&report)
            .into_iter()
            .filter_map(|k| k.health.map(|h| (k.label, h)))
            .collect();
        assert_eq!(tagged, vec![("LTV:CAC", LtvCacHealth::Danger)]);

        let unknown = reference(Variant::Basic, 0.0);
        assert_eq!(kpis(&unknown)[3].health, Some(LtvCacHealth::Unknown));
    }

    #[test]
    fn ecommerce_kpis_include_break_even() {
        let report = reference(Variant::Ecommerce, 150.0);
        let kpis = kpis(&report);
        assert_eq!(kpis.len(), 5);
        assert_eq!(kpis[3].tag, "Danger: acquisition likely unprofitable unless strategic.");
        assert_eq!(kpis[4].value, "2.00");
        assert_eq!(kpis[4].tag, "Gross profit per order: $40.00");
    }

    #[test]
    fn loaded_paid_tag() {
        let report = CacCalculator::for_variant(Variant::Loaded).calculate(&CacInputs {
            new_customers: 250.0,
            paid_customers: 100.0,
            paid_spend: 12_000.0,
            ..Default::default()
        });
        let kpis = kpis(&report);
        assert_eq!(kpis[1].tag, "Paid spend ÷ paid customers");
        assert_eq!(kpis[1].value, "$120.00");
    }

    #[test]
    fn summary_reference() {
        let report = reference(Variant::Basic, 420.0);
        let lines = summary_lines(&report);
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "For this month, you acquired 250 new customers with total acquisition spend of $20,000.00."
        );
        assert_eq!(lines[1], "Your blended CAC is $80.00, with paid CAC at $48.00.");
        assert!(lines[2].contains("$420.00"));
        assert!(lines[2].contains("5.3x"));
    }

    #[test]
    fn summary_with_period_label() {
        let report = CacCalculator::default().calculate(&CacInputs {
            new_customers: 1_200.0,
            paid_spend: 30_000.0,
            time_unit: TimeUnit::Week,
            period_label: "Launch week".into(),
            ..Default::default()
        });
        let lines = summary_lines(&report);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("For Launch week (weeks), you acquired 1,200 new customers"));
    }

    #[test]
    fn summary_without_customers() {
        let report = CacCalculator::default().calculate(&CacInputs {
            paid_spend: 5_000.0,
            ..Default::default()
        });
        assert!(!report.has_customers());
        assert_eq!(summary_lines(&report), vec![NO_CUSTOMERS_GUIDANCE.to_string()]);
        let kpis = kpis(&report);
        assert_eq!(kpis[0].value, PLACEHOLDER);
        assert_eq!(kpis[2].value, "$5,000.00");
        assert!(is_incomplete(&report));
    }

    #[test]
    fn export_lines() {
        let report = reference(Variant::Basic, 420.0);
        let text = export_text(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Period: this month");
        assert_eq!(lines[1], "New customers: 250");
        assert!(lines.contains(&"Blended CAC: $80.00"));
        assert!(lines.contains(&"LTV:CAC: 5.3x"));
        assert!(lines.contains(&"Health: Healthy"));
        assert!(lines.iter().all(|l| l.contains(": ")));
    }

    #[test]
    fn text_report_plain() {
        let report = reference(Variant::Ecommerce, 420.0);
        let text = text_report(&report, false);
        assert!(text.starts_with("=== CAC (ecommerce) ==="));
        assert!(text.contains("Orders to break even"));
        assert!(text.contains("\nSummary\n"));
        assert!(text.contains("  - Your blended CAC is $80.00"));
    }

    #[test]
    fn presenter_quiet() {
        let report = reference(Variant::Basic, 0.0);
        let presenter = ReportPresenter::new(OutputFormat::Text, true);
        assert_eq!(presenter.render(&report).unwrap(), "$80.00\n");
    }

    #[test]
    fn presenter_json() {
        let report = reference(Variant::Basic, 420.0);
        let presenter = ReportPresenter::new(OutputFormat::Json, false).with_color(false);
        let rendered = presenter.render(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["blended_cac"], 80.0);
        assert_eq!(value["health"], "healthy");
    }

    #[test]
    fn complete_report_is_not_incomplete() {
        let report = reference(Variant::Basic, 420.0);
        assert!(!is_incomplete(&report));
    }
}
