//! Loan amortization command.

use anyhow::Result;
use clap::{Args, ValueEnum};
use finsim::loans::{
    constant_annuity_payment, generate_schedule, total_cost, AmortizationRow, AmortizationType,
    LoanCost,
};
use finsim::Rate;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{parse_rate, validate_amount, validate_years};
use crate::config::CliConfig;
use crate::output::{format_amount, print_header, print_json, print_summary, print_table, KeyValue};

/// Repayment profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LoanKind {
    /// Constant monthly payments
    #[default]
    Annuity,
    /// Constant principal repayments
    Linear,
    /// Interest only, principal repaid at maturity
    Bullet,
}

impl From<LoanKind> for AmortizationType {
    fn from(kind: LoanKind) -> Self {
        match kind {
            LoanKind::Annuity => AmortizationType::ConstantAnnuity,
            LoanKind::Linear => AmortizationType::ConstantPrincipal,
            LoanKind::Bullet => AmortizationType::Bullet,
        }
    }
}

/// Arguments for the loan command.
#[derive(Args, Debug)]
pub struct LoanArgs {
    /// Borrowed principal
    #[arg(long)]
    pub principal: f64,

    /// Annual rate in percent
    #[arg(long)]
    pub rate: f64,

    /// Duration in years
    #[arg(long)]
    pub years: u32,

    /// Repayment profile
    #[arg(long = "type", value_enum, default_value = "annuity")]
    pub kind: LoanKind,

    /// Print the summary only, without the monthly schedule
    #[arg(long)]
    pub summary: bool,
}

/// Loan simulation result.
#[derive(Debug, Serialize)]
pub struct LoanReport {
    pub kind: AmortizationType,
    pub principal: f64,
    pub rate: Rate,
    pub years: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<f64>,
    pub cost: LoanCost,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schedule: Vec<AmortizationRow>,
}

#[derive(Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Month")]
    period: u32,
    #[tabled(rename = "Opening")]
    opening: String,
    #[tabled(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Principal")]
    principal: String,
    #[tabled(rename = "Closing")]
    closing: String,
}

impl From<&AmortizationRow> for ScheduleRow {
    fn from(row: &AmortizationRow) -> Self {
        Self {
            period: row.period,
            opening: format_amount(row.opening_balance),
            payment: format_amount(row.payment),
            interest: format_amount(row.interest),
            principal: format_amount(row.principal_portion),
            closing: format_amount(row.closing_balance),
        }
    }
}

/// Execute the loan command.
pub fn execute(args: LoanArgs, format: OutputFormat, config: &CliConfig) -> Result<()> {
    let principal = validate_amount("principal", args.principal)?;
    let rate = parse_rate("rate", args.rate)?;
    let years = validate_years(args.years)?;
    let kind = AmortizationType::from(args.kind);

    let schedule = generate_schedule(kind, principal, rate, years);
    let report = LoanReport {
        kind,
        principal,
        rate,
        years,
        monthly_payment: (kind == AmortizationType::ConstantAnnuity)
            .then(|| constant_annuity_payment(principal, rate, years)),
        cost: total_cost(&schedule),
        schedule: if args.summary { Vec::new() } else { schedule },
    };

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Table => {
            if !report.schedule.is_empty() {
                let rows: Vec<ScheduleRow> = report.schedule.iter().map(ScheduleRow::from).collect();
                print_header(&format!("{kind} Schedule"));
                print_table(&rows);
            }

            let currency = &config.currency;
            let mut summary = vec![
                KeyValue::new("Type", kind.to_string()),
                KeyValue::amount("Principal", principal, currency),
                KeyValue::percent("Rate", rate.as_percent()),
                KeyValue::new("Months", years.saturating_mul(12).to_string()),
            ];
            if let Some(payment) = report.monthly_payment {
                summary.push(KeyValue::amount("Monthly payment", payment, currency));
            }
            summary.push(KeyValue::amount("Total payments", report.cost.total_payments, currency));
            summary.push(KeyValue::amount("Total interest", report.cost.total_interest, currency));
            print_summary("Loan Summary", &summary);
        }
    }

    Ok(())
}
