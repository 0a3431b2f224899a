//! Bond issue command.

use anyhow::Result;
use clap::Args;
use finsim::bonds::{
    bond_issuance_summary, bond_service_table, BondIssuanceSummary, BondIssue, BondService,
    ServiceRow,
};
use finsim::validation::ensure_positive;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{parse_rate, validate_amount, validate_years};
use crate::config::CliConfig;
use crate::output::{format_amount, print_header, print_json, print_summary, print_table, KeyValue};

/// Arguments for the bond command.
#[derive(Args, Debug)]
pub struct BondArgs {
    /// Nominal amount of the issue
    #[arg(long, default_value = "1000000")]
    pub amount: f64,

    /// Face value per bond
    #[arg(long, default_value = "100")]
    pub face: f64,

    /// Annual coupon rate in percent
    #[arg(long, default_value = "5")]
    pub coupon: f64,

    /// Duration in years
    #[arg(long, default_value = "10")]
    pub years: u32,

    /// Issue price per bond
    #[arg(long, default_value = "98")]
    pub issue_price: f64,

    /// Redemption price per bond
    #[arg(long, default_value = "100")]
    pub redemption_price: f64,
}

/// Bond issue result.
#[derive(Debug, Serialize)]
pub struct BondReport {
    pub issue: BondIssue,
    pub years: u32,
    pub summary: BondIssuanceSummary,
    pub service: BondService,
}

#[derive(Tabled)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Coupons")]
    coupons: String,
    #[tabled(rename = "Redemption")]
    redemption: String,
    #[tabled(rename = "Total")]
    total: String,
}

impl From<&ServiceRow> for YearRow {
    fn from(row: &ServiceRow) -> Self {
        Self {
            year: row.year,
            coupons: format_amount(row.coupons),
            redemption: format_amount(row.redemption),
            total: format_amount(row.total),
        }
    }
}

/// Execute the bond command.
pub fn execute(args: BondArgs, format: OutputFormat, config: &CliConfig) -> Result<()> {
    let issue = BondIssue::new(
        validate_amount("amount", args.amount)?,
        ensure_positive("face", args.face)?,
        parse_rate("coupon", args.coupon)?,
    )
    .with_issue_price(validate_amount("issue price", args.issue_price)?)
    .with_redemption_price(validate_amount("redemption price", args.redemption_price)?);
    let years = validate_years(args.years)?;

    let summary = bond_issuance_summary(&issue);
    let service = bond_service_table(&issue, years);
    let report = BondReport {
        issue,
        years,
        summary,
        service,
    };

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Table => {
            let currency = &config.currency;
            let summary = &report.summary;
            print_summary(
                "Bond Issue",
                &[
                    KeyValue::new("Number of bonds", format!("{:.0}", summary.number_of_bonds)),
                    KeyValue::amount("Proceeds raised", summary.proceeds, currency),
                    KeyValue::amount("Coupon per bond", summary.coupon_per_bond, currency),
                    KeyValue::amount("Annual coupons", summary.aggregate_coupon, currency),
                    KeyValue::amount("Redemption amount", summary.redemption_amount, currency),
                    KeyValue::amount("Issue premium", summary.issue_premium, currency),
                    KeyValue::amount("Redemption premium", summary.redemption_premium, currency),
                ],
            );

            let rows: Vec<YearRow> = report.service.rows.iter().map(YearRow::from).collect();
            print_header("Service Table");
            print_table(&rows);

            print_summary(
                "Issuer Cost",
                &[
                    KeyValue::amount("Total cost", report.service.total_cost, currency),
                    KeyValue::percent("Average annual rate", report.service.yield_rate),
                ],
            );
        }
    }

    Ok(())
}
