//! Discount (bordereau) command.

use anyhow::Result;
use clap::Args;
use finsim::discount::{discount_bordereau, BordereauTerms, DiscountResult, DraftEffect};
use finsim::validation::ensure_non_negative;
use finsim::Date;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{parse_rate, validate_amount};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{format_amount, print_header, print_json, print_summary, print_table, KeyValue};

/// Arguments for the discount command.
#[derive(Args, Debug)]
pub struct DiscountArgs {
    /// Annual discount rate in percent
    #[arg(long)]
    pub rate: f64,

    /// Draft as FACE:DAYS (repeatable)
    #[arg(long = "effect", value_name = "FACE:DAYS", value_parser = parse_effect)]
    pub effects: Vec<DraftEffect>,

    /// Draft as FACE:CREATED:MATURITY with ISO dates (repeatable)
    #[arg(long = "draft", value_name = "FACE:CREATED:MATURITY", value_parser = parse_draft)]
    pub drafts: Vec<DraftEffect>,

    /// Commission in percent of face value (defaults to the configured rate)
    #[arg(long)]
    pub commission: Option<f64>,

    /// Fixed fee per draft (defaults to the configured fee)
    #[arg(long)]
    pub fixed_fees: Option<f64>,
}

/// Parses `FACE:DAYS`.
pub fn parse_effect(s: &str) -> CliResult<DraftEffect> {
    let invalid = || CliError::InvalidEffect(s.to_string());
    let (face, days) = s.split_once(':').ok_or_else(invalid)?;
    let face: f64 = face.trim().parse().map_err(|_| invalid())?;
    let days: i64 = days.trim().parse().map_err(|_| invalid())?;
    Ok(DraftEffect::new(face, days))
}

/// Parses `FACE:CREATED:MATURITY`.
pub fn parse_draft(s: &str) -> CliResult<DraftEffect> {
    let invalid = || CliError::InvalidDraft(s.to_string());
    let parts: Vec<&str> = s.split(':').collect();
    let [face, created, maturity] = parts.as_slice() else {
        return Err(invalid());
    };
    let face: f64 = face.trim().parse().map_err(|_| invalid())?;
    let created = Date::parse(created).map_err(|_| invalid())?;
    let maturity = Date::parse(maturity).map_err(|_| invalid())?;
    Ok(DraftEffect::from_dates(face, created, maturity))
}

#[derive(Tabled)]
struct EffectRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Face value")]
    face_value: String,
    #[tabled(rename = "Days")]
    days: i64,
    #[tabled(rename = "Discount")]
    discount: String,
    #[tabled(rename = "Commission")]
    commission: String,
    #[tabled(rename = "Fixed fees")]
    fixed_fees: String,
    #[tabled(rename = "Total fees")]
    total_fees: String,
    #[tabled(rename = "Net proceeds")]
    net_proceeds: String,
}

impl From<&DiscountResult> for EffectRow {
    fn from(row: &DiscountResult) -> Self {
        Self {
            number: row.number,
            face_value: format_amount(row.face_value),
            days: row.days,
            discount: format_amount(row.discount),
            commission: format_amount(row.commission),
            fixed_fees: format_amount(row.fixed_fees),
            total_fees: format_amount(row.total_fees),
            net_proceeds: format_amount(row.net_proceeds),
        }
    }
}

/// Execute the discount command.
pub fn execute(args: DiscountArgs, format: OutputFormat, config: &CliConfig) -> Result<()> {
    let rate = parse_rate("rate", args.rate)?;
    let effects: Vec<DraftEffect> = args.effects.into_iter().chain(args.drafts).collect();
    if effects.is_empty() {
        return Err(CliError::MissingArgument("at least one --effect or --draft".into()).into());
    }
    for effect in &effects {
        validate_amount("face value", effect.face_value)?;
        ensure_non_negative("days", effect.days_to_maturity as f64)?;
    }

    let terms = BordereauTerms {
        commission_rate: match args.commission {
            Some(percent) => parse_rate("commission", percent)?.value(),
            None => config.discount_commission_rate,
        },
        fixed_fees: match args.fixed_fees {
            Some(fees) => validate_amount("fixed fees", fees)?,
            None => config.discount_fixed_fees,
        },
    };

    let bordereau = discount_bordereau(&effects, rate, terms);

    match format {
        OutputFormat::Json => print_json(&bordereau)?,
        OutputFormat::Table => {
            let rows: Vec<EffectRow> = bordereau.effects.iter().map(EffectRow::from).collect();
            print_header(&format!("Discount Bordereau at {:.2}%", rate.as_percent()));
            print_table(&rows);

            let totals = &bordereau.totals;
            let currency = &config.currency;
            print_summary(
                "Totals",
                &[
                    KeyValue::new("Drafts", bordereau.count.to_string()),
                    KeyValue::amount("Face value", totals.face_value, currency),
                    KeyValue::amount("Discount", totals.discount, currency),
                    KeyValue::amount("Commission", totals.commission, currency),
                    KeyValue::amount("Fixed fees", totals.fixed_fees, currency),
                    KeyValue::amount("Total fees", totals.total_fees, currency),
                    KeyValue::amount("Net proceeds", totals.net_proceeds, currency),
                ],
            );
        }
    }

    Ok(())
}
