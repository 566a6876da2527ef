// src/models.rs
use chrono::NaiveDate;

/// Assumptions for a single valuation run, in the order they are collected.
///
/// Monetary figures are in millions, rates are decimals (`0.05` for 5%).
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationInputs {
    pub ticker: String,
    pub operating_cash_flow: f64,
    pub capital_expenditures: f64,
    pub growth_rate: f64,
    pub horizon: u32,
    pub discount_rate: f64,
    pub perpetual_growth_rate: f64,
    pub shares_outstanding: f64,
}

/// Future free cash flows, index 0 being one period ahead.
pub type ProjectedCashFlows = Vec<f64>;

/// Every figure produced by the pipeline for one set of inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Valuation {
    pub free_cash_flow: f64,
    pub projected: ProjectedCashFlows,
    pub pv_cash_flows: f64,
    pub pv_terminal_value: f64,
    pub intrinsic_value: f64,
}

/// The row written to `dcf_results` at the end of a run.
///
/// Rows are append-only and carry no key: running the same ticker twice on the
/// same day stores two rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationResult {
    pub ticker: String,
    pub run_date: NaiveDate,
    pub ocf: f64,
    pub capex: f64,
    pub growth_rate: f64,
    pub discount_rate: f64,
    pub perp_growth_rate: f64,
    pub shares_outstanding: f64,
    pub intrinsic_value: f64,
}

impl ValuationResult {
    pub fn new(inputs: &ValuationInputs, run_date: NaiveDate, intrinsic_value: f64) -> Self {
        ValuationResult {
            ticker: inputs.ticker.clone(),
            run_date,
            ocf: inputs.operating_cash_flow,
            capex: inputs.capital_expenditures,
            growth_rate: inputs.growth_rate,
            discount_rate: inputs.discount_rate,
            perp_growth_rate: inputs.perpetual_growth_rate,
            shares_outstanding: inputs.shares_outstanding,
            intrinsic_value,
        }
    }
}

/// A `dcf_results` row as read back, NULLs included. The table has no
/// constraints, so anything written by another tool may be missing a column.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct StoredRow {
    pub ticker: Option<String>,
    pub run_date: Option<String>,
    pub ocf: Option<f64>,
    pub capex: Option<f64>,
    pub growth_rate: Option<f64>,
    pub discount_rate: Option<f64>,
    pub perp_growth_rate: Option<f64>,
    pub shares_outstanding: Option<f64>,
    pub intrinsic_value: Option<f64>,
}

impl From<&ValuationResult> for StoredRow {
    fn from(result: &ValuationResult) -> Self {
        StoredRow {
            ticker: Some(result.ticker.clone()),
            run_date: Some(result.run_date.format("%Y-%m-%d").to_string()),
            ocf: Some(result.ocf),
            capex: Some(result.capex),
            growth_rate: Some(result.growth_rate),
            discount_rate: Some(result.discount_rate),
            perp_growth_rate: Some(result.perp_growth_rate),
            shares_outstanding: Some(result.shares_outstanding),
            intrinsic_value: Some(result.intrinsic_value),
        }
    }
}
