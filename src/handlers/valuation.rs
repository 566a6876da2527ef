// src/handlers/valuation.rs
use chrono::NaiveDate;
use log::{error, info, warn};
use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::ValuationError;
use crate::handlers::prompt::Prompter;
use crate::handlers::report;
use crate::models::{ValuationInputs, ValuationResult};
use crate::services::dcf;
use crate::services::db::DcfStore;
use crate::BoxError;

#[derive(Debug)]
pub struct RunOutcome {
    pub result: ValuationResult,
    pub saved: bool,
}

/// One interactive valuation: collect assumptions, print each figure as soon as
/// it can be computed, then append the result to the store.
///
/// The pipeline steps are called one by one rather than through `dcf::value`
/// so that each figure is printed before the next assumption is asked for.
///
/// Input and arithmetic failures abort the run. A store failure is reported on
/// the console and leaves `saved` false.
pub async fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &Config,
    run_date: NaiveDate,
) -> Result<RunOutcome, ValuationError> {
    writeln!(prompter.output(), "--- Please enter company data ---")?;
    let ticker = prompter.text("ticker", "Company Ticker (e.g., AAPL): ")?;
    let operating_cash_flow =
        prompter.parse("operating cash flow", "Operating Cash Flow (in millions): ")?;
    let capital_expenditures =
        prompter.parse("capital expenditures", "Capital Expenditures (in millions): ")?;

    let fcf = dcf::derive_fcf(operating_cash_flow, capital_expenditures);
    report::free_cash_flow(prompter.output(), fcf)?;

    let growth_rate = prompter.parse(
        "growth rate",
        "Expected Growth Rate (decimal, e.g., 0.05 for 5%): ",
    )?;
    let horizon: u32 = prompter.parse("projection years", "Number of years to project (e.g., 5): ")?;
    if horizon == 0 {
        warn!("Projection horizon is 0; cash flows and terminal value count as zero");
    }
    let projected = dcf::project_fcf(fcf, growth_rate, horizon);

    let discount_rate = prompter.parse(
        "discount rate",
        "Discount Rate (WACC) (decimal, e.g., 0.10 for 10%): ",
    )?;
    let pv_cash_flows = dcf::present_value(&projected, discount_rate)?;
    report::present_value(prompter.output(), pv_cash_flows)?;

    let perpetual_growth_rate = prompter.parse(
        "perpetual growth rate",
        "Perpetual Growth Rate (decimal, e.g., 0.03 for 3%): ",
    )?;
    let pv_terminal_value =
        dcf::terminal_value_of(&projected, perpetual_growth_rate, discount_rate)?;
    report::terminal_value(prompter.output(), pv_terminal_value)?;

    let shares_outstanding =
        prompter.parse("shares outstanding", "Shares Outstanding (in millions): ")?;
    let intrinsic_value =
        dcf::intrinsic_value(pv_cash_flows, pv_terminal_value, shares_outstanding)?;
    report::final_valuation(prompter.output(), intrinsic_value)?;

    let inputs = ValuationInputs {
        ticker,
        operating_cash_flow,
        capital_expenditures,
        growth_rate,
        horizon,
        discount_rate,
        perpetual_growth_rate,
        shares_outstanding,
    };
    info!("Valued {} at {} per share", inputs.ticker, intrinsic_value);
    let result = ValuationResult::new(&inputs, run_date, intrinsic_value);

    writeln!(prompter.output(), "\n--- Saving results to database ---")?;
    let saved = match save(&config.db_path, &result).await {
        Ok(()) => {
            writeln!(
                prompter.output(),
                "Results successfully saved to {}",
                config.db_path.display()
            )?;
            true
        }
        Err(e) => {
            error!("Failed to save valuation for {}: {}", result.ticker, e);
            writeln!(prompter.output(), "An error occurred: {}", e)?;
            false
        }
    };

    Ok(RunOutcome { result, saved })
}

async fn save(db_path: &Path, result: &ValuationResult) -> Result<(), BoxError> {
    let mut store = DcfStore::open(db_path).await?;
    store.record(result).await?;
    store.close().await
}
