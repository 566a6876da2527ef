// src/services/dcf.rs
use log::{debug, warn};

use crate::error::ValuationError;
use crate::models::{ProjectedCashFlows, Valuation, ValuationInputs};

/// Free cash flow: operating cash flow less capital expenditures.
pub fn derive_fcf(operating_cash_flow: f64, capital_expenditures: f64) -> f64 {
    operating_cash_flow - capital_expenditures
}

/// Compounds `starting_fcf` forward `horizon` periods at a constant rate.
pub fn project_fcf(starting_fcf: f64, growth_rate: f64, horizon: u32) -> ProjectedCashFlows {
    let mut projected = Vec::new();
    let mut last_fcf = starting_fcf;

    for _ in 0..horizon {
        last_fcf *= 1.0 + growth_rate;
        projected.push(last_fcf);
    }

    projected
}

/// `(1 + r)^periods`, rejected when it is zero (a rate of -100%).
fn discount_factor(
    discount_rate: f64,
    periods: u32,
    step: &'static str,
) -> Result<f64, ValuationError> {
    let factor = (1.0 + discount_rate).powf(f64::from(periods));
    if factor == 0.0 {
        return Err(ValuationError::DivisionByZero { step });
    }
    Ok(factor)
}

/// Sum of each projected cash flow discounted back to period 0.
/// An empty projection is worth nothing.
pub fn present_value(cash_flows: &[f64], discount_rate: f64) -> Result<f64, ValuationError> {
    let mut total = 0.0;
    for (fcf, period) in cash_flows.iter().zip(1u32..) {
        total += fcf / discount_factor(discount_rate, period, "present value")?;
    }
    Ok(total)
}

/// Gordon-growth perpetuity on the year after `last_fcf`, discounted back
/// `horizon` periods.
///
/// Only an exactly zero spread is rejected. A discount rate below the
/// perpetual growth rate yields a negative value rather than an error.
pub fn terminal_value(
    last_fcf: f64,
    perpetual_growth_rate: f64,
    discount_rate: f64,
    horizon: u32,
) -> Result<f64, ValuationError> {
    let spread = discount_rate - perpetual_growth_rate;
    if spread == 0.0 {
        return Err(ValuationError::DivisionByZero {
            step: "terminal value",
        });
    }
    if spread < 0.0 {
        warn!(
            "Discount rate {} is below perpetual growth rate {}; terminal value will be negative",
            discount_rate, perpetual_growth_rate
        );
    }

    let tv = last_fcf * (1.0 + perpetual_growth_rate) / spread;
    Ok(tv / discount_factor(discount_rate, horizon, "terminal value")?)
}

/// Terminal value taken from the final element of a projection, with the
/// projection length as the discounting horizon. No projection, no terminal
/// value.
pub fn terminal_value_of(
    cash_flows: &[f64],
    perpetual_growth_rate: f64,
    discount_rate: f64,
) -> Result<f64, ValuationError> {
    match cash_flows.last() {
        Some(&last_fcf) => {
            let horizon = u32::try_from(cash_flows.len()).map_err(|_| {
                ValuationError::HorizonOutOfRange {
                    periods: cash_flows.len(),
                }
            })?;
            terminal_value(last_fcf, perpetual_growth_rate, discount_rate, horizon)
        }
        None => {
            warn!("Empty projection; terminal value taken as zero");
            Ok(0.0)
        }
    }
}

pub fn intrinsic_value(
    pv_cash_flows: f64,
    pv_terminal_value: f64,
    shares_outstanding: f64,
) -> Result<f64, ValuationError> {
    if shares_outstanding == 0.0 {
        return Err(ValuationError::DivisionByZero {
            step: "intrinsic value per share",
        });
    }
    Ok((pv_cash_flows + pv_terminal_value) / shares_outstanding)
}

/// Runs the whole chain for one set of inputs.
pub fn value(inputs: &ValuationInputs) -> Result<Valuation, ValuationError> {
    let free_cash_flow = derive_fcf(inputs.operating_cash_flow, inputs.capital_expenditures);
    debug!("{}: free cash flow {}", inputs.ticker, free_cash_flow);

    let projected = project_fcf(free_cash_flow, inputs.growth_rate, inputs.horizon);
    debug!("{}: projected cash flows {:?}", inputs.ticker, projected);

    let pv_cash_flows = present_value(&projected, inputs.discount_rate)?;
    debug!("{}: present value of cash flows {}", inputs.ticker, pv_cash_flows);

    let pv_terminal_value =
        terminal_value_of(&projected, inputs.perpetual_growth_rate, inputs.discount_rate)?;
    debug!("{}: present value of terminal value {}", inputs.ticker, pv_terminal_value);

    let intrinsic_value =
        intrinsic_value(pv_cash_flows, pv_terminal_value, inputs.shares_outstanding)?;
    debug!("{}: intrinsic value per share {}", inputs.ticker, intrinsic_value);

    Ok(Valuation {
        free_cash_flow,
        projected,
        pv_cash_flows,
        pv_terminal_value,
        intrinsic_value,
    })
}
