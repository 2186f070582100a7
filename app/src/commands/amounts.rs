use anyhow::Context;
use num_bigint::BigInt;
use serde::Serialize;
use smart_router::fixed_point;

#[derive(Debug, Serialize)]
pub struct RedenominateResponse {
    pub amount: String,
    pub decimals: u32,
    pub round: u32,
    pub display: f64,
}

#[derive(Debug, Serialize)]
pub struct DeRedenominateResponse {
    pub value: String,
    pub decimals: u32,
    pub amount: String,
}

#[derive(Debug, Serialize)]
pub struct SlippageResponse {
    pub amount: String,
    pub slippage: f64,
    pub round: u32,
    /// "min_output" or "max_input"
    pub kind: &'static str,
    pub bound: String,
}

fn parse_raw_amount(amount: &str) -> anyhow::Result<BigInt> {
    amount
        .trim()
        .parse::<BigInt>()
        .with_context(|| format!("Invalid raw amount: {:?}", amount))
}

/// Raw ledger amount to display number
pub fn redenominate_amount(
    amount: &str,
    decimals: u32,
    round: u32,
) -> anyhow::Result<RedenominateResponse> {
    let raw = parse_raw_amount(amount)?;
    Ok(RedenominateResponse {
        amount: raw.to_string(),
        decimals,
        round,
        display: fixed_point::redenominate(&raw, decimals, round),
    })
}

/// Display text to raw ledger amount. Malformed text yields zero.
pub fn de_redenominate_value(value: &str, decimals: u32) -> DeRedenominateResponse {
    DeRedenominateResponse {
        value: value.to_string(),
        decimals,
        amount: fixed_point::de_redenominate_str(value, decimals).to_string(),
    }
}

/// Slippage bound for a raw amount
pub fn slippage_bound(
    amount: &str,
    slippage: f64,
    round: u32,
    exact_output: bool,
) -> anyhow::Result<SlippageResponse> {
    let raw = parse_raw_amount(amount)?;
    let bound = fixed_point::apply_slippage(&raw, slippage, round, !exact_output);
    Ok(SlippageResponse {
        amount: raw.to_string(),
        slippage,
        round,
        kind: if exact_output { "max_input" } else { "min_output" },
        bound: bound.to_string(),
    })
}
