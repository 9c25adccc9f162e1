use soroban_sdk::{contractclient, Env};

use crate::storage;
use crate::storage_types::{CharityError, RoundData};

/// Aggregator-style feed interface the reference rate is read from.
#[allow(dead_code)]
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn decimals(env: Env) -> u32;
    fn latest_round_data(env: Env) -> RoundData;
}

fn feed_client(e: &Env) -> Result<PriceFeedClient<'_>, CharityError> {
    let address = storage::read_price_feed(e)?;
    Ok(PriceFeedClient::new(e, &address))
}

/// Latest published rate. Feed failures are surfaced, never retried.
pub fn reference_rate(e: &Env) -> Result<i128, CharityError> {
    let round = match feed_client(e)?.try_latest_round_data() {
        Ok(Ok(round)) => round,
        _ => return Err(CharityError::PriceFeedUnavailable),
    };
    if round.answer <= 0 {
        return Err(CharityError::InvalidPrice);
    }
    Ok(round.answer)
}

/// `amount * rate / 10^decimals`, in the token's base units.
pub fn convert(e: &Env, amount: i128) -> Result<i128, CharityError> {
    let rate = reference_rate(e)?;
    let decimals = match feed_client(e)?.try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => return Err(CharityError::PriceFeedUnavailable),
    };
    let scale = 10i128
        .checked_pow(decimals)
        .ok_or(CharityError::ArithmeticOverflow)?;

    amount
        .checked_mul(rate)
        .map(|value| value / scale)
        .ok_or(CharityError::ArithmeticOverflow)
}
