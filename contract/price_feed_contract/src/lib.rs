#![no_std]


mod storage_types;
pub use storage_types::{FeedError, RoundData};
use storage_types::{DataKey, TTL_INSTANCE};

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

#[contract]
pub struct PriceFeedContract;

#[contractimpl]
impl PriceFeedContract {
    /// Set up the feed with its updater, the number of decimals in every
    /// answer and the first answer (round 1).
    pub fn initialize(e: Env, admin: Address, decimals: u32, answer: i128) -> Result<(), FeedError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(FeedError::AlreadyInitialized);
        }
        admin.require_auth();

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Decimals, &decimals);
        write_round(&e, 1, answer);
        Ok(())
    }

    /// Publish a new answer as the next round.
    pub fn update_answer(e: Env, answer: i128) -> Result<u64, FeedError> {
        let admin: Address = e
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(FeedError::NotInitialized)?;
        admin.require_auth();

        let round_id = read_round(&e)?.round_id + 1;
        write_round(&e, round_id, answer);
        emit_answer_updated(&e, round_id, answer);
        Ok(round_id)
    }

    pub fn decimals(e: Env) -> Result<u32, FeedError> {
        e.storage()
            .instance()
            .get(&DataKey::Decimals)
            .ok_or(FeedError::NotInitialized)
    }

    pub fn latest_answer(e: Env) -> Result<i128, FeedError> {
        Ok(read_round(&e)?.answer)
    }

    pub fn latest_round_data(e: Env) -> Result<RoundData, FeedError> {
        read_round(&e)
    }
}

#[allow(deprecated)]
fn emit_answer_updated(e: &Env, round_id: u64, answer: i128) {
    e.events().publish((Symbol::new(e, "answer_updated"), round_id), answer);
}

fn read_round(e: &Env) -> Result<RoundData, FeedError> {
    e.storage()
        .instance()
        .get(&DataKey::LatestRound)
        .ok_or(FeedError::NotInitialized)
}

fn write_round(e: &Env, round_id: u64, answer: i128) {
    let now = e.ledger().timestamp();
    let round = RoundData {
        round_id,
        answer,
        started_at: now,
        updated_at: now,
        answered_in_round: round_id,
    };
    e.storage().instance().set(&DataKey::LatestRound, &round);
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}
