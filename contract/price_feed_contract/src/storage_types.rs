use soroban_sdk::{contracterror, contracttype};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Decimals,
    LatestRound,
}

/// Latest published answer, shaped like an aggregator round.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct RoundData {
    pub round_id: u64,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FeedError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
}

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
