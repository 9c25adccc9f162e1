use soroban_sdk::{contracterror, contracttype, Address, String, Vec};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    PriceFeed,
    NextCampaignId,
    NextRecordId,
    OwnerCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    DonorAmount(CampaignId, Address),
    Record(RecordId),
    DonorRecords(CampaignId, Address),
    DonorIndex(Address),
    OwnerIndex(Address),
}

pub type CampaignId = u64;
pub type RecordId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum CampaignState {
    Open,
    Ended,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub owner: Address,
    pub beneficiary: Address,          // Receives payouts on end and withdraw
    pub title: String,
    pub funding_target: i128,          // Token base units
    pub description: String,
    pub end_time: u64,
    pub state: CampaignState,
    pub category: u32,
    pub refundable: bool,
    pub refund_message: String,
    pub raised: i128,
    pub withdrawn: i128,
    pub donors: Vec<Address>,          // Distinct, in first-contribution order
    pub image_ref: String,             // Content address of the campaign image
    pub target_achieved: bool,
    pub created_at: u64,
}

/// One contribution event. Never rewritten once stored.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct DonationRecord {
    pub id: RecordId,
    pub campaign_id: CampaignId,
    pub donor: Address,
    pub amount: i128,
    pub message: String,
    pub timestamp: u64,
}

// Answer shape published by the reference price feed
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
pub enum CharityError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CampaignNotFound = 3,
    NotOwner = 4,
    CampaignClosed = 5,
    BelowMinimum = 6,
    NotRefundable = 7,
    InsufficientFund = 8,
    ArithmeticOverflow = 9,
    PriceFeedUnavailable = 10,
    InvalidPrice = 11,
}

// Constants
pub const MIN_CONTRIBUTION: i128 = 1; // One base unit
pub const MAX_PAGE_SIZE: u32 = 50; // Listing queries
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
