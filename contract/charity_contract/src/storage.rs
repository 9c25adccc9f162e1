use soroban_sdk::{Address, Env, String, Vec};

use crate::storage_types::*;

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn write_config(e: &Env, admin: &Address, token: &Address, price_feed: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
    e.storage().instance().set(&DataKey::Token, token);
    e.storage().instance().set(&DataKey::PriceFeed, price_feed);
    e.storage().instance().set(&DataKey::NextCampaignId, &0u64);
    e.storage().instance().set(&DataKey::NextRecordId, &0u64);
    e.storage().instance().set(&DataKey::OwnerCount, &0u32);
    extend_instance(e);
}

pub fn read_admin(e: &Env) -> Result<Address, CharityError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(CharityError::NotInitialized)
}

pub fn read_token(e: &Env) -> Result<Address, CharityError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CharityError::NotInitialized)
}

pub fn read_price_feed(e: &Env) -> Result<Address, CharityError> {
    e.storage()
        .instance()
        .get(&DataKey::PriceFeed)
        .ok_or(CharityError::NotInitialized)
}

pub fn write_price_feed(e: &Env, price_feed: &Address) {
    e.storage().instance().set(&DataKey::PriceFeed, price_feed);
    extend_instance(e);
}

// Campaigns

pub fn campaign_count(e: &Env) -> u64 {
    e.storage().instance().get(&DataKey::NextCampaignId).unwrap_or(0)
}

/// Reserve the next sequential campaign id.
pub fn next_campaign_id(e: &Env) -> CampaignId {
    let id = campaign_count(e);
    e.storage().instance().set(&DataKey::NextCampaignId, &(id + 1));
    extend_instance(e);
    id
}

pub fn load_campaign(e: &Env, campaign_id: CampaignId) -> Result<Campaign, CharityError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(CharityError::CampaignNotFound)
}

pub fn save_campaign(e: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    e.storage().persistent().set(&key, campaign);
    extend_persistent(e, &key);
}

// Donor ledger

pub fn has_donor_entry(e: &Env, campaign_id: CampaignId, donor: &Address) -> bool {
    e.storage()
        .persistent()
        .has(&PersistentKey::DonorAmount(campaign_id, donor.clone()))
}

pub fn donor_amount(e: &Env, campaign_id: CampaignId, donor: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&PersistentKey::DonorAmount(campaign_id, donor.clone()))
        .unwrap_or(0)
}

pub fn set_donor_amount(e: &Env, campaign_id: CampaignId, donor: &Address, amount: i128) {
    let key = PersistentKey::DonorAmount(campaign_id, donor.clone());
    e.storage().persistent().set(&key, &amount);
    extend_persistent(e, &key);
}

// Owner index

pub fn owner_campaigns(e: &Env, owner: &Address) -> Vec<CampaignId> {
    e.storage()
        .persistent()
        .get(&PersistentKey::OwnerIndex(owner.clone()))
        .unwrap_or(Vec::new(e))
}

pub fn append_owner_index(e: &Env, owner: &Address, campaign_id: CampaignId) {
    let key = PersistentKey::OwnerIndex(owner.clone());
    let mut ids = match e.storage().persistent().get::<PersistentKey, Vec<CampaignId>>(&key) {
        Some(ids) => ids,
        None => {
            let count = owner_count(e);
            e.storage().instance().set(&DataKey::OwnerCount, &(count + 1));
            Vec::new(e)
        }
    };
    ids.push_back(campaign_id);
    e.storage().persistent().set(&key, &ids);
    extend_persistent(e, &key);
}

pub fn owner_count(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::OwnerCount).unwrap_or(0)
}

// Contribution history

pub fn record_count(e: &Env) -> u64 {
    e.storage().instance().get(&DataKey::NextRecordId).unwrap_or(0)
}

pub fn append_record(
    e: &Env,
    campaign_id: CampaignId,
    donor: &Address,
    amount: i128,
    message: String,
) -> DonationRecord {
    let id = record_count(e);
    let record = DonationRecord {
        id,
        campaign_id,
        donor: donor.clone(),
        amount,
        message,
        timestamp: e.ledger().timestamp(),
    };

    let record_key = PersistentKey::Record(id);
    e.storage().persistent().set(&record_key, &record);
    extend_persistent(e, &record_key);

    push_record_id(e, PersistentKey::DonorRecords(campaign_id, donor.clone()), id);
    push_record_id(e, PersistentKey::DonorIndex(donor.clone()), id);

    e.storage().instance().set(&DataKey::NextRecordId, &(id + 1));
    extend_instance(e);
    record
}

fn push_record_id(e: &Env, key: PersistentKey, id: RecordId) {
    let mut ids: Vec<RecordId> = e.storage().persistent().get(&key).unwrap_or(Vec::new(e));
    ids.push_back(id);
    e.storage().persistent().set(&key, &ids);
    extend_persistent(e, &key);
}

pub fn load_record(e: &Env, id: RecordId) -> Option<DonationRecord> {
    e.storage().persistent().get(&PersistentKey::Record(id))
}

pub fn records_for(e: &Env, key: PersistentKey) -> Vec<DonationRecord> {
    let ids: Vec<RecordId> = e.storage().persistent().get(&key).unwrap_or(Vec::new(e));
    let mut records = Vec::new(e);
    for id in ids.iter() {
        if let Some(record) = load_record(e, id) {
            records.push_back(record);
        }
    }
    records
}
