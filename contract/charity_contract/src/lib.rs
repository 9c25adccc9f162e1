#![no_std]


mod contribution;
mod events;
mod lifecycle;
mod oracle;
mod settlement;
mod storage;
mod storage_types;

pub use storage_types::{
    Campaign, CampaignId, CampaignState, CharityError, DonationRecord, RecordId, RoundData,
};
use storage_types::{PersistentKey, MAX_PAGE_SIZE};

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

#[contract]
pub struct CharityContract;

#[contractimpl]
impl CharityContract {
    /// Initialize the contract with its admin, the token donations are made
    /// in, and the reference price feed.
    pub fn initialize(
        e: Env,
        admin: Address,
        token: Address,
        price_feed: Address,
    ) -> Result<(), CharityError> {
        if storage::is_initialized(&e) {
            return Err(CharityError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::write_config(&e, &admin, &token, &price_feed);
        Ok(())
    }

    pub fn set_price_feed(e: Env, price_feed: Address) -> Result<(), CharityError> {
        let admin = storage::read_admin(&e)?;
        admin.require_auth();

        storage::write_price_feed(&e, &price_feed);
        Ok(())
    }

    /// Open a new campaign. `funding_target` is in whole tokens.
    pub fn create_campaign(
        e: Env,
        owner: Address,
        beneficiary: Address,
        title: String,
        funding_target: i128,
        end_time: u64,
        description: String,
        category: u32,
        image_ref: String,
    ) -> Result<CampaignId, CharityError> {
        lifecycle::create(
            &e,
            owner,
            beneficiary,
            title,
            funding_target,
            end_time,
            description,
            category,
            image_ref,
        )
    }

    pub fn contribute(
        e: Env,
        campaign_id: CampaignId,
        donor: Address,
        amount: i128,
        message: String,
    ) -> Result<bool, CharityError> {
        contribution::contribute(&e, campaign_id, donor, amount, message)
    }

    /// End a campaign and pay out its remaining balance. Owner only.
    pub fn end_campaign(e: Env, campaign_id: CampaignId, caller: Address) -> Result<i128, CharityError> {
        lifecycle::end(&e, campaign_id, caller)
    }

    pub fn extend_end_time(
        e: Env,
        campaign_id: CampaignId,
        caller: Address,
        new_end_time: u64,
    ) -> Result<(), CharityError> {
        lifecycle::extend_end_time(&e, campaign_id, caller, new_end_time)
    }

    /// Let donors reclaim their contributions. Owner only.
    pub fn issue_refund(
        e: Env,
        campaign_id: CampaignId,
        caller: Address,
        message: String,
    ) -> Result<(), CharityError> {
        settlement::issue_refund(&e, campaign_id, caller, message)
    }

    pub fn claim_refund(e: Env, campaign_id: CampaignId, donor: Address) -> Result<i128, CharityError> {
        settlement::claim_refund(&e, campaign_id, donor)
    }

    pub fn withdraw(
        e: Env,
        campaign_id: CampaignId,
        caller: Address,
        amount: i128,
    ) -> Result<(), CharityError> {
        settlement::withdraw(&e, campaign_id, caller, amount)
    }

    /// View functions
    pub fn get_campaign(e: Env, campaign_id: CampaignId) -> Result<Campaign, CharityError> {
        storage::load_campaign(&e, campaign_id)
    }

    /// Up to `limit` campaigns starting at id `start`, capped at `MAX_PAGE_SIZE`.
    pub fn get_campaigns(e: Env, start: CampaignId, limit: u32) -> Vec<Campaign> {
        let mut campaigns = Vec::new(&e);
        let end = page_end(start, limit, storage::campaign_count(&e));
        for id in start..end {
            if let Ok(campaign) = storage::load_campaign(&e, id) {
                campaigns.push_back(campaign);
            }
        }
        campaigns
    }

    pub fn get_campaign_count(e: Env) -> u64 {
        storage::campaign_count(&e)
    }

    pub fn get_campaigns_by_owner(e: Env, owner: Address) -> Vec<CampaignId> {
        storage::owner_campaigns(&e, &owner)
    }

    pub fn get_owner_count(e: Env) -> u32 {
        storage::owner_count(&e)
    }

    pub fn get_contribution_history(
        e: Env,
        campaign_id: CampaignId,
        donor: Address,
    ) -> Vec<DonationRecord> {
        storage::records_for(&e, PersistentKey::DonorRecords(campaign_id, donor))
    }

    pub fn get_donor_history(e: Env, donor: Address) -> Vec<DonationRecord> {
        storage::records_for(&e, PersistentKey::DonorIndex(donor))
    }

    /// Up to `limit` history records starting at record `start`.
    pub fn get_all_history(e: Env, start: RecordId, limit: u32) -> Vec<DonationRecord> {
        let mut records = Vec::new(&e);
        let end = page_end(start, limit, storage::record_count(&e));
        for id in start..end {
            if let Some(record) = storage::load_record(&e, id) {
                records.push_back(record);
            }
        }
        records
    }

    pub fn get_donor_amount(e: Env, campaign_id: CampaignId, donor: Address) -> i128 {
        storage::donor_amount(&e, campaign_id, &donor)
    }

    pub fn get_reference_rate(e: Env) -> Result<i128, CharityError> {
        oracle::reference_rate(&e)
    }

    pub fn get_converted_amount(e: Env, amount: i128) -> Result<i128, CharityError> {
        oracle::convert(&e, amount)
    }

    pub fn get_token(e: Env) -> Result<Address, CharityError> {
        storage::read_token(&e)
    }

    pub fn get_price_feed(e: Env) -> Result<Address, CharityError> {
        storage::read_price_feed(&e)
    }
}

fn page_end(start: u64, limit: u32, count: u64) -> u64 {
    let limit = limit.min(MAX_PAGE_SIZE) as u64;
    start.saturating_add(limit).min(count)
}
