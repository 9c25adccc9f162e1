use soroban_sdk::{log, token, Address, Env, String, Vec};

use crate::events::{self, CampaignCreatedEvent, CampaignEndedEvent, TimeExtendedEvent};
use crate::settlement;
use crate::storage;
use crate::storage_types::*;

/// Closed means explicitly ended or past the end time. The stored state only
/// flips on `end`.
pub fn is_closed(e: &Env, campaign: &Campaign) -> bool {
    campaign.state == CampaignState::Ended || e.ledger().timestamp() >= campaign.end_time
}

pub fn ensure_open(e: &Env, campaign: &Campaign) -> Result<(), CharityError> {
    if is_closed(e, campaign) {
        return Err(CharityError::CampaignClosed);
    }
    Ok(())
}

pub fn ensure_owner(campaign: &Campaign, caller: &Address) -> Result<(), CharityError> {
    if campaign.owner != *caller {
        return Err(CharityError::NotOwner);
    }
    Ok(())
}

/// Load a campaign for an owner-only mutation that requires it to be open.
fn load_owned_open(e: &Env, campaign_id: CampaignId, caller: &Address) -> Result<Campaign, CharityError> {
    caller.require_auth();
    let campaign = storage::load_campaign(e, campaign_id)?;
    ensure_owner(&campaign, caller)?;
    ensure_open(e, &campaign)?;
    Ok(campaign)
}

pub fn create(
    e: &Env,
    owner: Address,
    beneficiary: Address,
    title: String,
    funding_target: i128,
    end_time: u64,
    description: String,
    category: u32,
    image_ref: String,
) -> Result<CampaignId, CharityError> {
    owner.require_auth();

    // Targets are given in whole tokens, stored in base units.
    let token_address = storage::read_token(e)?;
    let decimals = token::Client::new(e, &token_address).decimals();
    let scale = 10i128
        .checked_pow(decimals)
        .ok_or(CharityError::ArithmeticOverflow)?;
    let funding_target = funding_target
        .checked_mul(scale)
        .ok_or(CharityError::ArithmeticOverflow)?;

    let campaign_id = storage::next_campaign_id(e);
    let campaign = Campaign {
        id: campaign_id,
        owner: owner.clone(),
        beneficiary,
        title,
        funding_target,
        description,
        end_time,
        state: CampaignState::Open,
        category,
        refundable: false,
        refund_message: String::from_str(e, ""),
        raised: 0,
        withdrawn: 0,
        donors: Vec::new(e),
        image_ref,
        target_achieved: false,
        created_at: e.ledger().timestamp(),
    };

    storage::save_campaign(e, &campaign);
    storage::append_owner_index(e, &owner, campaign_id);

    events::emit_campaign_created(
        e,
        CampaignCreatedEvent {
            campaign_id,
            owner,
            funding_target,
            end_time,
        },
    );

    Ok(campaign_id)
}

/// Close the campaign and pay the unwithdrawn balance to the beneficiary.
pub fn end(e: &Env, campaign_id: CampaignId, caller: Address) -> Result<i128, CharityError> {
    let mut campaign = load_owned_open(e, campaign_id, &caller)?;

    let payout = campaign.raised - campaign.withdrawn;
    campaign.withdrawn = campaign.raised;
    campaign.state = CampaignState::Ended;
    storage::save_campaign(e, &campaign);

    if payout > 0 {
        settlement::pay_out(e, &campaign.beneficiary, payout)?;
    }
    log!(e, "campaign ended", campaign_id, payout);

    events::emit_campaign_ended(
        e,
        CampaignEndedEvent {
            campaign_id,
            beneficiary: campaign.beneficiary,
            amount: payout,
        },
    );

    Ok(payout)
}

pub fn extend_end_time(
    e: &Env,
    campaign_id: CampaignId,
    caller: Address,
    new_end_time: u64,
) -> Result<(), CharityError> {
    let mut campaign = load_owned_open(e, campaign_id, &caller)?;

    campaign.end_time = new_end_time;
    storage::save_campaign(e, &campaign);

    events::emit_time_extended(
        e,
        TimeExtendedEvent {
            campaign_id,
            new_end_time,
        },
    );
    Ok(())
}
