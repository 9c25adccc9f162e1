use soroban_sdk::{log, token, Address, Env, String};

use crate::events::{self, RefundClaimedEvent, RefundIssuedEvent, WithdrawnEvent};
use crate::lifecycle;
use crate::storage;
use crate::storage_types::*;

/// Transfer `amount` of the campaign token out of the contract.
pub fn pay_out(e: &Env, recipient: &Address, amount: i128) -> Result<(), CharityError> {
    let token_address = storage::read_token(e)?;
    token::Client::new(e, &token_address).transfer(&e.current_contract_address(), recipient, &amount);
    Ok(())
}

fn available(campaign: &Campaign) -> i128 {
    campaign.raised - campaign.withdrawn
}

pub fn issue_refund(
    e: &Env,
    campaign_id: CampaignId,
    caller: Address,
    message: String,
) -> Result<(), CharityError> {
    caller.require_auth();

    let mut campaign = storage::load_campaign(e, campaign_id)?;
    lifecycle::ensure_owner(&campaign, &caller)?;
    lifecycle::ensure_open(e, &campaign)?;

    if campaign.raised == 0 {
        return Err(CharityError::NotRefundable);
    }

    campaign.refundable = true;
    campaign.refund_message = message.clone();
    storage::save_campaign(e, &campaign);

    events::emit_refund_issued(e, RefundIssuedEvent { campaign_id, message });
    Ok(())
}

/// Return the donor's whole ledger entry. A donor with nothing left to claim
/// gets 0 and no transfer.
pub fn claim_refund(e: &Env, campaign_id: CampaignId, donor: Address) -> Result<i128, CharityError> {
    donor.require_auth();

    let mut campaign = storage::load_campaign(e, campaign_id)?;
    if !campaign.refundable {
        return Err(CharityError::NotRefundable);
    }

    let amount = storage::donor_amount(e, campaign_id, &donor);
    if amount == 0 {
        return Ok(0);
    }
    if amount > available(&campaign) {
        return Err(CharityError::InsufficientFund);
    }

    // Ledger first, then transfer.
    storage::set_donor_amount(e, campaign_id, &donor, 0);
    campaign.raised -= amount;
    storage::save_campaign(e, &campaign);

    pay_out(e, &donor, amount)?;
    log!(e, "refund claimed", campaign_id, amount);

    events::emit_refund_claimed(
        e,
        RefundClaimedEvent {
            campaign_id,
            donor,
            amount,
        },
    );
    Ok(amount)
}

pub fn withdraw(
    e: &Env,
    campaign_id: CampaignId,
    caller: Address,
    amount: i128,
) -> Result<(), CharityError> {
    caller.require_auth();

    let mut campaign = storage::load_campaign(e, campaign_id)?;
    lifecycle::ensure_owner(&campaign, &caller)?;

    if amount < MIN_CONTRIBUTION {
        return Err(CharityError::BelowMinimum);
    }
    if amount > available(&campaign) {
        return Err(CharityError::InsufficientFund);
    }

    campaign.withdrawn += amount;
    storage::save_campaign(e, &campaign);

    pay_out(e, &campaign.beneficiary, amount)?;
    log!(e, "withdrawn", campaign_id, amount);

    events::emit_withdrawn(
        e,
        WithdrawnEvent {
            campaign_id,
            beneficiary: campaign.beneficiary,
            amount,
        },
    );
    Ok(())
}
