use soroban_sdk::{token, Address, Env, String};

use crate::events::{self, ContributedEvent};
use crate::lifecycle;
use crate::storage;
use crate::storage_types::*;

/// Record a contribution. Returns true when this contribution is the one that
/// first brings the campaign to its funding target.
pub fn contribute(
    e: &Env,
    campaign_id: CampaignId,
    donor: Address,
    amount: i128,
    message: String,
) -> Result<bool, CharityError> {
    donor.require_auth();

    if amount < MIN_CONTRIBUTION {
        return Err(CharityError::BelowMinimum);
    }

    let mut campaign = storage::load_campaign(e, campaign_id)?;
    lifecycle::ensure_open(e, &campaign)?;

    let token_address = storage::read_token(e)?;
    token::Client::new(e, &token_address).transfer(&donor, &e.current_contract_address(), &amount);

    let previous = campaign.raised;
    campaign.raised = previous
        .checked_add(amount)
        .ok_or(CharityError::ArithmeticOverflow)?;

    if !storage::has_donor_entry(e, campaign_id, &donor) {
        campaign.donors.push_back(donor.clone());
    }
    let entry = storage::donor_amount(e, campaign_id, &donor)
        .checked_add(amount)
        .ok_or(CharityError::ArithmeticOverflow)?;
    storage::set_donor_amount(e, campaign_id, &donor, entry);

    storage::append_record(e, campaign_id, &donor, amount, message.clone());

    let crossed = !campaign.target_achieved
        && previous < campaign.funding_target
        && campaign.raised >= campaign.funding_target;
    if crossed {
        campaign.target_achieved = true;
    }
    storage::save_campaign(e, &campaign);

    events::emit_contributed(
        e,
        ContributedEvent {
            campaign_id,
            donor,
            amount,
            message,
        },
    );
    if crossed {
        events::emit_target_achieved(e, campaign_id);
    }

    Ok(crossed)
}
