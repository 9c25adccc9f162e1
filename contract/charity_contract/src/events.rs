// Payloads are published with `Events::publish`, deprecated since soroban-sdk 23.
#![allow(deprecated)]

use soroban_sdk::{contracttype, Address, Env, String, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub funding_target: i128,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct ContributedEvent {
    pub campaign_id: CampaignId,
    pub donor: Address,
    pub amount: i128,
    pub message: String,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignEndedEvent {
    pub campaign_id: CampaignId,
    pub beneficiary: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct TimeExtendedEvent {
    pub campaign_id: CampaignId,
    pub new_end_time: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct RefundIssuedEvent {
    pub campaign_id: CampaignId,
    pub message: String,
}

#[contracttype]
#[derive(Clone)]
pub struct RefundClaimedEvent {
    pub campaign_id: CampaignId,
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct WithdrawnEvent {
    pub campaign_id: CampaignId,
    pub beneficiary: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_contributed(env: &Env, event: ContributedEvent) {
    env.events().publish((Symbol::new(env, "contributed"),), event);
}

/// Published once per campaign, on the contribution that reaches the target.
pub fn emit_target_achieved(env: &Env, campaign_id: CampaignId) {
    env.events().publish((Symbol::new(env, "target_achieved"),), campaign_id);
}

pub fn emit_campaign_ended(env: &Env, event: CampaignEndedEvent) {
    env.events().publish((Symbol::new(env, "campaign_ended"),), event);
}

pub fn emit_time_extended(env: &Env, event: TimeExtendedEvent) {
    env.events().publish((Symbol::new(env, "time_extended"),), event);
}

pub fn emit_refund_issued(env: &Env, event: RefundIssuedEvent) {
    env.events().publish((Symbol::new(env, "refund_issued"),), event);
}

pub fn emit_refund_claimed(env: &Env, event: RefundClaimedEvent) {
    env.events().publish((Symbol::new(env, "refund_claimed"),), event);
}

pub fn emit_withdrawn(env: &Env, event: WithdrawnEvent) {
    env.events().publish((Symbol::new(env, "withdrawn"),), event);
}
