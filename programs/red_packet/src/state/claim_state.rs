use anchor_lang::prelude::*;
use crate::error::*;
use crate::utils::ClaimLedger;

/**
 * Claim status account
 *
 * On-chain claim ledger entry for one (packet, claimer) pair. Its presence with
 * `claimed == true` is what makes a claim exactly-once.
 *
 * Derivation: ["claim", packet_key, claimer_key]
 *
 * Lifecycle:
 * 1. Created on the first claim attempt (using init_if_needed)
 * 2. Marked claimed in the same instruction that commits the grant
 * 3. Never closed
 *
 * Design Notes:
 * - A failed claim reverts the whole transaction, so an unclaimed entry is never persisted
 */
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct ClaimStatus {
    /// Id of the packet this entry belongs to
    pub packet_id: u64,

    /// Claimer this entry belongs to
    pub claimer: Pubkey,

    /// Set once the claim commits
    pub claimed: bool,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + packet_id + claimer + claimed
    pub const LEN: usize = 8 + 8 + 32 + 1;
}

impl ClaimLedger for ClaimStatus {
    fn has_claimed(&self, packet_id: u64, claimer: &Pubkey) -> bool {
        self.claimed && self.packet_id == packet_id && self.claimer == *claimer
    }

    fn record_claim(&mut self, packet_id: u64, claimer: &Pubkey) -> Result<()> {
        require!(!self.claimed, RedPacketError::DuplicateClaim);

        self.packet_id = packet_id;
        self.claimer = *claimer;
        self.claimed = true;
        Ok(())
    }
}
