use anchor_lang::prelude::*;
use crate::error::*;
use crate::state::{ClaimRecord, RedPacket};
use super::conservation;
use super::entropy::LedgerContext;
use super::split::compute_grant;

/// Exactly-once membership of (packet id, claimer) pairs
pub trait ClaimLedger {
    /// Whether `claimer` already holds a committed claim on `packet_id`
    fn has_claimed(&self, packet_id: u64, claimer: &Pubkey) -> bool;

    /// Inserts the pair, failing with `DuplicateClaim` if it is already present
    fn record_claim(&mut self, packet_id: u64, claimer: &Pubkey) -> Result<()>;
}

/// Outcome of a committed claim
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub packet_id: u64,
    pub claimer: Pubkey,
    pub amount: u64,
    pub remaining_amount: u64,
    pub remaining_slots: u32,
    pub timestamp: i64,
}

impl ClaimReceipt {
    pub fn settled_packet(&self) -> bool {
        self.remaining_slots == 0
    }
}

/**
 * Executes one claim as a single state transition
 *
 * @param packet - Packet being claimed
 * @param ledger - Claim ledger holding the (packet, claimer) entries
 * @param claimer - Authenticated caller
 * @param ctx - Ledger context of the executing request
 *
 * Validation Process (short-circuits on the first failure):
 * 1. Packet exists
 * 2. Packet has a remaining slot
 * 3. Claimer has not claimed this packet yet
 *
 * Every fallible step (split, bounds, checked arithmetic, ledger insert) runs before
 * the packet is touched, so a failed claim leaves packet and ledger unchanged.
 */
pub fn settle_claim<L: ClaimLedger + ?Sized>(
    packet: &mut RedPacket,
    ledger: &mut L,
    claimer: Pubkey,
    ctx: &LedgerContext,
) -> Result<ClaimReceipt> {
    // ===== VALIDATION PHASE =====

    require!(packet.exists, RedPacketError::PacketNotFound);
    require!(packet.remaining_slots > 0, RedPacketError::PacketExhausted);
    require!(
        !ledger.has_claimed(packet.id, &claimer),
        RedPacketError::AlreadyClaimed
    );

    // ===== SPLIT PHASE =====

    let entropy = ctx.claim_entropy(packet.id, packet.claimed_slots(), &claimer);
    let amount = compute_grant(
        packet.split_mode,
        packet.remaining_amount,
        packet.remaining_slots,
        &entropy,
    )?;
    conservation::check_grant(amount, packet.remaining_amount, packet.remaining_slots)?;

    let remaining_amount = conservation::debit(packet.remaining_amount, amount)?;
    let remaining_slots = packet
        .remaining_slots
        .checked_sub(1)
        .ok_or(RedPacketError::ArithmeticOverflow)?;
    conservation::check_co_exhaustion(remaining_amount, remaining_slots)?;

    if remaining_slots == 0 {
        let granted_total = packet
            .claimed_total()?
            .checked_add(amount)
            .ok_or(RedPacketError::ArithmeticOverflow)?;
        conservation::check_settled(packet.total_amount, granted_total)?;
    }

    // ===== EFFECTS PHASE =====

    // Last fallible step; nothing below can fail
    ledger.record_claim(packet.id, &claimer)?;

    packet.remaining_amount = remaining_amount;
    packet.remaining_slots = remaining_slots;
    packet.claims.push(ClaimRecord {
        claimer,
        amount,
        timestamp: ctx.unix_timestamp,
    });

    Ok(ClaimReceipt {
        packet_id: packet.id,
        claimer,
        amount,
        remaining_amount,
        remaining_slots,
        timestamp: ctx.unix_timestamp,
    })
}
