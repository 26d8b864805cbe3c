use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use anchor_lang::solana_program::instruction::TRANSACTION_LEVEL_STACK_HEIGHT;
use crate::error::*;

/// Byte range of the newest hash in the SlotHashes sysvar:
/// u64 entry count, then (u64 slot, [u8; 32] hash) entries, newest first
const NEWEST_SLOT_HASH: std::ops::Range<usize> = 16..48;

/// Ledger-provided context of the request being executed
///
/// Supplies the commit timestamp and the inputs of claim entropy. On-chain it is
/// read from the Clock and SlotHashes sysvars; other hosts fill it from their own
/// commit-ordering state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedgerContext {
    /// Slot (or sequence number) the request executes in
    pub slot: u64,
    /// Commit time (Unix timestamp)
    pub unix_timestamp: i64,
    /// Most recent ledger hash, unknown to the caller at submission time
    pub recent_hash: [u8; 32],
}

impl LedgerContext {
    /// Builds the context from the Clock sysvar and the raw SlotHashes sysvar account
    pub fn from_sysvars(clock: &Clock, slot_hashes: &AccountInfo) -> Result<Self> {
        let data = slot_hashes.try_borrow_data()?;
        Ok(Self {
            slot: clock.slot,
            unix_timestamp: clock.unix_timestamp,
            recent_hash: newest_slot_hash(&data)?,
        })
    }

    /**
     * Derives the entropy for one claim
     *
     * Mixes the newest slot hash with the slot, timestamp, packet id, slot index and
     * claimer. This is best-effort fairness, not a VRF.
     *
     * Known limits:
     * - A program wrapping `claim` through CPI could read the grant and revert when it
     *   is low, undoing the claim status and retrying later. `claim` therefore only
     *   runs as a top-level instruction (see `require_top_level_call`).
     * - The newest slot hash is public before the claim lands, so a claimer holding
     *   many funded keys can grind keys against a predicted slot. The landing slot and
     *   timestamp are outside its control, which narrows but does not close this.
     */
    pub fn claim_entropy(&self, packet_id: u64, slot_index: u32, claimer: &Pubkey) -> [u8; 32] {
        hashv(&[
            &self.recent_hash,
            &self.slot.to_le_bytes(),
            &self.unix_timestamp.to_le_bytes(),
            &packet_id.to_le_bytes(),
            &slot_index.to_le_bytes(),
            &claimer.to_bytes(),
        ])
        .to_bytes()
    }
}

/// Rejects claims issued through cross-program invocation
///
/// `stack_height` is the runtime's instruction stack height; a top-level
/// instruction runs at `TRANSACTION_LEVEL_STACK_HEIGHT`.
pub fn require_top_level_call(stack_height: usize) -> Result<()> {
    require_eq!(
        stack_height,
        TRANSACTION_LEVEL_STACK_HEIGHT,
        RedPacketError::CpiClaimNotAllowed
    );
    Ok(())
}

/// Reads the newest hash out of raw SlotHashes sysvar data
///
/// The sysvar is too large to deserialize within the compute budget, so only the
/// first entry is read.
pub fn newest_slot_hash(data: &[u8]) -> Result<[u8; 32]> {
    require!(data.len() >= NEWEST_SLOT_HASH.end, RedPacketError::InvalidSlotHashes);

    let mut count = [0u8; 8];
    count.copy_from_slice(&data[..8]);
    require!(u64::from_le_bytes(count) > 0, RedPacketError::InvalidSlotHashes);

    let mut hash = [0u8; 32];
    hash.copy_from_slice(&data[NEWEST_SLOT_HASH]);
    Ok(hash)
}
