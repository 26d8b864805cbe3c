use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::utils::{load_program_account, store_program_account};

/// How a packet's deposit is divided between its slots
///
/// Borsh encodes variants by declaration order: Equal = 0, Random = 1.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitMode {
    /// Every slot receives the same share, the last slot absorbs the remainder
    #[default]
    Equal,
    /// Lucky draw: each slot receives a pseudo-random share bounded by twice the average
    Random,
}

/// One committed claim against a red packet
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClaimRecord {
    /// Address that received the grant
    pub claimer: Pubkey,
    /// Amount granted, at least one smallest unit
    pub amount: u64,
    /// Commit time (Unix timestamp)
    pub timestamp: i64,
}

impl ClaimRecord {
    /// Serialized size: claimer + amount + timestamp
    pub const LEN: usize = 32 + 8 + 8;
}

/**
 * Red packet state account
 *
 * This struct represents one distribution event: a deposit split between a
 * bounded number of claim slots, either equally or by lucky draw.
 *
 * Derivation: ["red_packet", packet_id]
 *
 * Lifecycle:
 * 1. Created during create_packet with the full deposit and slot count
 * 2. Mutated only by successful claims (remaining amount/slots, claim history)
 * 3. Never closed: the claim history stays readable after exhaustion
 *
 * Invariants:
 * - remaining_amount <= total_amount and remaining_slots <= total_slots
 * - remaining_amount >= remaining_slots (one smallest unit reserved per open slot)
 * - remaining_slots == 0 exactly when remaining_amount == 0
 * - once exhausted, the claim amounts add up to total_amount
 */
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct RedPacket {
    /// Bump seed for PDA derivation
    /// - Saved to sign vault payouts without recomputation
    pub bump: u8,

    /// Monotonic id assigned by the registry, starting at 1
    pub id: u64,

    /// Creator who funded the packet
    pub creator: Pubkey,

    /// Mint of the deposited token
    pub token_mint: Pubkey,

    /// Deposit amount, fixed at creation
    pub total_amount: u64,

    /// Amount not yet granted
    pub remaining_amount: u64,

    /// Number of claim slots, fixed at creation
    pub total_slots: u32,

    /// Slots not yet claimed
    pub remaining_slots: u32,

    /// Equal or random split, fixed at creation
    pub split_mode: SplitMode,

    /// Creation time (Unix timestamp)
    pub created_at: i64,

    /// Distinguishes a created packet from a never-created id
    pub exists: bool,

    /// Claim history in commit order
    pub claims: Vec<ClaimRecord>,
}

impl RedPacket {
    /// Fixed part of the account: discriminator + scalar fields + vec length prefix
    pub const BASE_LEN: usize = 8 + 1 + 8 + 32 + 32 + 8 + 8 + 4 + 4 + 1 + 8 + 1 + 4;

    /// Space required for a packet holding up to `total_slots` claim records
    pub fn space_for(total_slots: u32) -> usize {
        Self::BASE_LEN + total_slots as usize * ClaimRecord::LEN
    }

    /// Seeds for the packet PDA, without the bump
    pub fn seeds(packet_id: &[u8; 8]) -> [&[u8]; 2] {
        [PACKET_SEED.as_bytes(), packet_id.as_ref()]
    }

    /// Derives the packet PDA and its bump for `packet_id`
    pub fn find_address(packet_id: u64) -> (Pubkey, u8) {
        let id_bytes = packet_id.to_le_bytes();
        Pubkey::find_program_address(&Self::seeds(&id_bytes), &crate::ID)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        id: u64,
        bump: u8,
        creator: Pubkey,
        token_mint: Pubkey,
        total_amount: u64,
        total_slots: u32,
        split_mode: SplitMode,
        created_at: i64,
    ) {
        self.bump = bump;
        self.id = id;
        self.creator = creator;
        self.token_mint = token_mint;
        self.total_amount = total_amount;
        self.remaining_amount = total_amount;
        self.total_slots = total_slots;
        self.remaining_slots = total_slots;
        self.split_mode = split_mode;
        self.created_at = created_at;
        self.exists = true;
        self.claims = Vec::with_capacity(total_slots as usize);
    }

    /// Number of slots already claimed, i.e. the index of the next slot
    pub fn claimed_slots(&self) -> u32 {
        self.total_slots.saturating_sub(self.remaining_slots)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining_slots == 0
    }

    /// Loads a packet from a raw PDA account
    ///
    /// An account with no data was never created and reads as `None`, so a
    /// missing packet is never confused with an exhausted one.
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        load_program_account(info)
    }

    /// Writes the packet back into its raw PDA account
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        store_program_account(self, info)
    }

    /// Sum of all committed grants
    pub fn claimed_total(&self) -> Result<u64> {
        self.claims.iter().try_fold(0u64, |acc, claim| {
            acc.checked_add(claim.amount)
                .ok_or_else(|| error!(RedPacketError::ArithmeticOverflow))
        })
    }
}

/// Read-only projection of a packet returned by the `get_packet` view
///
/// Claim history is served separately by `get_claims` to stay within the return data limit.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PacketView {
    pub id: u64,
    pub creator: Pubkey,
    pub token_mint: Pubkey,
    pub total_amount: u64,
    pub remaining_amount: u64,
    pub total_slots: u32,
    pub remaining_slots: u32,
    pub split_mode: SplitMode,
    pub created_at: i64,
    pub exists: bool,
}

impl From<&RedPacket> for PacketView {
    fn from(packet: &RedPacket) -> Self {
        Self {
            id: packet.id,
            creator: packet.creator,
            token_mint: packet.token_mint,
            total_amount: packet.total_amount,
            remaining_amount: packet.remaining_amount,
            total_slots: packet.total_slots,
            remaining_slots: packet.remaining_slots,
            split_mode: packet.split_mode,
            created_at: packet.created_at,
            exists: packet.exists,
        }
    }
}
