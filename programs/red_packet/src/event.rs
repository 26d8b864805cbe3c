use anchor_lang::prelude::*;
use crate::state::SplitMode;

/// Event emitted when a new red packet is created
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct PacketCreated {
    /// The red packet account public key
    pub packet: Pubkey,
    /// Id assigned to the packet, shared with claimants out-of-band
    pub packet_id: u64,
    /// Creator who funded the packet
    pub creator: Pubkey,
    /// Token mint of the deposit
    pub token_mint: Pubkey,
    /// Total amount deposited
    pub total_amount: u64,
    /// Number of claim slots
    pub total_slots: u32,
    /// Equal or random split
    pub split_mode: SplitMode,
    /// Creation time (Unix timestamp)
    pub created_at: i64,
}

/// Event emitted when a slot is claimed
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct PacketClaimed {
    /// The red packet account public key
    pub packet: Pubkey,
    /// Id of the claimed packet
    pub packet_id: u64,
    /// Address of the claimer
    pub claimer: Pubkey,
    /// Amount granted by this claim
    pub amount: u64,
    /// Amount left in the packet after this claim
    pub remaining_amount: u64,
    /// Slots left in the packet after this claim
    pub remaining_slots: u32,
    /// Claim time (Unix timestamp)
    pub timestamp: i64,
}

/// Event emitted when the last slot of a packet is claimed and the packet is settled
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct PacketSettled {
    /// The red packet account public key
    pub packet: Pubkey,
    /// Id of the exhausted packet
    pub packet_id: u64,
    /// Total amount distributed, equal to the deposit
    pub total_amount: u64,
    /// Number of claims committed
    pub claim_count: u32,
}
