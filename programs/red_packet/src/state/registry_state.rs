use anchor_lang::prelude::*;
use crate::error::*;
use crate::utils::load_program_account;

/**
 * Registry state account
 *
 * This struct tracks the packet counter, enabling monotonic id assignment
 * for new red packets.
 *
 * Derivation: ["registry"]
 *
 * Lifecycle:
 * 1. Created on first packet creation (using init_if_needed)
 * 2. Incremented with each new packet
 *
 * Design Notes:
 * - Ids start at 1, so id 0 never refers to a packet
 * - Ids are never reused
 */
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct RegistryState {
    /// Number of packets created so far, equal to the last assigned id
    pub packet_count: u64,
}

impl RegistryState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<RegistryState>();

    /// Number of packets created so far, read from the raw registry PDA
    ///
    /// A registry that was never initialized has created no packets.
    pub fn packet_count_of(info: &AccountInfo) -> Result<u64> {
        let registry: Option<Self> = load_program_account(info)?;
        Ok(registry.map_or(0, |registry| registry.packet_count))
    }

    /// Id the next created packet will receive
    pub fn next_id(&self) -> Result<u64> {
        self.packet_count
            .checked_add(1)
            .ok_or_else(|| error!(RedPacketError::ArithmeticOverflow))
    }

    /// Assigns the next id and advances the counter
    pub fn allocate_id(&mut self) -> Result<u64> {
        let id = self.next_id()?;
        self.packet_count = id;
        Ok(id)
    }
}
