use anchor_lang::prelude::*;

declare_id!("F5GRqzgyqRYoCRvMuhuachj56a6sGFxtef4LX6EnjGSL");

pub mod constants;
pub mod engine;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::{ClaimRecord, PacketView, SplitMode};

/**
 * Red Packet Program
 *
 * A Solana program that splits a token deposit between a bounded number of
 * claimants, either in equal shares or in lucky-draw random shares.
 *
 * Key Features:
 * - Equal split: every slot gets floor(remaining / slots), the last slot takes the rest
 * - Random split: each slot draws from [1, 2 x average], reserving one unit per open slot
 * - Exact conservation: the claims of an exhausted packet add up to its deposit
 * - Exactly-once claims per (packet, claimer)
 * - Support for both SPL Token and Token 2022
 * - Cross-program call event emission for indexing
 *
 * Architecture:
 * - Registry PDA: packet counter for monotonic id assignment
 * - Red Packet PDA: deposit accounting and claim history
 * - Token Vault PDA: holds the deposit, owned by the packet PDA
 * - Claim Status PDAs: claim ledger entries
 *
 * Workflow:
 * 1. Creator creates a packet and deposits tokens, sharing the emitted packet id
 * 2. Claimers claim one slot each until the packet is exhausted
 * 3. Anyone lists packets and reads packet state and claim history through the view
 *    instructions
 */
#[program]
pub mod red_packet {
    use super::*;

    /**
     * Creates a new red packet
     *
     * @param ctx - Account context containing registry, packet, vault and creator accounts
     * @param total_amount - Deposit in the mint's smallest unit
     * @param total_slots - Number of claimants
     * @param split_mode - Equal or random split
     *
     * Access Control: Any signer
     */
    pub fn create_packet(
        ctx: Context<CreatePacket>,
        total_amount: u64,
        total_slots: u32,
        split_mode: SplitMode,
    ) -> Result<u64> {
        handle_create_packet(ctx, total_amount, total_slots, split_mode)
    }

    /**
     * Claims one slot of a red packet
     *
     * @param ctx - Account context containing packet, claim status and token accounts
     * @param packet_id - Id of the packet to claim
     *
     * Access Control: Any signer, once per packet
     */
    pub fn claim(ctx: Context<ClaimPacket>, packet_id: u64) -> Result<u64> {
        handle_claim(ctx, packet_id)
    }

    /// View: packet state, `exists == false` for an id that was never created
    pub fn get_packet(ctx: Context<GetPacket>, packet_id: u64) -> Result<PacketView> {
        handle_get_packet(ctx, packet_id)
    }

    /// View: a page of packets in creation order, read from the packet PDAs passed as
    /// remaining accounts
    pub fn get_packets(ctx: Context<GetPackets>, offset: u32, limit: u32) -> Result<Vec<PacketView>> {
        handle_get_packets(ctx, offset, limit)
    }

    /// View: a page of claim records in commit order
    pub fn get_claims(
        ctx: Context<GetPacket>,
        packet_id: u64,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<ClaimRecord>> {
        handle_get_claims(ctx, packet_id, offset, limit)
    }

    /// View: whether `claimer` already claimed the packet
    pub fn has_claimed(ctx: Context<HasClaimed>, packet_id: u64, claimer: Pubkey) -> Result<bool> {
        handle_has_claimed(ctx, packet_id, claimer)
    }
}
