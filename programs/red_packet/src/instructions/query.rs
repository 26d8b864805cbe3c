use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::state::*;
use crate::utils::{load_program_account, page, ClaimLedger};

/**
 * Read-only views over committed packet state
 *
 * These instructions never write. Clients call them through transaction
 * simulation and read the Anchor return data. Packet and claim status PDAs are
 * taken unchecked so that ids which were never created read as "not found"
 * instead of failing account validation.
 */
#[derive(Accounts)]
#[instruction(packet_id: u64)]
pub struct GetPacket<'info> {
    /// CHECK: Either empty (never created) or a RedPacket, verified by RedPacket::load
    #[account(
        seeds = [PACKET_SEED.as_bytes(), packet_id.to_le_bytes().as_ref()],
        bump
    )]
    pub red_packet: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct GetPackets<'info> {
    /// CHECK: Either empty (no packet created yet) or the RegistryState
    #[account(
        seeds = [REGISTRY_SEED.as_bytes()],
        bump
    )]
    pub registry: UncheckedAccount<'info>,
    // remaining_accounts: packet PDAs for ids offset + 1, offset + 2, ... in order
}

#[derive(Accounts)]
#[instruction(packet_id: u64, claimer: Pubkey)]
pub struct HasClaimed<'info> {
    /// CHECK: Only used for claim status PDA derivation
    #[account(
        seeds = [PACKET_SEED.as_bytes(), packet_id.to_le_bytes().as_ref()],
        bump
    )]
    pub red_packet: UncheckedAccount<'info>,

    /// CHECK: Either empty (no claim) or a ClaimStatus owned by this program
    #[account(
        seeds = [CLAIM_SEED.as_bytes(), red_packet.key().as_ref(), claimer.as_ref()],
        bump
    )]
    pub claim_status: UncheckedAccount<'info>,
}

/// Returns the packet, or a default view with `exists == false` if it was never created
pub fn handle_get_packet(ctx: Context<GetPacket>, _packet_id: u64) -> Result<PacketView> {
    read_packet_view(&ctx.accounts.red_packet.to_account_info())
}

/**
 * Lists packets in creation order
 *
 * The caller passes the packet PDAs of the requested window as remaining accounts,
 * in id order starting at `offset + 1`. The window is clipped to the packets the
 * registry has created and to MAX_PACKETS_PER_VIEW.
 */
pub fn handle_get_packets(
    ctx: Context<GetPackets>,
    offset: u32,
    limit: u32,
) -> Result<Vec<PacketView>> {
    let packet_count = RegistryState::packet_count_of(&ctx.accounts.registry.to_account_info())?;
    read_packet_views(packet_count, offset, limit, ctx.remaining_accounts)
}

/// Returns up to MAX_CLAIMS_PER_VIEW claim records in commit order, starting at `offset`
pub fn handle_get_claims(
    ctx: Context<GetPacket>,
    _packet_id: u64,
    offset: u32,
    limit: u32,
) -> Result<Vec<ClaimRecord>> {
    read_claims(&ctx.accounts.red_packet.to_account_info(), offset, limit)
}

/// Whether `claimer` holds a committed claim on the packet
pub fn handle_has_claimed(
    ctx: Context<HasClaimed>,
    packet_id: u64,
    claimer: Pubkey,
) -> Result<bool> {
    read_has_claimed(&ctx.accounts.claim_status.to_account_info(), packet_id, &claimer)
}

pub fn read_packet_view(info: &AccountInfo) -> Result<PacketView> {
    let packet = RedPacket::load(info)?;
    Ok(packet.as_ref().map(PacketView::from).unwrap_or_default())
}

/// Views of packets `offset + 1 ..`, one per supplied account, capped at MAX_PACKETS_PER_VIEW
pub fn read_packet_views(
    packet_count: u64,
    offset: u32,
    limit: u32,
    accounts: &[AccountInfo],
) -> Result<Vec<PacketView>> {
    let first_id = u64::from(offset) + 1;
    let window = packet_count
        .saturating_sub(u64::from(offset))
        .min(u64::from(limit.min(MAX_PACKETS_PER_VIEW))) as usize;
    require!(
        accounts.len() >= window,
        RedPacketError::MissingPacketAccounts
    );

    let mut views = Vec::with_capacity(window);
    for (packet_id, info) in (first_id..).zip(&accounts[..window]) {
        let (address, _) = RedPacket::find_address(packet_id);
        require_keys_eq!(
            *info.key,
            address,
            RedPacketError::PacketAddressMismatch
        );
        views.push(read_packet_view(info)?);
    }
    Ok(views)
}

pub fn read_claims(info: &AccountInfo, offset: u32, limit: u32) -> Result<Vec<ClaimRecord>> {
    let claims = match RedPacket::load(info)? {
        Some(packet) => page(&packet.claims, offset, limit, MAX_CLAIMS_PER_VIEW).to_vec(),
        None => Vec::new(),
    };
    Ok(claims)
}

/// An empty claim status account means no claim was ever committed
pub fn read_has_claimed(info: &AccountInfo, packet_id: u64, claimer: &Pubkey) -> Result<bool> {
    let status: Option<ClaimStatus> = load_program_account(info)?;
    Ok(status.is_some_and(|status| status.has_claimed(packet_id, claimer)))
}
