use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::get_stack_height;
use anchor_lang::solana_program::sysvar::slot_hashes;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{pay_from_vault, require_top_level_call, settle_claim, LedgerContext};

/**
 * Account context for claiming a red packet slot
 *
 * The packet and its vault are taken as raw PDA accounts so that a packet id that
 * was never created is reported as PacketNotFound rather than as an account
 * deserialization failure.
 *
 * Access Control: Any signer may claim once per packet
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(packet_id: u64)]
pub struct ClaimPacket<'info> {
    /// The red packet being claimed
    /// - Derived from: ["red_packet", packet_id]
    /// CHECK: Either empty (never created) or a RedPacket, verified in the handler
    #[account(
        mut,
        seeds = [PACKET_SEED.as_bytes(), packet_id.to_le_bytes().as_ref()],
        bump
    )]
    pub red_packet: UncheckedAccount<'info>,

    /// Claim ledger entry for this claimer
    /// - Derived from: ["claim", red_packet, claimer]
    #[account(
        init_if_needed,
        payer = claimer,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), red_packet.key().as_ref(), claimer.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Token vault holding the packet's deposit
    /// - Derived from: ["vault", red_packet]
    /// CHECK: PDA created by create_packet; the token program validates it on transfer
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), red_packet.key().as_ref()],
        bump
    )]
    pub token_vault: UncheckedAccount<'info>,

    /// The token mint, checked against the packet's mint in the handler
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Claimer's token account receiving the grant
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = claimer,
        token::token_program = token_program,
    )]
    pub claimer_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The claimer
    #[account(mut)]
    pub claimer: Signer<'info>,

    /// Source of claim entropy
    /// CHECK: Address constrained to the SlotHashes sysvar
    #[account(address = slot_hashes::ID)]
    pub recent_slot_hashes: UncheckedAccount<'info>,

    /// System program for claim status creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Claims one slot of a red packet
 *
 * @param ctx - The account context containing packet, ledger entry and token accounts
 * @param packet_id - Id of the packet to claim
 *
 * @returns The granted amount
 *
 * Validation Process:
 * 0. Called as a top-level instruction, not through CPI (CpiClaimNotAllowed)
 * 1. Packet exists (PacketNotFound)
 * 2. Packet has a remaining slot (PacketExhausted)
 * 3. Claimer has not claimed before (AlreadyClaimed)
 * 4. Grant is computed, bounds-checked and committed in one transition
 * 5. Grant is paid from the vault
 */
pub fn handle_claim(ctx: Context<ClaimPacket>, packet_id: u64) -> Result<u64> {
    let packet_info = ctx.accounts.red_packet.to_account_info();

    // ===== VALIDATION + EFFECTS PHASE =====

    // A CPI caller could inspect the grant and revert until it likes the draw
    require_top_level_call(get_stack_height())?;

    let mut packet = RedPacket::load(&packet_info)?.ok_or(RedPacketError::PacketNotFound)?;
    require_eq!(packet.id, packet_id, RedPacketError::PacketNotFound);

    let clock = Clock::get()?;
    let ledger_ctx = LedgerContext::from_sysvars(
        &clock,
        &ctx.accounts.recent_slot_hashes.to_account_info(),
    )?;

    let receipt = settle_claim(
        &mut packet,
        &mut *ctx.accounts.claim_status,
        ctx.accounts.claimer.key(),
        &ledger_ctx,
    )?;

    require_keys_eq!(
        ctx.accounts.token_mint.key(),
        packet.token_mint,
        RedPacketError::TokenMintMismatch
    );

    packet.store(&packet_info)?;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    let id_bytes = packet.id.to_le_bytes();
    let seeds = &[PACKET_SEED.as_bytes(), id_bytes.as_ref(), &[packet.bump]];
    let signer = &[&seeds[..]];

    pay_from_vault(
        packet_info.clone(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimer_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        receipt.amount,
        ctx.accounts.token_mint.decimals,
        signer,
    )?;

    emit_cpi!(PacketClaimed {
        packet: packet_info.key(),
        packet_id: receipt.packet_id,
        claimer: receipt.claimer,
        amount: receipt.amount,
        remaining_amount: receipt.remaining_amount,
        remaining_slots: receipt.remaining_slots,
        timestamp: receipt.timestamp,
    });

    if receipt.settled_packet() {
        emit_cpi!(PacketSettled {
            packet: packet_info.key(),
            packet_id: receipt.packet_id,
            total_amount: packet.total_amount,
            // One claim per slot, so a settled packet holds exactly total_slots claims
            claim_count: packet.total_slots,
        });
        msg!("red packet {} fully claimed", receipt.packet_id);
    }

    Ok(receipt.amount)
}
