use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{conservation, deposit_to_vault};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new red packet
 *
 * This instruction creates a packet with automatic id assignment:
 * - Creates or updates the registry PDA that tracks the packet counter
 * - Creates a packet PDA keyed by the next id
 * - Creates a token vault PDA holding the deposit
 * - Transfers the full deposit from the creator to the vault
 *
 * Access Control: Any signer can create a packet with their own tokens
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(total_amount: u64, total_slots: u32)]
pub struct CreatePacket<'info> {
    /// Registry account (PDA) that tracks the packet counter
    /// - Derived from: ["registry"]
    #[account(
        init_if_needed,
        payer = creator,
        space = RegistryState::LEN,
        seeds = [REGISTRY_SEED.as_bytes()],
        bump
    )]
    pub registry: Account<'info, RegistryState>,

    /// The red packet account (PDA)
    /// - Derived from: ["red_packet", registry.packet_count + 1]
    /// - Sized to hold one claim record per slot
    #[account(
        init,
        payer = creator,
        space = RedPacket::space_for(total_slots.min(MAX_SLOTS)),
        seeds = [
            PACKET_SEED.as_bytes(),
            registry.packet_count.wrapping_add(1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub red_packet: Account<'info, RedPacket>,

    /// Token vault account (PDA) that holds the deposit
    /// - Controlled by the packet PDA as token authority
    /// - Derived from: ["vault", red_packet]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = red_packet,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), red_packet.key().as_ref()],
        bump,
        payer = creator,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint of the deposit
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Creator's token account funding the packet
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = creator,
        token::token_program = token_program,
    )]
    pub creator_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The creator funding the packet
    #[account(mut)]
    pub creator: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a new red packet and deposits its funds
 *
 * @param ctx - The account context containing registry, packet, vault and creator accounts
 * @param total_amount - Deposit in the mint's smallest unit
 * @param total_slots - Number of claimants the deposit is split between
 * @param split_mode - Equal or random split
 *
 * @returns The id assigned to the packet
 */
pub fn handle_create_packet(
    ctx: Context<CreatePacket>,
    total_amount: u64,
    total_slots: u32,
    split_mode: SplitMode,
) -> Result<u64> {
    // ===== VALIDATION PHASE =====

    conservation::check_packet_params(total_amount, total_slots)?;

    // ===== EFFECTS PHASE =====

    let packet_id = ctx.accounts.registry.allocate_id()?;
    let created_at = Clock::get()?.unix_timestamp;
    let creator = ctx.accounts.creator.key();
    let token_mint = ctx.accounts.token_mint.key();

    ctx.accounts.red_packet.initialize(
        packet_id,
        ctx.bumps.red_packet,
        creator,
        token_mint,
        total_amount,
        total_slots,
        split_mode,
        created_at,
    );

    // ===== INTERACTIONS PHASE (Deposit) =====

    deposit_to_vault(
        ctx.accounts.creator.to_account_info(),
        ctx.accounts.creator_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        total_amount,
        ctx.accounts.token_mint.decimals,
    )?;

    // Fee-bearing mints would leave the vault short of the recorded total
    ctx.accounts.token_vault.reload()?;
    require_eq!(
        ctx.accounts.token_vault.amount,
        total_amount,
        RedPacketError::DepositMismatch
    );

    emit_cpi!(PacketCreated {
        packet: ctx.accounts.red_packet.key(),
        packet_id,
        creator,
        token_mint,
        total_amount,
        total_slots,
        split_mode,
        created_at,
    });

    msg!(
        "red packet {} created: {} over {} slots ({:?})",
        packet_id,
        total_amount,
        total_slots,
        split_mode
    );

    Ok(packet_id)
}
