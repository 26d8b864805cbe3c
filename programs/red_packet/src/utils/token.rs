use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

/// Moves a creator's deposit into the packet vault (creator signs the transaction)
pub fn deposit_to_vault<'a>(
    creator: AccountInfo<'a>,
    creator_token_account: AccountInfo<'a>,
    token_vault: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
) -> Result<()> {
    let accounts = TransferChecked {
        from: creator_token_account,
        mint,
        to: token_vault,
        authority: creator,
    };

    transfer_checked(CpiContext::new(token_program, accounts), amount, decimals)
}

/// Pays a grant out of the packet vault, signed by the packet PDA
///
/// Works with both SPL Token and Token 2022 through `transfer_checked`.
#[allow(clippy::too_many_arguments)]
pub fn pay_from_vault<'a>(
    packet: AccountInfo<'a>,
    token_vault: AccountInfo<'a>,
    claimer_token_account: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    packet_signer: &[&[&[u8]]],
) -> Result<()> {
    let accounts = TransferChecked {
        from: token_vault,
        mint,
        to: claimer_token_account,
        authority: packet,
    };

    transfer_checked(
        CpiContext::new_with_signer(token_program, accounts, packet_signer),
        amount,
        decimals,
    )
}
