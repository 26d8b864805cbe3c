use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/// Validates a creation request
///
/// Every slot must be able to receive at least one smallest unit, so the deposit
/// has to cover the slot count.
pub fn check_packet_params(total_amount: u64, total_slots: u32) -> Result<()> {
    require!(total_amount >= 1, RedPacketError::InvalidParameters);
    require!(total_slots >= 1, RedPacketError::InvalidParameters);
    require!(total_slots <= MAX_SLOTS, RedPacketError::InvalidParameters);
    require!(total_amount >= total_slots as u64, RedPacketError::InvalidParameters);
    Ok(())
}

/// Largest grant the next claim may receive while still reserving one
/// smallest unit for each of the other open slots
pub fn grant_ceiling(remaining_amount: u64, remaining_slots: u32) -> Result<u64> {
    require!(remaining_slots > 0, RedPacketError::GrantOutOfBounds);
    let reserved = (remaining_slots - 1) as u64;
    remaining_amount
        .checked_sub(reserved)
        .ok_or_else(|| error!(RedPacketError::ConservationViolated))
}

/// Postcondition on every computed grant: `1 <= grant <= grant_ceiling`
///
/// A violation is an internal failure and is reported, never clamped.
pub fn check_grant(grant: u64, remaining_amount: u64, remaining_slots: u32) -> Result<()> {
    let ceiling = grant_ceiling(remaining_amount, remaining_slots)?;
    if grant == 0 || grant > ceiling {
        msg!(
            "grant {} outside [1, {}] (remaining amount {}, remaining slots {})",
            grant,
            ceiling,
            remaining_amount,
            remaining_slots
        );
        return err!(RedPacketError::GrantOutOfBounds);
    }
    Ok(())
}

/// Subtracts `amount` from `balance`, failing instead of wrapping
pub fn debit(balance: u64, amount: u64) -> Result<u64> {
    balance
        .checked_sub(amount)
        .ok_or_else(|| error!(RedPacketError::ArithmeticOverflow))
}

/// Amount and slots must run out together, and the amount may never drop
/// below the number of open slots
pub fn check_co_exhaustion(remaining_amount: u64, remaining_slots: u32) -> Result<()> {
    require!(
        (remaining_slots == 0) == (remaining_amount == 0),
        RedPacketError::ConservationViolated
    );
    require!(
        remaining_amount >= remaining_slots as u64,
        RedPacketError::ConservationViolated
    );
    Ok(())
}

/// Exhausted packets must have granted exactly their deposit
pub fn check_settled(total_amount: u64, granted_total: u64) -> Result<()> {
    require_eq!(granted_total, total_amount, RedPacketError::ConservationViolated);
    Ok(())
}
