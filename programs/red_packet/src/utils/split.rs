use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::state::SplitMode;
use super::conservation::grant_ceiling;

/**
 * Computes the amount granted to the next claim
 *
 * @param split_mode - Equal or random split of the packet
 * @param remaining_amount - Amount not yet granted
 * @param remaining_slots - Slots not yet claimed, including the one being granted
 * @param entropy - 32 bytes of claim entropy (only used by random packets)
 *
 * Rules:
 * - The final slot always takes everything that is left
 * - Equal: floor(remaining_amount / remaining_slots), the remainder rolls into later slots
 * - Random: uniform draw in [1, max_grant] where max_grant is twice the average share,
 *   clamped so every other open slot keeps at least one smallest unit
 */
pub fn compute_grant(
    split_mode: SplitMode,
    remaining_amount: u64,
    remaining_slots: u32,
    entropy: &[u8; 32],
) -> Result<u64> {
    require!(remaining_slots > 0, RedPacketError::PacketExhausted);

    if remaining_slots == 1 {
        return Ok(remaining_amount);
    }

    let average = remaining_amount / remaining_slots as u64;
    match split_mode {
        SplitMode::Equal => Ok(average),
        SplitMode::Random => {
            let max_grant = random_ceiling(average, remaining_amount, remaining_slots)?;
            Ok(draw(entropy, max_grant))
        }
    }
}

/// Upper bound of a random draw: twice the average, clamped to the reserve-aware ceiling
fn random_ceiling(average: u64, remaining_amount: u64, remaining_slots: u32) -> Result<u64> {
    let doubled = average
        .checked_mul(RANDOM_CEILING_MULTIPLIER)
        .ok_or(RedPacketError::ArithmeticOverflow)?;
    let ceiling = grant_ceiling(remaining_amount, remaining_slots)?;
    Ok(doubled.min(ceiling).max(1))
}

/// Maps the leading 8 entropy bytes into [1, max_grant]
fn draw(entropy: &[u8; 32], max_grant: u64) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&entropy[..8]);
    u64::from_le_bytes(word) % max_grant + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_stays_in_range() {
        let max_entropy = [0xff; 32];
        assert_eq!(draw(&max_entropy, 1), 1);
        assert!(draw(&max_entropy, 7) <= 7);
        assert_eq!(draw(&[0; 32], 7), 1);
    }

    #[test]
    fn test_random_ceiling_reserves_open_slots() {
        // 10 left over 9 slots: average 1, doubled 2, but 8 other slots need 8 units
        assert_eq!(random_ceiling(1, 10, 9).unwrap(), 2);
        // 9 left over 9 slots: only 1 unit may go to this slot
        assert_eq!(random_ceiling(1, 9, 9).unwrap(), 1);
        // 1000 left over 5 slots: twice the average
        assert_eq!(random_ceiling(200, 1000, 5).unwrap(), 400);
    }
}
