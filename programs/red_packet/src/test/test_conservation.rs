#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;
    use crate::constants::MAX_SLOTS;
    use crate::engine::ClaimSet;
    use crate::error::RedPacketError;
    use crate::state::{RedPacket, SplitMode};
    use crate::test::{assert_error, ledger_ctx};
    use crate::utils::conservation::*;
    use crate::utils::{settle_claim, ClaimLedger};

    fn packet(total_amount: u64, total_slots: u32, split_mode: SplitMode) -> RedPacket {
        let mut packet = RedPacket::default();
        packet.initialize(1, 255, Pubkey::new_unique(), Pubkey::new_unique(), total_amount, total_slots, split_mode, 0);
        packet
    }

    #[test]
    fn test_packet_params() {
        assert!(check_packet_params(1, 1).is_ok());
        assert!(check_packet_params(100, 4).is_ok());
        assert!(check_packet_params(MAX_SLOTS as u64, MAX_SLOTS).is_ok());

        assert_error(check_packet_params(0, 1), RedPacketError::InvalidParameters);
        assert_error(check_packet_params(10, 0), RedPacketError::InvalidParameters);
        assert_error(check_packet_params(4, 5), RedPacketError::InvalidParameters);
        assert_error(
            check_packet_params(u64::MAX, MAX_SLOTS + 1),
            RedPacketError::InvalidParameters,
        );
    }

    #[test]
    fn test_grant_bounds() {
        // 10 left over 3 slots: two units stay reserved
        assert!(check_grant(1, 10, 3).is_ok());
        assert!(check_grant(8, 10, 3).is_ok());
        assert_error(check_grant(9, 10, 3), RedPacketError::GrantOutOfBounds);
        assert_error(check_grant(0, 10, 3), RedPacketError::GrantOutOfBounds);

        // Final slot must take exactly what is left
        assert!(check_grant(10, 10, 1).is_ok());
        assert_error(check_grant(11, 10, 1), RedPacketError::GrantOutOfBounds);

        assert_error(check_grant(1, 10, 0), RedPacketError::GrantOutOfBounds);
    }

    #[test]
    fn test_co_exhaustion() {
        assert!(check_co_exhaustion(0, 0).is_ok());
        assert!(check_co_exhaustion(5, 5).is_ok());
        assert!(check_co_exhaustion(9, 2).is_ok());

        assert_error(check_co_exhaustion(3, 0), RedPacketError::ConservationViolated);
        assert_error(check_co_exhaustion(0, 2), RedPacketError::ConservationViolated);
        assert_error(check_co_exhaustion(1, 2), RedPacketError::ConservationViolated);
    }

    #[test]
    fn test_settled_and_debit() {
        assert!(check_settled(1_000, 1_000).is_ok());
        assert_error(check_settled(1_000, 999), RedPacketError::ConservationViolated);

        assert_eq!(debit(10, 4).unwrap(), 6);
        assert_error(debit(3, 4), RedPacketError::ArithmeticOverflow);
    }

    #[test]
    fn test_corrupted_packet_is_rejected_without_side_effects() {
        // Fewer units than open slots: no valid grant exists
        let mut corrupted = packet(10, 3, SplitMode::Equal);
        corrupted.remaining_amount = 2;
        let before = corrupted.clone();
        let mut ledger = ClaimSet::new();
        let claimer = Pubkey::new_unique();

        let result = settle_claim(&mut corrupted, &mut ledger, claimer, &ledger_ctx(1));

        assert!(result.is_err(), "corrupted packet must not settle a claim");
        assert_eq!(corrupted, before);
        assert!(ledger.is_empty());
        assert!(!ledger.has_claimed(1, &claimer));
    }

    #[test]
    fn test_settlement_rejects_missing_history() {
        // Final slot whose earlier grants were lost: totals no longer add up
        let mut packet = packet(10, 2, SplitMode::Equal);
        packet.remaining_slots = 1;
        packet.remaining_amount = 5;
        let before = packet.clone();
        let mut ledger = ClaimSet::new();

        assert_error(
            settle_claim(&mut packet, &mut ledger, Pubkey::new_unique(), &ledger_ctx(2)),
            RedPacketError::ConservationViolated,
        );
        assert_eq!(packet, before);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_settle_claim_applies_all_fields_together() {
        let mut packet = packet(100, 4, SplitMode::Equal);
        let mut ledger = ClaimSet::new();
        let claimer = Pubkey::new_unique();
        let ctx = ledger_ctx(3);

        let receipt = settle_claim(&mut packet, &mut ledger, claimer, &ctx).unwrap();

        assert_eq!(receipt.amount, 25);
        assert_eq!(packet.remaining_amount, 75);
        assert_eq!(packet.remaining_slots, 3);
        assert_eq!(packet.claims.len(), 1);
        assert_eq!(packet.claims[0].claimer, claimer);
        assert_eq!(packet.claims[0].timestamp, ctx.unix_timestamp);
        assert!(ledger.has_claimed(packet.id, &claimer));
        assert!(!receipt.settled_packet());
    }
}
