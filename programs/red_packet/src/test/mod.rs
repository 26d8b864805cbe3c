pub mod test_conservation;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use crate::error::RedPacketError;
use crate::utils::LedgerContext;

/// Ledger context for the `seed`-th request, with a distinct recent hash per seed
pub fn ledger_ctx(seed: u64) -> LedgerContext {
    LedgerContext {
        slot: 250_000_000 + seed,
        unix_timestamp: 1_735_689_600 + seed as i64,
        recent_hash: hashv(&[b"slot-hash", &seed.to_le_bytes()]).to_bytes(),
    }
}

pub fn error_code(err: &Error) -> Option<u32> {
    match err {
        Error::AnchorError(anchor_error) => Some(anchor_error.error_code_number),
        Error::ProgramError(_) => None,
    }
}

/// Asserts that `result` failed with exactly `expected`
pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: RedPacketError) {
    let err = result.expect_err("expected the call to fail");
    assert_eq!(
        error_code(&err),
        Some(u32::from(expected)),
        "expected {:?}, got {:?}",
        expected,
        err
    );
}
