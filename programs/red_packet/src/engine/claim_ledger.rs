use std::collections::BTreeSet;
use anchor_lang::prelude::*;
use crate::error::*;
use crate::utils::ClaimLedger;

/// In-memory claim ledger: the set of (packet id, claimer) pairs that hold a claim
///
/// Entries are only ever inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimSet {
    entries: BTreeSet<(u64, Pubkey)>,
}

impl ClaimSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ClaimLedger for ClaimSet {
    fn has_claimed(&self, packet_id: u64, claimer: &Pubkey) -> bool {
        self.entries.contains(&(packet_id, *claimer))
    }

    fn record_claim(&mut self, packet_id: u64, claimer: &Pubkey) -> Result<()> {
        require!(
            self.entries.insert((packet_id, *claimer)),
            RedPacketError::DuplicateClaim
        );
        Ok(())
    }
}
