use anchor_lang::prelude::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{conservation, settle_claim, LedgerContext};
use super::claim_ledger::ClaimSet;
use super::query::PacketQuery;

/// Events journaled by the in-memory registry, mirroring the program's emitted events
#[derive(Clone, Debug, PartialEq)]
pub enum RegistryEvent {
    Created(PacketCreated),
    Claimed(PacketClaimed),
    Settled(PacketSettled),
}

/**
 * In-memory packet registry
 *
 * Hosts the same create/claim state transitions as the on-chain program for
 * environments without a transaction-serializing ledger, and for tests.
 *
 * Storage:
 * - Packets live in an arena indexed by `id - 1`; ids start at 1 and are never reused
 * - The claim ledger is a set keyed by (packet id, claimer)
 *
 * Every mutating method takes `&mut self` and either fully applies or leaves the
 * registry untouched; a concurrent host serializes calls around it.
 */
#[derive(Clone, Debug, Default)]
pub struct PacketRegistry {
    /// Mint every packet in this registry is denominated in
    token_mint: Pubkey,
    state: RegistryState,
    packets: Vec<RedPacket>,
    /// PDA of each packet, parallel to `packets`
    addresses: Vec<Pubkey>,
    ledger: ClaimSet,
    journal: Vec<RegistryEvent>,
}

impl PacketRegistry {
    pub fn new(token_mint: Pubkey) -> Self {
        Self {
            token_mint,
            ..Self::default()
        }
    }

    pub fn token_mint(&self) -> Pubkey {
        self.token_mint
    }

    /**
     * Creates a packet funded by `creator`
     *
     * @returns The assigned packet id, visible to queries as soon as this returns
     */
    pub fn create_packet(
        &mut self,
        creator: Pubkey,
        total_amount: u64,
        total_slots: u32,
        split_mode: SplitMode,
        ctx: &LedgerContext,
    ) -> Result<u64> {
        conservation::check_packet_params(total_amount, total_slots)?;

        let packet_id = self.state.next_id()?;
        let (address, bump) = RedPacket::find_address(packet_id);

        let mut packet = RedPacket::default();
        packet.initialize(
            packet_id,
            bump,
            creator,
            self.token_mint,
            total_amount,
            total_slots,
            split_mode,
            ctx.unix_timestamp,
        );

        self.state.allocate_id()?;
        self.packets.push(packet);
        self.addresses.push(address);
        self.journal.push(RegistryEvent::Created(PacketCreated {
            packet: address,
            packet_id,
            creator,
            token_mint: self.token_mint,
            total_amount,
            total_slots,
            split_mode,
            created_at: ctx.unix_timestamp,
        }));

        Ok(packet_id)
    }

    /**
     * Claims one slot of `packet_id` for `claimer`
     *
     * @returns The granted amount
     *
     * Fails with PacketNotFound, PacketExhausted or AlreadyClaimed, checked in that
     * order. A failed claim changes nothing.
     */
    pub fn claim(&mut self, packet_id: u64, claimer: Pubkey, ctx: &LedgerContext) -> Result<u64> {
        let index = self
            .index_of(packet_id)
            .ok_or(RedPacketError::PacketNotFound)?;

        let packet = &mut self.packets[index];
        let receipt = settle_claim(packet, &mut self.ledger, claimer, ctx)?;

        let address = self.addresses[index];
        self.journal.push(RegistryEvent::Claimed(PacketClaimed {
            packet: address,
            packet_id,
            claimer,
            amount: receipt.amount,
            remaining_amount: receipt.remaining_amount,
            remaining_slots: receipt.remaining_slots,
            timestamp: receipt.timestamp,
        }));
        if receipt.settled_packet() {
            self.journal.push(RegistryEvent::Settled(PacketSettled {
                packet: address,
                packet_id,
                total_amount: packet.total_amount,
                // One claim per slot, so a settled packet holds exactly total_slots claims
                claim_count: packet.total_slots,
            }));
        }

        Ok(receipt.amount)
    }

    /// Read-only view over committed state
    pub fn query(&self) -> PacketQuery<'_> {
        PacketQuery::new(self)
    }

    /// Journal of every committed creation and claim, oldest first
    pub fn events(&self) -> &[RegistryEvent] {
        &self.journal
    }

    pub(crate) fn packets(&self) -> &[RedPacket] {
        &self.packets
    }

    pub(crate) fn packet(&self, packet_id: u64) -> Option<&RedPacket> {
        self.index_of(packet_id).map(|index| &self.packets[index])
    }

    pub(crate) fn ledger(&self) -> &ClaimSet {
        &self.ledger
    }

    fn index_of(&self, packet_id: u64) -> Option<usize> {
        let index = usize::try_from(packet_id.checked_sub(1)?).ok()?;
        (index < self.packets.len()).then_some(index)
    }
}
