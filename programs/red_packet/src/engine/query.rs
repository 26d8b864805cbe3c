use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;
use crate::utils::{page, ClaimLedger};
use super::registry::PacketRegistry;

/// Read-only projections over a registry's committed packets and claims
///
/// Holding a shared borrow guarantees no mutation is in flight while reading.
#[derive(Clone, Copy)]
pub struct PacketQuery<'a> {
    registry: &'a PacketRegistry,
}

impl<'a> PacketQuery<'a> {
    pub fn new(registry: &'a PacketRegistry) -> Self {
        Self { registry }
    }

    /// The packet with `packet_id`, or `None` if it was never created
    pub fn get_packet(&self, packet_id: u64) -> Option<&'a RedPacket> {
        self.registry.packet(packet_id)
    }

    /// Same projection the program's `get_packet` view returns
    pub fn get_packet_view(&self, packet_id: u64) -> PacketView {
        self.get_packet(packet_id)
            .map(PacketView::from)
            .unwrap_or_default()
    }

    /// Every packet in creation order
    pub fn get_all_packets(&self) -> &'a [RedPacket] {
        self.registry.packets()
    }

    /// A page of packets in creation order, at most MAX_PAGE_SIZE long
    pub fn get_packets_page(&self, offset: u32, limit: u32) -> &'a [RedPacket] {
        page(self.registry.packets(), offset, limit, MAX_PAGE_SIZE)
    }

    /// Claims of a packet in commit order; empty for an unknown packet
    pub fn get_claims(&self, packet_id: u64) -> &'a [ClaimRecord] {
        self.get_packet(packet_id)
            .map(|packet| packet.claims.as_slice())
            .unwrap_or_default()
    }

    pub fn has_claimed(&self, packet_id: u64, claimer: &Pubkey) -> bool {
        self.registry.ledger().has_claimed(packet_id, claimer)
    }

    pub fn packet_count(&self) -> usize {
        self.registry.packets().len()
    }
}
