use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines the constant values used throughout the red packet program.
 * These constants control PDA derivation, packet sizing and the split heuristics.
 */

#[constant]
/// ===== SIZING CONSTANTS =====

/// Maximum number of claim slots a single packet may offer
/// - Every committed claim is stored inside the packet account
/// - Bounded so the packet account stays below the 10 KiB CPI allocation limit
pub const MAX_SLOTS: u32 = 200;

/// Upper bound multiplier for lucky-draw (random) grants
/// - A random grant never exceeds this multiple of the current average share
pub const RANDOM_CEILING_MULTIPLIER: u64 = 2;

/// Maximum number of packets returned by one listing page
pub const MAX_PAGE_SIZE: u32 = 50;

/// Maximum number of claim records returned by one `get_claims` view
/// - 4-byte vec prefix + 16 * 48-byte records stays under the 1024-byte return data cap
pub const MAX_CLAIMS_PER_VIEW: u32 = 16;

/// Maximum number of packets returned by one on-chain `get_packets` view
/// - 4-byte vec prefix + 9 * 106-byte packet views stays under the 1024-byte return data cap
pub const MAX_PACKETS_PER_VIEW: u32 = 9;

/// ===== PDA SEED CONSTANTS =====

/// Seed for the global registry PDA
/// - Used in: ["registry"]
/// - Holds the packet counter used for monotonic id assignment
pub const REGISTRY_SEED: &str = "registry";

/// Seed for red packet PDA derivation
/// - Used in: ["red_packet", packet_id]
/// - packet_id is encoded little-endian, ids start at 1 and are never reused
pub const PACKET_SEED: &str = "red_packet";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", packet_key]
/// - The vault is owned by the packet PDA, which signs every payout
pub const VAULT_SEED: &str = "vault";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", packet_key, claimer_key]
/// - One account per (packet, claimer) pair, never closed
pub const CLAIM_SEED: &str = "claim";
