use anchor_lang::prelude::*;

#[error_code]
pub enum RedPacketError {
    // Request validation errors
    #[msg("Invalid packet parameters")]
    InvalidParameters,
    #[msg("Red packet does not exist")]
    PacketNotFound,
    #[msg("Red packet has no remaining slots")]
    PacketExhausted,
    #[msg("Claimer has already claimed this red packet")]
    AlreadyClaimed,

    // Internal invariant errors
    #[msg("Claim ledger entry recorded twice")]
    DuplicateClaim,
    #[msg("Granted amount outside of the allowed bounds")]
    GrantOutOfBounds,
    #[msg("Claimed amounts do not add up to the packet total")]
    ConservationViolated,

    // Asset errors
    #[msg("Vault balance does not match the deposited amount")]
    DepositMismatch,
    #[msg("Token mint does not match the packet's token mint")]
    TokenMintMismatch,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Account must be owned by this program")]
    AccountNotOwnedByProgram,
    #[msg("Slot hashes sysvar data is malformed")]
    InvalidSlotHashes,
    #[msg("Packet account does not match the packet PDA for its id")]
    PacketAddressMismatch,
    #[msg("Not enough packet accounts supplied for the requested page")]
    MissingPacketAccounts,
    #[msg("Claims must be submitted as top-level instructions")]
    CpiClaimNotAllowed,
}
