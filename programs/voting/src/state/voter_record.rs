use anchor_lang::prelude::*;

/// Marker account proving that a given identity has voted in a given poll.
/// Its PDA is derived from (poll_id, voter), so at most one record can exist
/// per pair. Never mutated or closed after creation.
#[account]
#[derive(InitSpace, Debug)]
pub struct VoterRecord {
    /// The poll this record belongs to.
    pub poll_id: u64,
    /// Set on the voter's first successful vote, never reset.
    pub has_voted: bool,
}

impl VoterRecord {
    pub fn pda(poll_id: u64, voter: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[b"voter", &poll_id.to_le_bytes(), voter.as_ref()],
            &crate::ID,
        )
    }
}
