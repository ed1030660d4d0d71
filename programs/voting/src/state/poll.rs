use anchor_lang::prelude::*;

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 500;

#[account]
#[derive(InitSpace, Debug)]
pub struct Poll {
    /// Caller-supplied ID, part of the PDA seeds.
    pub poll_id: u64,
    /// Account that created the poll. Only party allowed to close it
    /// besides the configured close admin.
    pub creator: Pubkey,
    #[max_len(MAX_TITLE_LEN)]
    pub title: String,
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,
    /// Running tallies, only ever incremented.
    pub yes_votes: u32,
    pub no_votes: u32,
    /// Timestamp of creation.
    pub created_at: i64,
    /// Votes are accepted within [start_time, end_time).
    pub start_time: i64,
    pub end_time: i64,
}

impl Poll {
    pub fn pda(poll_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[b"poll", &poll_id.to_le_bytes()], &crate::ID)
    }

    pub fn has_started(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.start_time
    }

    pub fn has_ended(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.end_time
    }
}
