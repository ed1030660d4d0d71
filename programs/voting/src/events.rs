use anchor_lang::prelude::*;

#[event]
pub struct PollCreated {
    pub poll_id: u64,
    pub creator: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
}

#[event]
pub struct VoteCast {
    pub poll_id: u64,
    pub voter: Pubkey,
    pub vote_type: bool,
    pub yes_votes: u32,
    pub no_votes: u32,
}

#[event]
pub struct PollClosed {
    pub poll_id: u64,
    pub closed_by: Pubkey,
}
