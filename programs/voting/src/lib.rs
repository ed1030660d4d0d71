#![allow(ambiguous_glob_reexports)]
#![allow(unexpected_cfgs)] // See: https://solana.stackexchange.com/a/19845

pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use instructions::*;
pub use state::*;

declare_id!("4UYdhtfeuc83XnvQ7fWhvdMDqzCBuCQKm2FpwMNpMU5H");

#[program]
pub mod voting {
    use super::*;

    pub fn init_program_config(ctx: Context<InitProgramConfig>) -> Result<()> {
        init_program_config::handler(ctx)
    }

    pub fn update_program_config(
        ctx: Context<UpdateProgramConfig>,
        new_authority: Option<Pubkey>,
        close_admin: Option<Pubkey>,
    ) -> Result<()> {
        update_program_config::handler(ctx, new_authority, close_admin)
    }

    pub fn create_poll(
        ctx: Context<CreatePoll>,
        poll_id: u64,
        title: String,
        description: String,
        start_time: i64,
        end_time: i64,
    ) -> Result<()> {
        create_poll::handler(ctx, poll_id, title, description, start_time, end_time)
    }

    pub fn vote(ctx: Context<Vote>, poll_id: u64, vote_type: bool) -> Result<()> {
        cast_vote::handler(ctx, poll_id, vote_type)
    }

    pub fn close_poll(ctx: Context<ClosePoll>) -> Result<()> {
        close_poll::handler(ctx)
    }
}
