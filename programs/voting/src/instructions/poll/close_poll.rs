use anchor_lang::prelude::*;

use crate::{error::VotingError, events::PollClosed, Poll, ProgramConfig};

#[derive(Accounts)]
pub struct ClosePoll<'info> {
    /// Receives the reclaimed rent.
    #[account(mut)]
    pub signer: Signer<'info>,
    #[account(mut, close = signer)]
    pub poll: Box<Account<'info, Poll>>,
    pub program_config: Box<Account<'info, ProgramConfig>>,
}

pub fn handler(ctx: Context<ClosePoll>) -> Result<()> {
    let poll = &ctx.accounts.poll;
    let signer = ctx.accounts.signer.key();
    let current_time = Clock::get()?.unix_timestamp;

    require!(poll.has_ended(current_time), VotingError::PollAlreadyStarted);

    let is_closer =
        signer == poll.creator || signer == ctx.accounts.program_config.close_admin;
    require!(is_closer, VotingError::Unauthorized);

    // Voter records stay behind as proof of participation.

    emit!(PollClosed {
        poll_id: poll.poll_id,
        closed_by: signer,
    });

    Ok(())
}
