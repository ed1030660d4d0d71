use anchor_lang::prelude::*;

use crate::{error::VotingError, events::PollCreated, Poll};

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct CreatePoll<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,
    #[account(
        init,
        seeds = [
            b"poll".as_ref(),
            &poll_id.to_le_bytes()
        ],
        bump,
        payer = creator,
        space = 8 + Poll::INIT_SPACE
    )]
    pub poll: Box<Account<'info, Poll>>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreatePoll>,
    poll_id: u64,
    title: String,
    description: String,
    start_time: i64,
    end_time: i64,
) -> Result<()> {
    require!(start_time < end_time, VotingError::InvalidPollTime);

    // The whole window must still be in the future at creation.
    let current_time = Clock::get()?.unix_timestamp;
    require!(current_time < start_time, VotingError::InvalidPollTime);

    let poll = &mut ctx.accounts.poll;
    poll.poll_id = poll_id;
    poll.creator = ctx.accounts.creator.key();
    poll.title = title;
    poll.description = description;
    poll.yes_votes = 0;
    poll.no_votes = 0;
    poll.created_at = current_time;
    poll.start_time = start_time;
    poll.end_time = end_time;

    emit!(PollCreated {
        poll_id,
        creator: poll.creator,
        start_time,
        end_time,
    });

    Ok(())
}
