use anchor_lang::prelude::*;

use crate::{error::VotingError, events::VoteCast, Poll, VoterRecord};

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct Vote<'info> {
    #[account(
        mut,
        seeds = [
            b"poll".as_ref(),
            &poll_id.to_le_bytes()
        ],
        bump
    )]
    pub poll: Box<Account<'info, Poll>>,
    // A repeat vote finds the record already initialized with
    // has_voted = true and is rejected in the handler.
    #[account(
        init_if_needed,
        seeds = [
            b"voter".as_ref(),
            &poll_id.to_le_bytes(),
            voter_signer.key().as_ref()
        ],
        bump,
        payer = voter_signer,
        space = 8 + VoterRecord::INIT_SPACE
    )]
    pub voter_record: Box<Account<'info, VoterRecord>>,
    #[account(mut)]
    pub voter_signer: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Vote>, poll_id: u64, vote_type: bool) -> Result<()> {
    let poll = &mut ctx.accounts.poll;
    let voter_record = &mut ctx.accounts.voter_record;
    let current_time = Clock::get()?.unix_timestamp;

    require_eq!(poll.poll_id, poll_id, VotingError::PollMismatch);
    require!(poll.has_started(current_time), VotingError::PollNotStarted);
    require!(!poll.has_ended(current_time), VotingError::PollEnded);
    require!(!voter_record.has_voted, VotingError::AlreadyVoted);

    voter_record.poll_id = poll_id;
    voter_record.has_voted = true;

    if vote_type {
        poll.yes_votes = poll.yes_votes.checked_add(1).unwrap();
    } else {
        poll.no_votes = poll.no_votes.checked_add(1).unwrap();
    }

    emit!(VoteCast {
        poll_id,
        voter: ctx.accounts.voter_signer.key(),
        vote_type,
        yes_votes: poll.yes_votes,
        no_votes: poll.no_votes,
    });

    Ok(())
}
