use anchor_lang::prelude::*;

#[error_code]
pub enum VotingError {
    #[msg("Voter has already voted on this poll")]
    AlreadyVoted,
    #[msg("Signer is not allowed to close this poll")]
    Unauthorized,
    #[msg("Invalid poll time settings")]
    InvalidPollTime,
    #[msg("Poll ID does not match the poll account")]
    PollMismatch,
    #[msg("Voting is not active for this poll")]
    VotingNotActive,
    #[msg("Poll has not started yet")]
    PollNotStarted,
    #[msg("Poll has already ended")]
    PollEnded,
    #[msg("Poll has already started and cannot be closed until it ends")]
    PollAlreadyStarted,
}
