use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Debug)]
pub struct ProgramConfig {
    /// Authority allowed to update the config.
    pub authority: Pubkey,
    /// Additional identity allowed to close ended polls.
    /// `Pubkey::default()` means no admin is designated.
    pub close_admin: Pubkey,
}

impl ProgramConfig {
    pub fn pda() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[b"config"], &crate::ID)
    }
}
