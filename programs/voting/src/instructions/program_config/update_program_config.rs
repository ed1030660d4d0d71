use anchor_lang::prelude::*;

use crate::ProgramConfig;

#[derive(Accounts)]
pub struct UpdateProgramConfig<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        has_one = authority
    )]
    pub program_config: Box<Account<'info, ProgramConfig>>,
}

pub fn handler(
    ctx: Context<UpdateProgramConfig>,
    new_authority: Option<Pubkey>,
    close_admin: Option<Pubkey>,
) -> Result<()> {
    let program_config = &mut ctx.accounts.program_config;
    if let Some(new_authority) = new_authority {
        program_config.authority = new_authority;
    }
    if let Some(close_admin) = close_admin {
        program_config.close_admin = close_admin;
    }

    Ok(())
}
