use anchor_lang::prelude::*;
use crate::error::*;

/// Reads a program-owned account taken as an unchecked PDA
///
/// An account with no data was never created and reads as `None`. Any other
/// account must be owned by this program and carry `T`'s discriminator.
pub fn load_program_account<T: AccountDeserialize>(info: &AccountInfo) -> Result<Option<T>> {
    if info.data_len() == 0 {
        return Ok(None);
    }
    // Explicitly verify the account is owned by this program
    require!(
        info.owner == &crate::ID,
        RedPacketError::AccountNotOwnedByProgram
    );

    let data = info.try_borrow_data()?;
    let account = T::try_deserialize(&mut data.as_ref())?;
    Ok(Some(account))
}

/// Writes an account back into its raw PDA account
pub fn store_program_account<T: AccountSerialize>(account: &T, info: &AccountInfo) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    account.try_serialize(&mut writer)
}
