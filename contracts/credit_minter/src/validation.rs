use soroban_sdk::Vec;

use crate::error::Error;

pub const MAX_BATCH_SIZE: u32 = 50;
pub const MIN_VERIF_LEVEL: u32 = 1;
pub const MAX_VERIF_LEVEL: u32 = 5;

/// Per-item field checks, shared by single and batch mints.
/// Evaluated in the fixed order: amount, eco impact, verification level.
pub fn check_item(
    amount: i128,
    eco_impact: i128,
    verif_level: u32,
    min_mint_amount: i128,
) -> Result<(), Error> {
    if amount < min_mint_amount || amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    if eco_impact <= 0 {
        return Err(Error::InvalidEcoImpact);
    }
    if verif_level < MIN_VERIF_LEVEL || verif_level > MAX_VERIF_LEVEL {
        return Err(Error::InvalidVerifLevel);
    }
    Ok(())
}

/// Batch must hold between 1 and 50 items.
pub fn check_batch_size(size: u32) -> Result<(), Error> {
    if size == 0 || size > MAX_BATCH_SIZE {
        return Err(Error::InvalidBatchSize);
    }
    Ok(())
}

/// Per-project cap: current + amount must stay within max.
/// Overflow counts as exceeding the cap.
pub fn check_project_cap(current: i128, amount: i128, max: i128) -> Result<(), Error> {
    match current.checked_add(amount) {
        Some(next) if next <= max => Ok(()),
        _ => Err(Error::ExceedsMaxMint),
    }
}

/// Global cap: total + amount must stay within max.
pub fn check_global_cap(total: i128, amount: i128, max: i128) -> Result<(), Error> {
    match total.checked_add(amount) {
        Some(next) if next <= max => Ok(()),
        _ => Err(Error::MaxMintsExceeded),
    }
}

/// Checked sum of a batch's amounts. `None` on overflow.
pub fn batch_total(amounts: &Vec<i128>) -> Option<i128> {
    let mut total: i128 = 0;
    for amount in amounts.iter() {
        total = total.checked_add(amount)?;
    }
    Some(total)
}
