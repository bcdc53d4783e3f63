use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,
    /// Caller is not admin or not an operator
    Unauthorized = 10,
    /// Amount must be positive
    InvalidAmount = 30,
    /// Not enough balance
    InsufficientBalance = 31,
}
