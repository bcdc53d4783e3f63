use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,
    /// Caller is not admin
    Unauthorized = 10,
    /// Project id must be positive
    InvalidProjectId = 20,
    /// Project already registered
    AlreadyRegistered = 21,
}
