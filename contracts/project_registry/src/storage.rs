use soroban_sdk::{contracttype, Address};

/// Registration record for a project.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectRecord {
    pub registrar: Address,
    pub registered_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Admin,
    Project(u64), // project id → ProjectRecord
}
