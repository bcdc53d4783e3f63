use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Admin,
    Operators(Address), // operator address → allowed flag
    Balance(Address),   // holder address → balance
}
