use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub struct ProjectRegisteredEvent {
    pub project_id: u64,
    pub registrar: Address,
    pub registered_at: u64,
}
