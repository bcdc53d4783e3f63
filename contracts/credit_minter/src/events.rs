use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub struct CreditsMintedEvent {
    pub project_id: u64,
    pub minter: Address,
    pub amount: i128,
    pub eco_impact: i128,
    pub verif_level: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct BatchMintedEvent {
    pub project_id: u64,
    pub minter: Address,
    pub total_amount: i128,
    pub count: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ProjectStatusEvent {
    pub project_id: u64,
    pub active: bool,
}
