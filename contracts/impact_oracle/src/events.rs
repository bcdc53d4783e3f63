use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Debug)]
pub struct AttestationEvent {
    pub project_id: u64,
    pub verified: bool,
}
