use soroban_sdk::{contracttype, Address, Env, Vec};

// Defaults applied at initialization. The global cap has no setter and
// stays at whatever value initialization stored.
pub const DEFAULT_MINT_FEE: i128 = 500;
pub const DEFAULT_MIN_MINT_AMOUNT: i128 = 100;
pub const DEFAULT_MAX_MINT_PER_PROJECT: i128 = 1_000_000;
pub const DEFAULT_MAX_GLOBAL_MINT: i128 = 100_000_000;

/// Latest single-mint snapshot for a project. Overwritten on every
/// successful single mint; batch mints never touch it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintedCredit {
    pub amount: i128,
    pub timestamp: u64,
    pub eco_impact: i128,
    pub verif_level: u32,
}

/// One history entry per batch item. `batch_id` is the item's index
/// within its batch call and repeats across calls.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintHistoryEntry {
    pub batch_id: u32,
    pub amount: i128,
    pub timestamp: u64,
}

/// Summary of the most recent batch call for a project. Overwritten,
/// not accumulated.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchMintRecord {
    pub total_amount: i128,
    pub count: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Admin,
    Paused,
    MintFee,
    MinMintAmount,
    MaxMintPerProject,
    MaxGlobalMint,
    TotalMinted,
    LastMintTimestamp,
    Registry,
    Oracle,
    Token,
    FeeToken,
    ProjectStatus(u64), // project id → active flag
    ProjectTotal(u64),  // project id → cumulative minted
    Credit(u64),        // project id → latest MintedCredit
    History(u64),       // project id → batch mint history
    BatchRecord(u64),   // project id → latest BatchMintRecord
}

// ── Config ───────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn get_mint_fee(env: &Env) -> Option<i128> {
    env.storage().instance().get(&DataKey::MintFee)
}

pub fn set_mint_fee(env: &Env, fee: i128) {
    env.storage().instance().set(&DataKey::MintFee, &fee);
}

pub fn get_min_mint_amount(env: &Env) -> Option<i128> {
    env.storage().instance().get(&DataKey::MinMintAmount)
}

pub fn set_min_mint_amount(env: &Env, min: i128) {
    env.storage().instance().set(&DataKey::MinMintAmount, &min);
}

pub fn get_max_mint_per_project(env: &Env) -> Option<i128> {
    env.storage().instance().get(&DataKey::MaxMintPerProject)
}

pub fn set_max_mint_per_project(env: &Env, max: i128) {
    env.storage().instance().set(&DataKey::MaxMintPerProject, &max);
}

pub fn get_max_global_mint(env: &Env) -> Option<i128> {
    env.storage().instance().get(&DataKey::MaxGlobalMint)
}

pub fn set_max_global_mint(env: &Env, max: i128) {
    env.storage().instance().set(&DataKey::MaxGlobalMint, &max);
}

pub fn get_address(env: &Env, key: DataKey) -> Option<Address> {
    env.storage().instance().get(&key)
}

pub fn set_address(env: &Env, key: DataKey, addr: &Address) {
    env.storage().instance().set(&key, addr);
}

// ── Ledger ───────────────────────────────────────────────────────────

pub fn get_total_minted(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalMinted)
        .unwrap_or(0)
}

pub fn set_total_minted(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalMinted, &total);
}

pub fn get_last_mint_timestamp(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::LastMintTimestamp)
        .unwrap_or(0)
}

pub fn set_last_mint_timestamp(env: &Env, ts: u64) {
    env.storage().instance().set(&DataKey::LastMintTimestamp, &ts);
}

pub fn get_project_status(env: &Env, project_id: u64) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::ProjectStatus(project_id))
        .unwrap_or(false)
}

pub fn set_project_status(env: &Env, project_id: u64, active: bool) {
    env.storage()
        .instance()
        .set(&DataKey::ProjectStatus(project_id), &active);
}

pub fn get_project_total(env: &Env, project_id: u64) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::ProjectTotal(project_id))
        .unwrap_or(0)
}

pub fn set_project_total(env: &Env, project_id: u64, total: i128) {
    env.storage()
        .instance()
        .set(&DataKey::ProjectTotal(project_id), &total);
}

pub fn get_credit(env: &Env, project_id: u64) -> Option<MintedCredit> {
    env.storage().instance().get(&DataKey::Credit(project_id))
}

pub fn set_credit(env: &Env, project_id: u64, credit: &MintedCredit) {
    env.storage()
        .instance()
        .set(&DataKey::Credit(project_id), credit);
}

pub fn get_history(env: &Env, project_id: u64) -> Option<Vec<MintHistoryEntry>> {
    env.storage().instance().get(&DataKey::History(project_id))
}

pub fn set_history(env: &Env, project_id: u64, history: &Vec<MintHistoryEntry>) {
    env.storage()
        .instance()
        .set(&DataKey::History(project_id), history);
}

pub fn get_batch_record(env: &Env, project_id: u64) -> Option<BatchMintRecord> {
    env.storage()
        .instance()
        .get(&DataKey::BatchRecord(project_id))
}

pub fn set_batch_record(env: &Env, project_id: u64, record: &BatchMintRecord) {
    env.storage()
        .instance()
        .set(&DataKey::BatchRecord(project_id), record);
}
