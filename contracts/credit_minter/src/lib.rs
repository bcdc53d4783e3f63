#![no_std]

mod error;
mod events;
mod storage;
mod validation;

use error::Error;
use events::*;
use storage::{BatchMintRecord, DataKey, MintHistoryEntry, MintedCredit};

use soroban_sdk::{contract, contractimpl, token, vec, Address, Env, IntoVal, Symbol, Vec};

#[contract]
pub struct CreditMinter;

#[contractimpl]
impl CreditMinter {
    // ============================================
    // INITIALIZATION
    // ============================================

    /// Initialize the minter with its admin and collaborator contracts.
    ///
    /// Caps, floor and fee start at their configured defaults; the global
    /// cap is fixed here for the contract's lifetime.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(
        env: Env,
        admin: Address,
        registry: Address,
        oracle: Address,
        token: Address,
        fee_token: Address,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        storage::set_initialized(&env);
        storage::set_admin(&env, &admin);
        storage::set_paused(&env, false);
        storage::set_mint_fee(&env, storage::DEFAULT_MINT_FEE);
        storage::set_min_mint_amount(&env, storage::DEFAULT_MIN_MINT_AMOUNT);
        storage::set_max_mint_per_project(&env, storage::DEFAULT_MAX_MINT_PER_PROJECT);
        storage::set_max_global_mint(&env, storage::DEFAULT_MAX_GLOBAL_MINT);
        storage::set_total_minted(&env, 0);
        storage::set_last_mint_timestamp(&env, 0);
        storage::set_address(&env, DataKey::Registry, &registry);
        storage::set_address(&env, DataKey::Oracle, &oracle);
        storage::set_address(&env, DataKey::Token, &token);
        storage::set_address(&env, DataKey::FeeToken, &fee_token);

        Ok(())
    }

    // ============================================
    // ADMIN OPERATIONS
    // ============================================

    /// Hand the admin role to a new address.
    ///
    /// # Errors
    /// - `NotAuthorized`: Caller is not admin, or new admin is the caller
    pub fn set_minter_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;
        if new_admin == caller {
            return Err(Error::NotAuthorized);
        }
        storage::set_admin(&env, &new_admin);
        Ok(())
    }

    /// Pause or resume minting.
    pub fn set_mint_paused(env: Env, caller: Address, paused: bool) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;
        storage::set_paused(&env, paused);
        Ok(())
    }

    /// Replace the per-project supply cap.
    ///
    /// # Errors
    /// - `NotAuthorized`: Caller is not admin
    /// - `InvalidUpdateParam`: New cap is not positive
    pub fn set_max_mint_per_project(env: Env, caller: Address, new_max: i128) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;
        if new_max <= 0 {
            return Err(Error::InvalidUpdateParam);
        }
        storage::set_max_mint_per_project(&env, new_max);
        Ok(())
    }

    /// Replace the minimum mint amount.
    ///
    /// # Errors
    /// - `NotAuthorized`: Caller is not admin
    /// - `InvalidMinAmount`: New floor is not positive
    pub fn set_min_mint_amount(env: Env, caller: Address, new_min: i128) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;
        if new_min <= 0 {
            return Err(Error::InvalidMinAmount);
        }
        storage::set_min_mint_amount(&env, new_min);
        Ok(())
    }

    /// Point at a new oracle contract.
    pub fn set_oracle_contract(env: Env, caller: Address, new_oracle: Address) -> Result<(), Error> {
        Self::set_collaborator(&env, &caller, DataKey::Oracle, new_oracle)
    }

    /// Point at a new credit token contract.
    pub fn set_token_contract(env: Env, caller: Address, new_token: Address) -> Result<(), Error> {
        Self::set_collaborator(&env, &caller, DataKey::Token, new_token)
    }

    /// Point at a new project registry contract.
    pub fn set_registry_contract(
        env: Env,
        caller: Address,
        new_registry: Address,
    ) -> Result<(), Error> {
        Self::set_collaborator(&env, &caller, DataKey::Registry, new_registry)
    }

    /// Replace the per-mint fee.
    ///
    /// # Errors
    /// - `NotAuthorized`: Caller is not admin
    /// - `InvalidUpdateParam`: New fee is not positive
    pub fn set_mint_fee(env: Env, caller: Address, new_fee: i128) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;
        if new_fee <= 0 {
            return Err(Error::InvalidUpdateParam);
        }
        storage::set_mint_fee(&env, new_fee);
        Ok(())
    }

    /// Mark a project as eligible for minting.
    ///
    /// # Errors
    /// - `NotAuthorized`: Caller is not admin
    /// - `InvalidProjectId`: Project id is zero
    pub fn activate_project(env: Env, caller: Address, project_id: u64) -> Result<(), Error> {
        Self::set_project_active(&env, &caller, project_id, true)
    }

    /// Mark a project as ineligible. Past mints stay on the ledger.
    pub fn deactivate_project(env: Env, caller: Address, project_id: u64) -> Result<(), Error> {
        Self::set_project_active(&env, &caller, project_id, false)
    }

    // ============================================
    // MINT
    // ============================================

    /// Mint credits for a project.
    ///
    /// The full rule chain runs before any transfer or ledger write, so a
    /// rejected call leaves no trace. On success the fee moves from the
    /// minter to the admin, `amount` credit tokens are issued to the
    /// minter, and the ledger is updated.
    ///
    /// # Errors
    /// First failing rule, in order: `MintPaused`, `InvalidProjectId`,
    /// `InvalidAmount`, `InvalidEcoImpact`, `InvalidVerifLevel`,
    /// `InvalidTimestamp`, `ProjectNotRegistered`, `OracleNotConfirmed`,
    /// `InvalidStatus`, `ExceedsMaxMint`, `MaxMintsExceeded`
    pub fn mint_credits(
        env: Env,
        minter: Address,
        project_id: u64,
        amount: i128,
        eco_impact: i128,
        verif_level: u32,
    ) -> Result<(), Error> {
        minter.require_auth();

        Self::check_not_paused(&env)?;
        if project_id == 0 {
            return Err(Error::InvalidProjectId);
        }

        let min_amount = storage::get_min_mint_amount(&env).ok_or(Error::NotInitialized)?;
        validation::check_item(amount, eco_impact, verif_level, min_amount)?;

        // The clock must strictly advance between successful single mints,
        // system-wide. Batch mints do not enforce this.
        let now = env.ledger().timestamp();
        if now <= storage::get_last_mint_timestamp(&env) {
            return Err(Error::InvalidTimestamp);
        }

        Self::check_registered(&env, project_id)?;
        Self::check_verified(&env, project_id)?;
        if !storage::get_project_status(&env, project_id) {
            return Err(Error::InvalidStatus);
        }

        let project_total = storage::get_project_total(&env, project_id);
        let max_per_project =
            storage::get_max_mint_per_project(&env).ok_or(Error::NotInitialized)?;
        validation::check_project_cap(project_total, amount, max_per_project)?;

        let total_minted = storage::get_total_minted(&env);
        let max_global = storage::get_max_global_mint(&env).ok_or(Error::NotInitialized)?;
        validation::check_global_cap(total_minted, amount, max_global)?;

        // All rules passed; effects from here on.
        Self::collect_fee(&env, &minter, 1)?;
        Self::issue_credits(&env, &minter, amount)?;

        storage::set_credit(
            &env,
            project_id,
            &MintedCredit {
                amount,
                timestamp: now,
                eco_impact,
                verif_level,
            },
        );
        storage::set_project_total(&env, project_id, project_total + amount);
        storage::set_total_minted(&env, total_minted + amount);
        storage::set_last_mint_timestamp(&env, now);

        env.events().publish(
            (Symbol::new(&env, "credits_minted"), project_id),
            CreditsMintedEvent {
                project_id,
                minter,
                amount,
                eco_impact,
                verif_level,
                timestamp: now,
            },
        );

        Ok(())
    }

    /// Mint a batch of credits for one project under a single call.
    ///
    /// Every item is validated before any transfer or ledger write; a
    /// failing item rejects the whole batch with no partial effects. On
    /// success the fee is charged once, scaled by the batch size, one
    /// token issuance happens per item, and one history entry per item is
    /// appended with the item's in-call index as `batch_id`. The single
    /// mint's strict-clock rule does not apply here.
    ///
    /// # Errors
    /// First failing rule, in order: `MintPaused`, `InvalidProjectId`,
    /// `InvalidBatchSize`, `ProjectNotRegistered`, `OracleNotConfirmed`,
    /// `InvalidStatus`, `ExceedsMaxMint`, `MaxMintsExceeded`, then per
    /// item `InvalidAmount`, `InvalidEcoImpact`, `InvalidVerifLevel`
    pub fn batch_mint_credits(
        env: Env,
        minter: Address,
        project_id: u64,
        amounts: Vec<i128>,
        eco_impacts: Vec<i128>,
        verif_levels: Vec<u32>,
    ) -> Result<(), Error> {
        minter.require_auth();

        Self::check_not_paused(&env)?;
        if project_id == 0 {
            return Err(Error::InvalidProjectId);
        }

        let size = amounts.len();
        validation::check_batch_size(size)?;
        if eco_impacts.len() != size || verif_levels.len() != size {
            return Err(Error::InvalidBatchSize);
        }

        Self::check_registered(&env, project_id)?;
        Self::check_verified(&env, project_id)?;
        if !storage::get_project_status(&env, project_id) {
            return Err(Error::InvalidStatus);
        }

        // Aggregate cap checks run once against the summed batch amount.
        let batch_total = validation::batch_total(&amounts).ok_or(Error::ExceedsMaxMint)?;

        let project_total = storage::get_project_total(&env, project_id);
        let max_per_project =
            storage::get_max_mint_per_project(&env).ok_or(Error::NotInitialized)?;
        validation::check_project_cap(project_total, batch_total, max_per_project)?;

        let total_minted = storage::get_total_minted(&env);
        let max_global = storage::get_max_global_mint(&env).ok_or(Error::NotInitialized)?;
        validation::check_global_cap(total_minted, batch_total, max_global)?;

        let min_amount = storage::get_min_mint_amount(&env).ok_or(Error::NotInitialized)?;
        for i in 0..size {
            validation::check_item(
                amounts.get_unchecked(i),
                eco_impacts.get_unchecked(i),
                verif_levels.get_unchecked(i),
                min_amount,
            )?;
        }

        // All items validated; effects from here on.
        Self::collect_fee(&env, &minter, size)?;

        let now = env.ledger().timestamp();
        let mut history = storage::get_history(&env, project_id).unwrap_or(vec![&env]);
        for i in 0..size {
            let amount = amounts.get_unchecked(i);
            Self::issue_credits(&env, &minter, amount)?;
            history.push_back(MintHistoryEntry {
                batch_id: i,
                amount,
                timestamp: now,
            });
        }

        storage::set_history(&env, project_id, &history);
        storage::set_project_total(&env, project_id, project_total + batch_total);
        storage::set_total_minted(&env, total_minted + batch_total);
        storage::set_last_mint_timestamp(&env, now);
        storage::set_batch_record(
            &env,
            project_id,
            &BatchMintRecord {
                total_amount: batch_total,
                count: size,
            },
        );

        env.events().publish(
            (Symbol::new(&env, "batch_minted"), project_id),
            BatchMintedEvent {
                project_id,
                minter,
                total_amount: batch_total,
                count: size,
                timestamp: now,
            },
        );

        Ok(())
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Latest single-mint snapshot for a project, if it ever had one.
    pub fn get_minted_credits(env: Env, project_id: u64) -> Option<MintedCredit> {
        storage::get_credit(&env, project_id)
    }

    /// Batch mint history for a project, if it ever had a batch.
    pub fn get_mint_history(env: Env, project_id: u64) -> Option<Vec<MintHistoryEntry>> {
        storage::get_history(&env, project_id)
    }

    /// Most recent batch summary for a project.
    pub fn get_batch_record(env: Env, project_id: u64) -> Option<BatchMintRecord> {
        storage::get_batch_record(&env, project_id)
    }

    /// Cumulative amount minted for a project.
    pub fn get_project_mint_total(env: Env, project_id: u64) -> i128 {
        storage::get_project_total(&env, project_id)
    }

    /// Cumulative amount minted across all projects.
    pub fn get_total_minted(env: Env) -> i128 {
        storage::get_total_minted(&env)
    }

    pub fn get_mint_paused(env: Env) -> bool {
        storage::get_paused(&env)
    }

    pub fn get_max_mint_per_project(env: Env) -> i128 {
        storage::get_max_mint_per_project(&env).unwrap_or(0)
    }

    pub fn is_project_active(env: Env, project_id: u64) -> bool {
        storage::get_project_status(&env, project_id)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn check_not_paused(env: &Env) -> Result<(), Error> {
        if storage::get_paused(env) {
            return Err(Error::MintPaused);
        }
        Ok(())
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<Address, Error> {
        caller.require_auth();
        let admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
        if caller != &admin {
            return Err(Error::NotAuthorized);
        }
        Ok(admin)
    }

    fn set_collaborator(
        env: &Env,
        caller: &Address,
        key: DataKey,
        new_addr: Address,
    ) -> Result<(), Error> {
        Self::require_admin(env, caller)?;
        // Guard against accidentally pointing a collaborator slot at the
        // admin itself.
        if &new_addr == caller {
            return Err(Error::NotAuthorized);
        }
        storage::set_address(env, key, &new_addr);
        Ok(())
    }

    fn set_project_active(
        env: &Env,
        caller: &Address,
        project_id: u64,
        active: bool,
    ) -> Result<(), Error> {
        Self::require_admin(env, caller)?;
        if project_id == 0 {
            return Err(Error::InvalidProjectId);
        }
        storage::set_project_status(env, project_id, active);

        env.events().publish(
            (Symbol::new(env, "project_status"), project_id),
            ProjectStatusEvent { project_id, active },
        );

        Ok(())
    }

    fn check_registered(env: &Env, project_id: u64) -> Result<(), Error> {
        let registry = storage::get_address(env, DataKey::Registry).ok_or(Error::NotInitialized)?;
        let registered: bool = env.invoke_contract(
            &registry,
            &Symbol::new(env, "is_registered"),
            vec![env, project_id.into_val(env)],
        );
        if !registered {
            return Err(Error::ProjectNotRegistered);
        }
        Ok(())
    }

    fn check_verified(env: &Env, project_id: u64) -> Result<(), Error> {
        let oracle = storage::get_address(env, DataKey::Oracle).ok_or(Error::NotInitialized)?;
        let verified: bool = env.invoke_contract(
            &oracle,
            &Symbol::new(env, "is_verified"),
            vec![env, project_id.into_val(env)],
        );
        if !verified {
            return Err(Error::OracleNotConfirmed);
        }
        Ok(())
    }

    fn collect_fee(env: &Env, payer: &Address, count: u32) -> Result<(), Error> {
        let fee = storage::get_mint_fee(env).ok_or(Error::NotInitialized)?;
        let fee_token = storage::get_address(env, DataKey::FeeToken).ok_or(Error::NotInitialized)?;
        let admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;

        let total_fee = fee
            .checked_mul(count as i128)
            .ok_or(Error::InvalidUpdateParam)?;
        token::Client::new(env, &fee_token).transfer(payer, &admin, &total_fee);
        Ok(())
    }

    fn issue_credits(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
        let token = storage::get_address(env, DataKey::Token).ok_or(Error::NotInitialized)?;
        env.invoke_contract::<()>(
            &token,
            &Symbol::new(env, "mint"),
            vec![
                env,
                env.current_contract_address().to_val(),
                to.to_val(),
                amount.into_val(env),
            ],
        );
        Ok(())
    }
}
