#![no_std]

mod error;
mod events;
mod storage;

use error::Error;
use events::AttestationEvent;
use storage::DataKey;

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

#[contract]
pub struct ImpactOracle;

#[contractimpl]
impl ImpactOracle {
    /// Initialize the oracle
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, &admin);

        Ok(())
    }

    /// Record an ecological attestation for a project
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `InvalidProjectId`: Project id is zero
    pub fn attest(env: Env, caller: Address, project_id: u64) -> Result<(), Error> {
        Self::set_verified(&env, &caller, project_id, true)
    }

    /// Withdraw a previous attestation
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `InvalidProjectId`: Project id is zero
    pub fn revoke(env: Env, caller: Address, project_id: u64) -> Result<(), Error> {
        Self::set_verified(&env, &caller, project_id, false)
    }

    /// Check whether a project carries a current attestation
    pub fn is_verified(env: Env, project_id: u64) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Verified(project_id))
            .unwrap_or(false)
    }

    fn set_verified(
        env: &Env,
        caller: &Address,
        project_id: u64,
        verified: bool,
    ) -> Result<(), Error> {
        caller.require_auth();

        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        if caller != &admin {
            return Err(Error::Unauthorized);
        }

        if project_id == 0 {
            return Err(Error::InvalidProjectId);
        }

        env.storage()
            .instance()
            .set(&DataKey::Verified(project_id), &verified);

        env.events().publish(
            (Symbol::new(env, "attestation"), project_id),
            AttestationEvent {
                project_id,
                verified,
            },
        );

        Ok(())
    }
}
