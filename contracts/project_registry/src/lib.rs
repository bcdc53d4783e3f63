#![no_std]

mod error;
mod events;
mod storage;

use error::Error;
use events::ProjectRegisteredEvent;
use storage::{DataKey, ProjectRecord};

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

#[contract]
pub struct ProjectRegistry;

#[contractimpl]
impl ProjectRegistry {
    /// Initialize the registry
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

    /// Register a project id
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `InvalidProjectId`: Project id is zero
    /// - `AlreadyRegistered`: Project id already registered
    pub fn register_project(env: Env, caller: Address, project_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        if caller != admin {
            return Err(Error::Unauthorized);
        }

        if project_id == 0 {
            return Err(Error::InvalidProjectId);
        }

        let key = DataKey::Project(project_id);
        if env.storage().instance().has(&key) {
            return Err(Error::AlreadyRegistered);
        }

        let record = ProjectRecord {
            registrar: caller.clone(),
            registered_at: env.ledger().timestamp(),
        };
        env.storage().instance().set(&key, &record);

        env.events().publish(
            (Symbol::new(&env, "project_registered"), project_id),
            ProjectRegisteredEvent {
                project_id,
                registrar: caller,
                registered_at: record.registered_at,
            },
        );

        Ok(())
    }

    /// Check whether a project id is registered
    pub fn is_registered(env: Env, project_id: u64) -> bool {
        env.storage()
            .instance()
            .has(&DataKey::Project(project_id))
    }

    /// Fetch the registration record for a project id
    pub fn get_project(env: Env, project_id: u64) -> Option<ProjectRecord> {
        env.storage().instance().get(&DataKey::Project(project_id))
    }
}
