#![no_std]

mod error;
mod events;
mod storage;

use error::Error;
use events::{BurnEvent, MintEvent, TransferEvent};
use storage::DataKey;

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

#[contract]
pub struct EcoCreditToken;

#[contractimpl]
impl EcoCreditToken {
    /// Initialize the token contract
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

    /// Add an operator (typically the credit minter contract)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    pub fn add_operator(env: Env, operator: Address) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();

        env.storage()
            .instance()
            .set(&DataKey::Operators(operator), &true);

        Ok(())
    }

    /// Remove an operator
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    pub fn remove_operator(env: Env, operator: Address) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();

        env.storage()
            .instance()
            .remove(&DataKey::Operators(operator));

        Ok(())
    }

    /// Mint credit tokens to `to`. Only operators; contract invokers
    /// authorize implicitly when calling on their own behalf.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: `operator` is not in the operator table
    /// - `InvalidAmount`: Amount <= 0 or balance overflow
    pub fn mint(env: Env, operator: Address, to: Address, amount: i128) -> Result<(), Error> {
        operator.require_auth();
        Self::require_operator(&env, &operator)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let balance_key = DataKey::Balance(to.clone());
        let current: i128 = env
            .storage()
            .instance()
            .get(&balance_key)
            .unwrap_or(0);

        let new_balance = current.checked_add(amount).ok_or(Error::InvalidAmount)?;
        env.storage().instance().set(&balance_key, &new_balance);

        env.events().publish(
            (Symbol::new(&env, "mint"), to.clone()),
            MintEvent { to, amount },
        );

        Ok(())
    }

    /// Burn credit tokens from `from`. Only operators.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: `operator` is not in the operator table
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientBalance`: Not enough balance
    pub fn burn(env: Env, operator: Address, from: Address, amount: i128) -> Result<(), Error> {
        operator.require_auth();
        Self::require_operator(&env, &operator)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let balance_key = DataKey::Balance(from.clone());
        let current: i128 = env
            .storage()
            .instance()
            .get(&balance_key)
            .ok_or(Error::InsufficientBalance)?;

        if current < amount {
            return Err(Error::InsufficientBalance);
        }

        let new_balance = current - amount;
        if new_balance == 0 {
            env.storage().instance().remove(&balance_key);
        } else {
            env.storage().instance().set(&balance_key, &new_balance);
        }

        env.events().publish(
            (Symbol::new(&env, "burn"), from.clone()),
            BurnEvent { from, amount },
        );

        Ok(())
    }

    /// Transfer credit tokens between holders
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: Amount <= 0 or balance overflow
    /// - `InsufficientBalance`: Not enough balance
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::NotInitialized);
        }

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        from.require_auth();

        let from_key = DataKey::Balance(from.clone());
        let from_balance: i128 = env
            .storage()
            .instance()
            .get(&from_key)
            .ok_or(Error::InsufficientBalance)?;

        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }

        let to_key = DataKey::Balance(to.clone());
        let to_balance: i128 = env.storage().instance().get(&to_key).unwrap_or(0);

        let new_from_balance = from_balance - amount;
        let new_to_balance = to_balance.checked_add(amount).ok_or(Error::InvalidAmount)?;

        if new_from_balance == 0 {
            env.storage().instance().remove(&from_key);
        } else {
            env.storage().instance().set(&from_key, &new_from_balance);
        }
        env.storage().instance().set(&to_key, &new_to_balance);

        env.events().publish(
            (Symbol::new(&env, "transfer"), from.clone()),
            TransferEvent { from, to, amount },
        );

        Ok(())
    }

    /// Get balance for a holder
    pub fn balance(env: Env, holder: Address) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::Balance(holder))
            .unwrap_or(0)
    }

    /// Check if address is an operator
    pub fn is_operator(env: Env, address: Address) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Operators(address))
            .unwrap_or(false)
    }

    fn require_operator(env: &Env, operator: &Address) -> Result<(), Error> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::NotInitialized);
        }
        let allowed: bool = env
            .storage()
            .instance()
            .get(&DataKey::Operators(operator.clone()))
            .unwrap_or(false);
        if !allowed {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}
