#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

mod errors;
pub mod events;
mod storage;
mod tally;
mod types;
pub mod validation;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

pub use errors::ContractError;
pub use types::{Outcome, Phase, Proposal, Tally};

/// A single yes/no proposal. Anyone may vote once while the window is open;
/// anyone may read the outcome once it has closed.
#[contract]
pub struct ProposerContract;

#[contractimpl]
impl ProposerContract {
    /// Open the proposal for voting for `deadline` ledgers.
    ///
    /// Returns the identifier voters use to reach the proposal, which is this
    /// contract instance's address.
    pub fn publish(
        env: Env,
        proposer: Address,
        description: String,
        deadline: u32,
    ) -> Result<Address, ContractError> {
        if storage::has_proposal(&env) {
            return Err(ContractError::AlreadyPublished);
        }

        proposer.require_auth();

        let opened_at = env.ledger().sequence();
        let closes_at = validation::closing_ledger(opened_at, deadline)?;

        let proposal = Proposal {
            proposer: proposer.clone(),
            description: description.clone(),
            deadline,
            opened_at,
            closes_at,
        };
        storage::set_proposal(&env, &proposal);
        storage::set_tally(&env, &Tally::default());
        common::ttl::extend_instance(&env);

        log!(&env, "proposal published", opened_at, closes_at);
        events::publish_published(&env, proposer, description, deadline, closes_at);

        Ok(env.current_contract_address())
    }

    /// Cast `voter`'s ballot. Each address votes at most once, and only
    /// before the closing ledger.
    pub fn vote(env: Env, voter: Address, choice: bool) -> Result<(), ContractError> {
        voter.require_auth();

        let proposal = storage::get_proposal(&env).ok_or(ContractError::NotPublished)?;
        if env.ledger().sequence() >= proposal.closes_at {
            return Err(ContractError::DeadlinePassed);
        }
        if storage::has_ballot(&env, &voter) {
            return Err(ContractError::AlreadyVoted);
        }

        let mut tally = storage::get_tally(&env);
        tally.record(choice)?;

        storage::store_ballot(&env, &voter, choice);
        storage::set_tally(&env, &tally);
        common::ttl::extend_instance(&env);

        log!(&env, "ballot counted", voter, choice);
        events::publish_vote_cast(&env, voter, choice, tally.yes_votes, tally.no_votes);

        Ok(())
    }

    /// The proposal text, exactly as passed to `publish`.
    pub fn description(env: Env) -> Result<String, ContractError> {
        Ok(Self::proposal(&env)?.description)
    }

    /// The voting window in ledgers, as passed to `publish`.
    pub fn deadline(env: Env) -> Result<u32, ContractError> {
        Ok(Self::proposal(&env)?.deadline)
    }

    /// The address that published the proposal.
    pub fn proposer(env: Env) -> Result<Address, ContractError> {
        Ok(Self::proposal(&env)?.proposer)
    }

    /// First ledger sequence at which votes are refused and the outcome
    /// becomes readable.
    pub fn closes_at(env: Env) -> Result<u32, ContractError> {
        Ok(Self::proposal(&env)?.closes_at)
    }

    /// `Unpublished` until `publish`, then `Open` until the closing ledger,
    /// then `Closed` for good.
    pub fn phase(env: Env) -> Phase {
        match storage::get_proposal(&env) {
            None => Phase::Unpublished,
            Some(proposal) if env.ledger().sequence() < proposal.closes_at => Phase::Open,
            Some(_) => Phase::Closed,
        }
    }

    /// Whether `voter` already has a ballot in the registry.
    pub fn has_voted(env: Env, voter: Address) -> bool {
        storage::has_ballot(&env, &voter)
    }

    /// Final `(outcome, yes_votes, no_votes)`. Only available once voting
    /// has closed, after which the answer never changes.
    pub fn times_up(env: Env) -> Result<(Outcome, u32, u32), ContractError> {
        let proposal = Self::proposal(&env)?;
        if env.ledger().sequence() < proposal.closes_at {
            return Err(ContractError::TooEarly);
        }

        let tally = storage::get_tally(&env);
        Ok((tally.outcome(), tally.yes_votes, tally.no_votes))
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}

impl ProposerContract {
    fn proposal(env: &Env) -> Result<Proposal, ContractError> {
        storage::get_proposal(env).ok_or(ContractError::NotPublished)
    }
}


#[cfg(test)]
mod test_properties;
