use std::fmt;

use proposer::Outcome;

use crate::error::ClientResult;

/// What `times_up` reports once voting has closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TallyReport {
    pub outcome: Outcome,
    pub yes_votes: u32,
    pub no_votes: u32,
}

impl TallyReport {
    pub fn total(&self) -> u64 {
        u64::from(self.yes_votes) + u64::from(self.no_votes)
    }
}

impl From<(Outcome, u32, u32)> for TallyReport {
    fn from((outcome, yes_votes, no_votes): (Outcome, u32, u32)) -> Self {
        Self {
            outcome,
            yes_votes,
            no_votes,
        }
    }
}

/// The narrow surface the scenario needs from a ledger: funding accounts,
/// reading balances, submitting contract calls, reading contract state and
/// letting ledger time pass.
///
/// Every contract call blocks until the ledger has applied it.
pub trait LedgerClient {
    type Account: Clone + fmt::Debug;
    type Instance: Clone + fmt::Debug;

    /// Create a fresh account holding `starting_balance` stroops.
    fn new_test_account(&self, starting_balance: i128) -> ClientResult<Self::Account>;

    fn balance_of(&self, account: &Self::Account) -> ClientResult<i128>;

    /// Deploy a Proposer contract and publish a proposal on it. Returns once
    /// the instance is accepting votes.
    fn publish(
        &self,
        proposer: &Self::Account,
        description: &str,
        deadline: u32,
    ) -> ClientResult<Self::Instance>;

    fn vote(&self, instance: &Self::Instance, voter: &Self::Account, choice: bool)
        -> ClientResult<()>;

    fn description(&self, instance: &Self::Instance) -> ClientResult<String>;

    fn deadline(&self, instance: &Self::Instance) -> ClientResult<u32>;

    fn times_up(&self, instance: &Self::Instance) -> ClientResult<TallyReport>;

    /// Let `ledgers` ledgers close. Returns the ledger sequence afterwards.
    fn wait(&self, ledgers: u32) -> ClientResult<u32>;
}
