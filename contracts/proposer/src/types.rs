use soroban_sdk::{contracttype, Address, String};

/// The proposal being voted on. Written once by `publish`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub proposer: Address,
    pub description: String,
    /// Voting window in ledgers, exactly as passed to `publish`.
    pub deadline: u32,
    /// Ledger sequence at which the proposal was published.
    pub opened_at: u32,
    /// First ledger sequence at which votes are refused.
    pub closes_at: u32,
}

/// Running vote counts.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    pub yes_votes: u32,
    pub no_votes: u32,
}

/// Result of a closed round. Ties are reported as such, never resolved
/// in favour of either side.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Outcome {
    Tie = 0,
    Yes = 1,
    No = 2,
}

/// Where the contract instance is in its lifecycle.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Phase {
    Unpublished = 0,
    Open = 1,
    Closed = 2,
}
