use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

/// Emitted once, when the proposal opens for voting.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublishedEvent {
    pub proposer: Address,
    pub description: String,
    pub deadline: u32,
    pub closes_at: u32,
}

/// Emitted for every accepted ballot, with the totals after counting it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCastEvent {
    pub voter: Address,
    pub choice: bool,
    pub yes_votes: u32,
    pub no_votes: u32,
}

pub fn publish_published(
    env: &Env,
    proposer: Address,
    description: String,
    deadline: u32,
    closes_at: u32,
) {
    let topics = (symbol_short!("PUBLISH"), proposer.clone());
    env.events().publish(
        topics,
        PublishedEvent {
            proposer,
            description,
            deadline,
            closes_at,
        },
    );
}

pub fn publish_vote_cast(env: &Env, voter: Address, choice: bool, yes_votes: u32, no_votes: u32) {
    let topics = (symbol_short!("VOTE"), voter.clone());
    env.events().publish(
        topics,
        VoteCastEvent {
            voter,
            choice,
            yes_votes,
            no_votes,
        },
    );
}
