use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{Proposal, Tally};

// ── Storage keys ────────────────────────────────────────────────────────────

const PROPOSAL: Symbol = symbol_short!("PROPOSAL");
const TALLY: Symbol = symbol_short!("TALLY");

fn ballot_key(voter: &Address) -> (Symbol, Address) {
    (symbol_short!("BALLOT"), voter.clone())
}

// ── Proposal ────────────────────────────────────────────────────────────────

pub fn has_proposal(env: &Env) -> bool {
    env.storage().instance().has(&PROPOSAL)
}

pub fn get_proposal(env: &Env) -> Option<Proposal> {
    env.storage().instance().get(&PROPOSAL)
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    env.storage().instance().set(&PROPOSAL, proposal);
}

// ── Tally ───────────────────────────────────────────────────────────────────

pub fn get_tally(env: &Env) -> Tally {
    env.storage().instance().get(&TALLY).unwrap_or_default()
}

pub fn set_tally(env: &Env, tally: &Tally) {
    env.storage().instance().set(&TALLY, tally);
}

// ── Ballot registry ─────────────────────────────────────────────────────────

pub fn has_ballot(env: &Env, voter: &Address) -> bool {
    env.storage().persistent().has(&ballot_key(voter))
}

/// Record a ballot and keep it alive well past the voting window.
pub fn store_ballot(env: &Env, voter: &Address, choice: bool) {
    let key = ballot_key(voter);
    env.storage().persistent().set(&key, &choice);
    common::ttl::extend_persistent(env, &key);
}
