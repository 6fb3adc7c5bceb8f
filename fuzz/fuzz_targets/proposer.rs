#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use proposer::{ContractError, ProposerContract, ProposerContractClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{Address, Env, String};

const VOTERS: usize = 8;

#[derive(Arbitrary, Debug)]
enum Op {
    Vote { voter: u8, choice: bool },
    Advance { ledgers: u8 },
    TimesUp,
}

#[derive(Arbitrary, Debug)]
struct Input {
    deadline: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(1);

    let contract_id = env.register(ProposerContract, ());
    let client = ProposerContractClient::new(&env, &contract_id);
    let voters: Vec<Address> = (0..VOTERS).map(|_| Address::generate(&env)).collect();

    let deadline = u32::from(input.deadline);
    let published = client.try_publish(
        &Address::generate(&env),
        &String::from_str(&env, "fuzz"),
        &deadline,
    );
    assert!(published.is_ok());
    let closes_at = client.closes_at();

    let mut registry: BTreeMap<usize, bool> = BTreeMap::new();
    for op in input.ops.into_iter().take(64) {
        let now = env.ledger().sequence();
        match op {
            Op::Vote { voter, choice } => {
                let voter = usize::from(voter) % VOTERS;
                let result = client.try_vote(&voters[voter], &choice);
                if now >= closes_at {
                    assert_eq!(result, Err(Ok(ContractError::DeadlinePassed)));
                } else if registry.contains_key(&voter) {
                    assert_eq!(result, Err(Ok(ContractError::AlreadyVoted)));
                } else {
                    assert_eq!(result, Ok(Ok(())));
                    registry.insert(voter, choice);
                }
            }
            Op::Advance { ledgers } => {
                env.ledger()
                    .with_mut(|li| li.sequence_number += u32::from(ledgers));
            }
            Op::TimesUp => match client.try_times_up() {
                Ok(Ok((_, yes_votes, no_votes))) => {
                    assert!(now >= closes_at);
                    assert_eq!((yes_votes + no_votes) as usize, registry.len());
                }
                Err(Ok(ContractError::TooEarly)) => assert!(now < closes_at),
                other => panic!("unexpected times_up result: {other:?}"),
            },
        }
    }
});
