use std::collections::BTreeMap;
use std::vec::Vec;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{Address, Env, String};

use crate::*;

const DEADLINE: u32 = 10;
const VOTERS: usize = 6;

#[derive(Clone, Debug, Arbitrary)]
enum Step {
    Vote {
        #[proptest(strategy = "0..VOTERS")]
        voter: usize,
        choice: bool,
    },
    Advance {
        #[proptest(strategy = "1u32..4")]
        ledgers: u32,
    },
}

fn published() -> (Env, ProposerContractClient<'static>, Vec<Address>) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(1);

    let contract_id = env.register(ProposerContract, ());
    let client = ProposerContractClient::new(&env, &contract_id);

    let proposer = Address::generate(&env);
    client.publish(
        &proposer,
        &String::from_str(&env, "Free food for school kids"),
        &DEADLINE,
    );

    let voters = (0..VOTERS).map(|_| Address::generate(&env)).collect();
    (env, client, voters)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Replays random vote/advance sequences against a reference model of
    /// the registry and checks every accept/reject decision.
    #[test]
    fn prop_contract_matches_registry_model(
        steps in proptest::collection::vec(any::<Step>(), 1..24)
    ) {
        let (env, client, voters) = published();
        let closes_at = client.closes_at();
        let mut registry: BTreeMap<usize, bool> = BTreeMap::new();

        for step in steps {
            match step {
                Step::Vote { voter, choice } => {
                    let now = env.ledger().sequence();
                    let expected = if now >= closes_at {
                        Err(Ok(ContractError::DeadlinePassed))
                    } else if registry.contains_key(&voter) {
                        Err(Ok(ContractError::AlreadyVoted))
                    } else {
                        registry.insert(voter, choice);
                        Ok(Ok(()))
                    };
                    prop_assert_eq!(client.try_vote(&voters[voter], &choice), expected);
                }
                Step::Advance { ledgers } => {
                    env.ledger().with_mut(|li| li.sequence_number += ledgers);
                }
            }

            for (idx, voter) in voters.iter().enumerate() {
                prop_assert_eq!(client.has_voted(voter), registry.contains_key(&idx));
            }
        }

        if env.ledger().sequence() < closes_at {
            prop_assert_eq!(client.try_times_up(), Err(Ok(ContractError::TooEarly)));
            env.ledger().set_sequence_number(closes_at);
        }

        let yes = registry.values().filter(|choice| **choice).count() as u32;
        let no = registry.len() as u32 - yes;
        let (outcome, yes_votes, no_votes) = client.times_up();
        prop_assert_eq!((yes_votes, no_votes), (yes, no));
        prop_assert_eq!(yes_votes + no_votes, registry.len() as u32);
        prop_assert_eq!(outcome, Tally { yes_votes, no_votes }.outcome());
        prop_assert_eq!(client.times_up(), (outcome, yes_votes, no_votes));
    }

    #[test]
    fn prop_views_round_trip(
        description in "[ -~]{0,64}",
        deadline in 1u32..100_000,
        ballots in proptest::collection::vec(any::<bool>(), 0..8)
    ) {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register(ProposerContract, ());
        let client = ProposerContractClient::new(&env, &contract_id);

        let description = String::from_str(&env, &description);
        client.publish(&Address::generate(&env), &description, &deadline);

        for choice in ballots {
            client.vote(&Address::generate(&env), &choice);
            prop_assert_eq!(client.description(), description.clone());
            prop_assert_eq!(client.deadline(), deadline);
        }
    }
}
