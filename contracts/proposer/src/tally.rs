use core::cmp::Ordering;

use crate::{ContractError, Outcome, Tally};

impl Tally {
    /// Count one ballot. Leaves the tally untouched on overflow.
    pub fn record(&mut self, choice: bool) -> Result<(), ContractError> {
        let counter = if choice {
            &mut self.yes_votes
        } else {
            &mut self.no_votes
        };
        *counter = counter
            .checked_add(1)
            .ok_or(ContractError::TallyOverflow)?;
        Ok(())
    }

    /// Number of ballots counted so far.
    pub fn total(&self) -> u64 {
        u64::from(self.yes_votes) + u64::from(self.no_votes)
    }

    pub fn outcome(&self) -> Outcome {
        match self.yes_votes.cmp(&self.no_votes) {
            Ordering::Greater => Outcome::Yes,
            Ordering::Less => Outcome::No,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_tally_is_a_tie() {
        assert_eq!(Tally::default().outcome(), Outcome::Tie);
        assert_eq!(Tally::default().total(), 0);
    }

    #[test]
    fn test_record_overflow_leaves_tally_unchanged() {
        let mut tally = Tally {
            yes_votes: u32::MAX,
            no_votes: 3,
        };
        assert_eq!(tally.record(true), Err(ContractError::TallyOverflow));
        assert_eq!(tally.yes_votes, u32::MAX);
        assert_eq!(tally.no_votes, 3);

        tally.record(false).unwrap();
        assert_eq!(tally.no_votes, 4);
    }

    proptest! {
        #[test]
        fn prop_each_ballot_lands_in_exactly_one_counter(
            ballots in proptest::collection::vec(any::<bool>(), 0..64)
        ) {
            let mut tally = Tally::default();
            for choice in &ballots {
                tally.record(*choice).unwrap();
            }

            let yes = ballots.iter().filter(|c| **c).count() as u32;
            prop_assert_eq!(tally.yes_votes, yes);
            prop_assert_eq!(tally.no_votes, ballots.len() as u32 - yes);
            prop_assert_eq!(tally.total(), ballots.len() as u64);
        }

        #[test]
        fn prop_outcome_follows_strict_majority(yes_votes in 0u32..1000, no_votes in 0u32..1000) {
            let outcome = Tally { yes_votes, no_votes }.outcome();
            let expected = if yes_votes > no_votes {
                Outcome::Yes
            } else if no_votes > yes_votes {
                Outcome::No
            } else {
                Outcome::Tie
            };
            prop_assert_eq!(outcome, expected);
        }
    }
}
