use snafu::ensure;

use crate::error::{InvalidConfigSnafu, ScenarioResult};

/// Parameters of one voting round. Defaults reproduce the reference run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioConfig {
    pub description: String,
    /// Voting window, in ledgers.
    pub deadline: u32,
    /// Number of distinct voters, not counting the proposer.
    pub voters: usize,
    /// Index of the voter who tries to vote a second time, if any.
    pub repeat_voter: Option<usize>,
    /// Starting balance of every test account, in whole units.
    pub starting_balance: i128,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            description: "Free food for school kids".to_string(),
            deadline: 10,
            voters: 5,
            repeat_voter: Some(2),
            starting_balance: 100,
        }
    }
}

impl ScenarioConfig {
    /// Any description the contract accepts is fine here. The deadline must
    /// leave at least one ledger open, or no voter could cast a ballot.
    pub fn validate(&self) -> ScenarioResult<()> {
        ensure!(
            0 < self.deadline,
            InvalidConfigSnafu {
                message: "deadline must be at least one ledger"
            }
        );
        ensure!(
            0 < self.voters,
            InvalidConfigSnafu {
                message: "at least one voter is required"
            }
        );
        if let Some(repeat_voter) = self.repeat_voter {
            ensure!(
                repeat_voter < self.voters,
                InvalidConfigSnafu {
                    message: format!(
                        "repeat voter #{repeat_voter} is out of range for {} voters",
                        self.voters
                    )
                }
            );
        }
        ensure!(
            0 <= self.starting_balance,
            InvalidConfigSnafu {
                message: "starting balance must not be negative"
            }
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScenarioError;

    #[test]
    fn default_config_is_valid() {
        ScenarioConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_out_of_range_repeat_voter() {
        let config = ScenarioConfig {
            voters: 2,
            repeat_voter: Some(2),
            ..ScenarioConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScenarioError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_zero_deadline_and_voters() {
        for config in [
            ScenarioConfig {
                deadline: 0,
                ..ScenarioConfig::default()
            },
            ScenarioConfig {
                voters: 0,
                repeat_voter: None,
                ..ScenarioConfig::default()
            },
        ] {
            assert!(config.validate().is_err(), "{config:?}");
        }
    }

    #[test]
    fn accepts_any_description() {
        for description in [String::new(), "y".repeat(300)] {
            let config = ScenarioConfig {
                description,
                ..ScenarioConfig::default()
            };
            config.validate().unwrap();
        }
    }
}
