use clap::Parser;

use crate::ScenarioConfig;

/// Run one Proposer voting round against an in-process ledger.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Opts {
    #[arg(long, env = "PROPOSER_DESCRIPTION", default_value = "Free food for school kids")]
    pub description: String,

    /// Voting window, in ledgers.
    #[arg(long, env = "PROPOSER_DEADLINE", default_value_t = 10)]
    pub deadline: u32,

    #[arg(long, env = "PROPOSER_VOTERS", default_value_t = 5)]
    pub voters: usize,

    /// Voter index that tries to vote twice.
    #[arg(long, env = "PROPOSER_REPEAT_VOTER", default_value_t = 2)]
    pub repeat_voter: usize,

    /// Skip the deliberate double vote.
    #[arg(long, default_value = "false")]
    pub no_repeat: bool,

    /// Starting balance of each test account, in whole units.
    #[arg(long, env = "PROPOSER_STARTING_BALANCE", default_value_t = 100)]
    pub starting_balance: i128,

    /// Seed for the voters' coin flips. Random when absent.
    #[arg(long, env = "PROPOSER_SEED")]
    pub seed: Option<u64>,
}

impl Opts {
    pub fn scenario_config(&self) -> ScenarioConfig {
        ScenarioConfig {
            description: self.description.clone(),
            deadline: self.deadline,
            voters: self.voters,
            repeat_voter: (!self.no_repeat).then_some(self.repeat_voter),
            starting_balance: self.starting_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_scenario_config() {
        let opts = Opts::try_parse_from(["run-scenario"]).unwrap();
        assert_eq!(opts.scenario_config(), ScenarioConfig::default());
        assert_eq!(opts.seed, None);
    }

    #[test]
    fn no_repeat_disables_double_vote() {
        let opts =
            Opts::try_parse_from(["run-scenario", "--no-repeat", "--voters", "3", "--seed", "7"])
                .unwrap();
        let config = opts.scenario_config();
        assert_eq!(config.repeat_voter, None);
        assert_eq!(config.voters, 3);
        assert_eq!(opts.seed, Some(7));
    }
}
