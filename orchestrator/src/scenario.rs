use proposer::ContractError;
use snafu::{OptionExt as _, ResultExt as _};
use tracing::{debug, info};

use crate::client::{LedgerClient, TallyReport};
use crate::config::ScenarioConfig;
use crate::currency::{format_currency, parse_currency};
use crate::error::{
    ClientSnafu, ExpectedRejectionSnafu, InvalidConfigSnafu, ScenarioResult,
    UnexpectedRejectionSnafu,
};

const LOG_TARGET: &str = "proposer::scenario";

/// One accepted ballot, as seen by the voter right after casting it.
#[derive(Clone, Debug)]
pub struct VoteRecord<A> {
    pub voter: usize,
    pub account: A,
    pub choice: bool,
    /// Voter's balance in stroops after voting.
    pub balance: i128,
}

#[derive(Clone, Debug)]
pub struct ScenarioReport<A, I> {
    pub instance: I,
    pub proposer: A,
    /// Description as read back from the contract.
    pub description: String,
    /// Deadline as read back from the contract.
    pub deadline: u32,
    pub votes: Vec<VoteRecord<A>>,
    /// Voter whose second ballot was refused, if the round tried one.
    pub rejected_repeat: Option<usize>,
    pub tally: TallyReport,
}

/// Run one full voting round: fund accounts, publish, vote (including the
/// deliberate repeat), wait out the deadline and read the outcome.
///
/// `choose` picks each voter's ballot by voter index. `ready` is called once,
/// as soon as the proposal accepts votes.
pub fn run<L, C, R>(
    client: &L,
    config: &ScenarioConfig,
    mut choose: C,
    ready: R,
) -> ScenarioResult<ScenarioReport<L::Account, L::Instance>>
where
    L: LedgerClient,
    C: FnMut(usize) -> bool,
    R: FnOnce(&L::Instance),
{
    config.validate()?;
    let starting_balance =
        parse_currency(config.starting_balance).context(InvalidConfigSnafu {
            message: "starting balance overflows",
        })?;

    let proposer = client
        .new_test_account(starting_balance)
        .context(ClientSnafu {
            step: "fund proposer",
        })?;

    let instance = client
        .publish(&proposer, &config.description, config.deadline)
        .context(ClientSnafu { step: "publish" })?;
    debug!(target: LOG_TARGET, ?instance, "Proposal published");
    ready(&instance);

    let voters = (0..config.voters)
        .map(|_| client.new_test_account(starting_balance))
        .collect::<Result<Vec<_>, _>>()
        .context(ClientSnafu {
            step: "fund voters",
        })?;

    let mut votes = Vec::with_capacity(voters.len());
    let mut rejected_repeat = None;
    let mut description = config.description.clone();
    let mut deadline = config.deadline;

    for (voter, account) in voters.iter().enumerate() {
        let choice = choose(voter);
        let step = format!("vote #{voter}");
        client
            .vote(&instance, account, choice)
            .context(ClientSnafu { step: step.as_str() })?;

        description = client
            .description(&instance)
            .context(ClientSnafu { step: step.as_str() })?;
        deadline = client
            .deadline(&instance)
            .context(ClientSnafu { step: step.as_str() })?;
        let balance = client
            .balance_of(account)
            .context(ClientSnafu { step: step.as_str() })?;
        debug!(target: LOG_TARGET, %description, deadline, "Proposal views");
        info!(
            target: LOG_TARGET,
            voter,
            ?account,
            choice,
            balance = %format_currency(balance),
            "Voted"
        );

        votes.push(VoteRecord {
            voter,
            account: account.clone(),
            choice,
            balance,
        });

        if config.repeat_voter == Some(voter) {
            expect_already_voted(client, &instance, voter, account, choose(voter))?;
            rejected_repeat = Some(voter);
        }
    }

    info!(target: LOG_TARGET, ledgers = config.deadline, "Waiting for the deadline");
    client
        .wait(config.deadline)
        .context(ClientSnafu { step: "wait" })?;

    let tally = client
        .times_up(&instance)
        .context(ClientSnafu { step: "times up" })?;
    info!(
        target: LOG_TARGET,
        outcome = ?tally.outcome,
        yes = tally.yes_votes,
        no = tally.no_votes,
        "Times up"
    );

    Ok(ScenarioReport {
        instance,
        proposer,
        description,
        deadline,
        votes,
        rejected_repeat,
        tally,
    })
}

/// Cast a second ballot for `voter` and insist the contract refuses it as a
/// duplicate.
fn expect_already_voted<L>(
    client: &L,
    instance: &L::Instance,
    voter: usize,
    account: &L::Account,
    choice: bool,
) -> ScenarioResult<()>
where
    L: LedgerClient,
{
    let err = match client.vote(instance, account, choice) {
        Ok(()) => return ExpectedRejectionSnafu { voter }.fail(),
        Err(err) => err,
    };

    match err.contract_error() {
        Some(ContractError::AlreadyVoted) => {
            info!(target: LOG_TARGET, voter, "Repeat vote errored as intended");
            Ok(())
        }
        Some(code) => UnexpectedRejectionSnafu { voter, code }.fail(),
        None => Err(err).context(ClientSnafu {
            step: format!("repeat vote #{voter}"),
        }),
    }
}
