use std::fmt;

use proposer::{ContractError, ProposerContract, ProposerContractClient};
use snafu::{ensure, OptionExt as _, ResultExt as _};
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, InvokeError};
use tracing::debug;

use crate::client::{LedgerClient, TallyReport};
use crate::error::{
    ClientResult, ConversionSnafu, FundingSnafu, HostSnafu, InvalidTextSnafu, LedgerOverflowSnafu,
    RejectedSnafu,
};

const LOG_TARGET: &str = "proposer::sandbox";

/// Ledger the sandbox starts at.
pub const GENESIS_LEDGER: u32 = 1;
const GENESIS_TIMESTAMP: u64 = 1_700_000_000;
const SECONDS_PER_LEDGER: u64 = 5;

/// An in-process ledger running on the Soroban test host.
///
/// A Stellar asset contract plays the part of the native currency: funding
/// an account mints to it, and balances are balances of that asset. All
/// authorization is mocked, so any account may sign for itself.
pub struct Sandbox {
    env: Env,
    native: Address,
}

impl Sandbox {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().with_mut(|li| {
            li.sequence_number = GENESIS_LEDGER;
            li.timestamp = GENESIS_TIMESTAMP;
        });

        let issuer = Address::generate(&env);
        let native = env.register_stellar_asset_contract_v2(issuer).address();

        Self { env, native }
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn current_ledger(&self) -> u32 {
        self.env.ledger().sequence()
    }

    fn proposer(&self, instance: &Address) -> ProposerContractClient<'_> {
        ProposerContractClient::new(&self.env, instance)
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten the nested result of a `try_` contract call.
fn settle<T, E>(result: Result<Result<T, E>, Result<ContractError, InvokeError>>) -> ClientResult<T> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) => ConversionSnafu.fail(),
        Err(Ok(code)) => RejectedSnafu { code }.fail(),
        Err(Err(err)) => HostSnafu {
            message: format!("{err:?}"),
        }
        .fail(),
    }
}

/// Same as [`settle`], for contracts whose error type is not ours.
fn settle_foreign<T, E, F>(result: Result<Result<T, E>, Result<F, InvokeError>>) -> ClientResult<T>
where
    F: fmt::Debug,
{
    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) => ConversionSnafu.fail(),
        Err(Ok(err)) => HostSnafu {
            message: format!("{err:?}"),
        }
        .fail(),
        Err(Err(err)) => HostSnafu {
            message: format!("{err:?}"),
        }
        .fail(),
    }
}

fn to_std_string(text: &soroban_sdk::String) -> ClientResult<String> {
    let mut buf = vec![0u8; text.len() as usize];
    text.copy_into_slice(&mut buf);
    String::from_utf8(buf).context(InvalidTextSnafu)
}

impl LedgerClient for Sandbox {
    type Account = Address;
    type Instance = Address;

    fn new_test_account(&self, starting_balance: i128) -> ClientResult<Address> {
        ensure!(
            starting_balance >= 0,
            FundingSnafu {
                amount: starting_balance
            }
        );

        let account = Address::generate(&self.env);
        if 0 < starting_balance {
            settle_foreign(
                StellarAssetClient::new(&self.env, &self.native)
                    .try_mint(&account, &starting_balance),
            )?;
        }
        debug!(target: LOG_TARGET, ?account, starting_balance, "Funded test account");
        Ok(account)
    }

    fn balance_of(&self, account: &Address) -> ClientResult<i128> {
        settle_foreign(TokenClient::new(&self.env, &self.native).try_balance(account))
    }

    fn publish(&self, proposer: &Address, description: &str, deadline: u32) -> ClientResult<Address> {
        let contract_id = self.env.register(ProposerContract, ());
        debug!(target: LOG_TARGET, ?contract_id, "Deployed proposer contract");

        let description = soroban_sdk::String::from_str(&self.env, description);
        settle(
            self.proposer(&contract_id)
                .try_publish(proposer, &description, &deadline),
        )
    }

    fn vote(&self, instance: &Address, voter: &Address, choice: bool) -> ClientResult<()> {
        settle(self.proposer(instance).try_vote(voter, &choice))
    }

    fn description(&self, instance: &Address) -> ClientResult<String> {
        let description = settle(self.proposer(instance).try_description())?;
        to_std_string(&description)
    }

    fn deadline(&self, instance: &Address) -> ClientResult<u32> {
        settle(self.proposer(instance).try_deadline())
    }

    fn times_up(&self, instance: &Address) -> ClientResult<TallyReport> {
        settle(self.proposer(instance).try_times_up()).map(TallyReport::from)
    }

    fn wait(&self, ledgers: u32) -> ClientResult<u32> {
        let sequence = self
            .current_ledger()
            .checked_add(ledgers)
            .context(LedgerOverflowSnafu { ledgers })?;
        let timestamp = self
            .env
            .ledger()
            .timestamp()
            .checked_add(u64::from(ledgers) * SECONDS_PER_LEDGER)
            .context(LedgerOverflowSnafu { ledgers })?;
        self.env.ledger().with_mut(|li| {
            li.sequence_number = sequence;
            li.timestamp = timestamp;
        });
        debug!(target: LOG_TARGET, ledgers, sequence, "Ledgers closed");
        Ok(sequence)
    }
}
