use proposer::ContractError;
use snafu::Snafu;

/// Failures surfaced by a [`LedgerClient`](crate::LedgerClient).
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ClientError {
    #[snafu(display("Contract rejected the call: {code:?}"))]
    Rejected { code: ContractError },
    #[snafu(display("Host failed the invocation: {message}"))]
    Host { message: String },
    #[snafu(display("Could not decode the contract's reply"))]
    Conversion,
    #[snafu(display("Cannot fund an account with {amount} stroops"))]
    Funding { amount: i128 },
    #[snafu(display("Cannot close {ledgers} more ledgers without overflowing the sequence"))]
    LedgerOverflow { ledgers: u32 },
    #[snafu(display("Contract returned text that is not UTF-8"))]
    InvalidText { source: std::string::FromUtf8Error },
}

impl ClientError {
    /// The contract error code, if the contract itself refused the call.
    pub fn contract_error(&self) -> Option<ContractError> {
        match self {
            ClientError::Rejected { code } => Some(*code),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ScenarioError {
    #[snafu(display("Step `{step}` failed"))]
    Client { source: ClientError, step: String },
    #[snafu(display("Repeat vote by voter #{voter} was accepted, expected a rejection"))]
    ExpectedRejection { voter: usize },
    #[snafu(display("Repeat vote by voter #{voter} failed with {code:?}, expected AlreadyVoted"))]
    UnexpectedRejection { voter: usize, code: ContractError },
    #[snafu(display("Invalid scenario configuration: {message}"))]
    InvalidConfig { message: String },
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
