/// Contract errors
///
/// Codes are part of the contract interface and must stay stable.
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyPublished = 1,
    NotPublished = 2,
    AlreadyVoted = 3,
    DeadlinePassed = 4,
    TooEarly = 5,
    InvalidDeadline = 6,
    TallyOverflow = 7,
}
