use crate::ContractError;

/// Resolve the relative `deadline` into the first ledger at which voting is
/// closed. A zero `deadline` yields a proposal that is closed on arrival.
pub fn closing_ledger(opened_at: u32, deadline: u32) -> Result<u32, ContractError> {
    opened_at
        .checked_add(deadline)
        .ok_or(ContractError::InvalidDeadline)
}
