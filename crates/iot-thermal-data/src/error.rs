use cosmwasm_std::StdError;
use iot_library::record::RecordError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Record(#[from] RecordError),
}
