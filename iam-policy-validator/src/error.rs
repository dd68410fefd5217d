//! Crate-level error type combining loading and validation failures.

use thiserror::Error;

use crate::loading::LoadError;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum IamPolicyValidatorError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type IamPolicyValidatorResult<T> = Result<T, IamPolicyValidatorError>;
