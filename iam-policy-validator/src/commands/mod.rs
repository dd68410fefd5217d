//! Commands module - service layer for IAM Policy Validator operations

mod check;
pub(crate) mod service;

pub use service::IamPolicyValidatorService;
