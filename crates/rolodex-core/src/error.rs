use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("at least one of first name, last name, or organization is required")]
    MissingIdentity,
}
