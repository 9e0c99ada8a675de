use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WheelError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Too many options: at most {0} are allowed")]
    TooManyOptions(usize),

    #[error("Invalid option label: {0}")]
    InvalidLabel(String),

    #[error("Option not found: {0}")]
    OptionNotFound(String),

    #[error("Invalid spin configuration: {0}")]
    InvalidConfig(String),
}
