use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, ConsoleError>;
