use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// Two commands were registered under the same name.
    #[error("Command '{0}' is already registered")]
    DuplicateCommand(String),
}
