use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("failed to read from judge: {0}")]
    Input(#[source] io::Error),
    #[error("failed to send move to judge: {0}")]
    Output(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
