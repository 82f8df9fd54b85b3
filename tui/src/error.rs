use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    UtilsError(#[from] swarm_utils::Error),

    #[error(transparent)]
    RatatuiExtraError(#[from] swarm_ratatui_extra::Error),

    #[error("Draw failed: {0}")]
    Draw(io::Error),

    #[error("Unknown Theme: {0}")]
    UnknownTheme(String),

    #[error("Mpsc Recv Error: {0}")]
    MpscRecvError(Box<std::sync::mpsc::RecvError>),

    #[error("Mpsc Send Error: {0}")]
    MpscSendError(Box<std::sync::mpsc::SendError<crate::Event>>),
}

impl Error {
    pub fn is_connect_reqwest(&self) -> bool {
        match self {
            Self::UtilsError(error) => error.is_connect(),
            _ => false,
        }
    }
}

impl From<std::sync::mpsc::RecvError> for Error {
    fn from(e: std::sync::mpsc::RecvError) -> Self {
        Error::MpscRecvError(Box::new(e))
    }
}

impl From<std::sync::mpsc::SendError<crate::Event>> for Error {
    fn from(e: std::sync::mpsc::SendError<crate::Event>) -> Self {
        Error::MpscSendError(Box::new(e))
    }
}
