//! Errors raised by the viewer. The drawing core has none.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("could not create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixel surface failed: {0}")]
    Pixels(#[from] pixels::Error),

    #[error("malformed command {line:?}: {reason}")]
    Command { line: String, reason: String },

    #[error("invalid argument {arg:?}: {reason}")]
    Argument { arg: String, reason: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
