//! Error types for the core crate.
//!
//! Navigation never fails; these cover parsing identifiers that arrive from
//! the outside (CLI flags, environment) and the device board's local controls.

use thiserror::Error;

/// Failure to parse an identifier into a domain enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown system type '{0}' (expected 'shared-grid' or 'private')")]
    UnknownSystemType(String),

    #[error("unknown tab '{0}'")]
    UnknownTab(String),
}

/// Rejected device control request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    #[error("no device with id '{0}'")]
    UnknownDevice(String),

    #[error("device '{0}' is managed automatically")]
    NotControllable(String),

    #[error("device '{0}' is switched off")]
    PoweredOff(String),

    #[error("device '{id}' has no {control} control")]
    UnsupportedControl { id: String, control: &'static str },
}
