//! Shared building blocks for the `bialert` manager: the error taxonomy every
//! component raises, and the layered settings it starts from.

pub mod config;
pub mod error;

pub use error::{
    ErrorKind, InvalidConfigError, ManagerError, ManagerResult, TestFailureError,
};
