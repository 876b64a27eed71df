//! Metacommand parsing and dispatch for the shell.
//!
//! A metacommand's raw argument tokens are read through a [`ParamCursor`]
//! and classified by [`ExecOption::parse_params`] into either one free-form
//! default value or an explicit `(key=value ...)` option list. Runners
//! dispatch against the [`Handler`] capability surface and resolve to an
//! [`ExecOption`] describing how the pending statement buffer should run.
//!
//! Everything here is single-threaded and synchronous: no I/O, no locks,
//! no state carried across invocations. Each metacommand parse produces a
//! fresh [`ExecOption`]; repetition for watch mode is driven by the loop,
//! not by this module.

pub mod error;
pub mod handler;
pub mod option;
pub mod params;

pub use error::MetaError;
pub use handler::{
    ConnectionControl, Handler, MetadataAccess, OutputControl, Runner, TransactionControl,
};
pub use option::{ExecOption, ExecType};
pub use params::ParamCursor;
