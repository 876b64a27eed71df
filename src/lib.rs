//! # sqlsh
//!
//! Metacommand parsing and dispatch core for an interactive, multi-backend
//! SQL shell.
//!
//! A metacommand is a backslash-prefixed administrative command, distinct
//! from a SQL statement. After the user types one, this crate consumes the
//! remaining raw argument tokens and resolves them into named parameters
//! (either one free-form trailing string or an explicit `(key=value ...)`
//! option list) and an [`ExecOption`](metacmd::ExecOption) telling the
//! dispatch loop how the pending statement buffer should be run: not at
//! all, plainly, piped to a destination, captured into variables,
//! re-executed row by row, rendered as a pivot table, or repeated on an
//! interval.
//!
//! This crate never executes SQL, never touches connections or
//! transactions, and never implements quoting or variable substitution;
//! runners dispatch against the [`Handler`](metacmd::Handler) capability
//! surface for all of that.
//!
//! ## Example
//!
//! ```rust
//! use sqlsh::prelude::*;
//!
//! let mut opt = ExecOption::default();
//! let tokens = vec!["(border=2".to_string(), "format=csv)".to_string()];
//! opt.parse_params(&tokens, "format").unwrap();
//!
//! assert_eq!(opt.params["border"], "2");
//! assert_eq!(opt.params["format"], "csv");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod drivers;
pub mod env;
pub mod metacmd;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::drivers::{register_builtin, Connection, Driver, DriverRegistry};
    pub use crate::env::{Decoder, NopDecoder, Vars};
    pub use crate::metacmd::{
        ConnectionControl, ExecOption, ExecType, Handler, MetaError, MetadataAccess,
        OutputControl, ParamCursor, Runner, TransactionControl,
    };
}
