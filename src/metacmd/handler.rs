//! The capability contract between metacommand runners and the session.
//!
//! The session type composes the narrow capability traits below and adds
//! the statement-buffer and environment surface through [`Handler`], the
//! single contract runners dispatch against. All I/O, connection, and
//! transaction work lives behind these seams; runners only sequence calls.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use crate::drivers::Connection;
use crate::env::Decoder;

use super::error;
use super::option::ExecOption;

/// Connection lifecycle control.
pub trait ConnectionControl {
    /// The current connection target (DSN or URL), if any.
    fn url(&self) -> Option<&str>;
    /// Whether a live connection is currently open.
    fn connected(&self) -> bool;
    /// The live connection handle, if one is open.
    fn db(&mut self) -> Option<&mut dyn Connection>;
    /// Open a connection described by `params`.
    fn open(&mut self, params: &[String]) -> Result<()>;
    /// Close the current connection.
    fn close(&mut self) -> Result<()>;
    /// Change the password for `user`, returning the affected user name.
    fn change_password(&mut self, user: &str) -> Result<String>;
}

/// Transaction control.
pub trait TransactionControl {
    /// Begin a transaction.
    fn begin(&mut self) -> Result<()>;
    /// Commit the current transaction.
    fn commit(&mut self) -> Result<()>;
    /// Roll back the current transaction.
    fn rollback(&mut self) -> Result<()>;
}

/// Input/output stream and presentation control.
pub trait OutputControl {
    /// The interactive input stream.
    fn input(&mut self) -> &mut dyn BufRead;
    /// The current output writer.
    fn output(&mut self) -> &mut dyn Write;
    /// Assign the output writer; `None` restores standard output.
    fn set_output(&mut self, out: Option<Box<dyn Write>>);
    /// Whether timing mode is enabled.
    fn timing(&self) -> bool;
    /// Enable or disable timing mode.
    fn set_timing(&mut self, enabled: bool);
    /// Write `stmt` to `out` with syntax highlighting.
    fn highlight(&self, out: &mut dyn Write, stmt: &str) -> Result<()>;
}

/// Metadata introspection.
pub trait MetadataAccess {
    /// Write a description of the database objects matching `pattern` to
    /// the handler's output.
    fn describe(&mut self, pattern: &str, verbose: bool) -> Result<()>;
}

/// The full capability set a metacommand runner dispatches against.
pub trait Handler:
    ConnectionControl + TransactionControl + OutputControl + MetadataAccess
{
    /// The current user identity.
    fn user(&self) -> &str;
    /// The last executed statement, interpolated form.
    fn last(&self) -> Option<&str>;
    /// The last executed statement, raw (non-interpolated) form.
    fn last_raw(&self) -> Option<&str>;
    /// The pending statement buffer.
    fn buf(&self) -> &str;
    /// Reset the last statement and the pending buffer to `buf`.
    fn reset(&mut self, buf: &str);
    /// Read a variable of the named type, prompting with `prompt` when
    /// unset.
    fn read_var(&mut self, name: &str, prompt: &str) -> Result<String>;
    /// Include and replay the file at `path`.
    fn include(&mut self, path: &Path, relative: bool) -> Result<()>;
    /// Write a message to the handler's standard output.
    fn print(&mut self, message: &str);
    /// The decoder used to interpolate this handler's parameters.
    fn decoder(&self) -> &dyn Decoder;
}

/// Maps a handler to the execution outcome of one metacommand.
///
/// A runner's error aborts only the current command and is surfaced to the
/// loop; `quit` on the returned [`ExecOption`] terminates the loop after
/// the current command finishes, independent of error state.
pub trait Runner {
    /// Run the metacommand against `handler`.
    fn run(&self, handler: &mut dyn Handler) -> error::Result<ExecOption>;
}

impl<F> Runner for F
where
    F: Fn(&mut dyn Handler) -> error::Result<ExecOption>,
{
    fn run(&self, handler: &mut dyn Handler) -> error::Result<ExecOption> {
        self(handler)
    }
}
