//! `clink-cmd`: a `cmd.exe` stand-in that loads clink into every session.
//!
//! The shim rewrites its own command line so the shell runs the injection
//! payload before whatever the caller asked for, then launches the real
//! shell on the same console.

pub mod args;
pub mod config;
pub mod launch;
pub mod logging;
pub mod shim;
