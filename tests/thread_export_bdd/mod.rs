//! Support modules for the thread export BDD tests.

pub(crate) mod harness;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use harness::{RowCount, deleted_branch_thread, nested_thread};
pub(crate) use state::{ExportState, ensure_runtime_and_server};
