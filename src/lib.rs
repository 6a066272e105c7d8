//! Escape the Qubits (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, integration
//! tests and benchmarks can use `escape_qubits::{core,input,term,types}`.

pub use escape_qubits_core as core;
pub use escape_qubits_input as input;
pub use escape_qubits_term as term;
pub use escape_qubits_types as types;
