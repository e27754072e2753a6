//! Application core: pure domain orchestration, zero I/O.
//!
//! This module wires the scoring engine to the outside world: it turns
//! button levels into commands, commands into engine calls, and engine
//! results into display screens and debug events.  All interaction with
//! hardware happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
