// Library target exists for the integration tests under tests/.
// The binary entry point is main.rs; this file re-declares the module tree so
// the test harness can import types via `tenfoot::menu::*` / `tenfoot::input::*`.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by integration tests
pub mod config;
pub mod input;
pub mod menu;

// Private: required transitively by the application modules
mod app;
mod event;
mod ui;
