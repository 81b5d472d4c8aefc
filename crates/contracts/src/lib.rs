//! Types shared between the console frontend and its host.
//!
//! Everything here is target independent: the same crate compiles for the
//! WASM console and for the native host, and all of the pure logic behind the
//! table, dialogs, error channel and sign-in flow is tested here.

pub mod domain;
pub mod shared;
pub mod system;
