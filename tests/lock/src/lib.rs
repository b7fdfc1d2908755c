//! Shared fixtures for the cross-crate lock tests: small weighted worlds and
//! a reference search loop that drives any frontier variant over them.
//!
//! The search loop lives here, not in `fringe-frontier`, because the frontier
//! crate only supplies primitives; this is the "driver" side of that contract.

#![forbid(unsafe_code)]

pub mod world;
