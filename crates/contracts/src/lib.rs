//! Bindings for the contracts the limit order client talks to.
//!
//! The ABIs are fixed by the deployed contracts, so they are spelled out
//! inline instead of being generated from build artifacts.
pub mod alloy;
