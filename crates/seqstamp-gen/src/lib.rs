//! seqstamp Generator - Minting unique timestamps inside one process
//!
//! This crate provides:
//! - Discriminator discovery (hardware address, random fallback)
//! - Counter seeding from the OS random source
//! - `Generator`: atomic sequence counter + fixed discriminator
//! - A run-once process-global generator and free functions over it
//!
//! Uniqueness holds within a generator. Two processes on one host that both
//! use the hardware address share a discriminator and only differ by their
//! random counter seeds; use `DiscriminatorSource::Random` when that matters.

pub mod config;
pub mod entropy;
pub mod generator;
pub mod global;

pub use config::*;
pub use entropy::*;
pub use generator::*;
pub use global::*;

pub use seqstamp_core::{
    Discriminator, SeqstampError, SeqstampResult, UniqueTimestamp, ENCODED_LEN,
};
