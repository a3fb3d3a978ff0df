//! terrafactor
//!
//! Reads a Terraform state file, lists its resources and generates `moved`
//! blocks for relocating them in configuration.

pub mod cli;
pub mod commands;
pub mod output;
pub mod terraform;

mod error;

pub use error::TerrafactorError;
pub use terraform::{
    FilterError, OutputValue, Resource, ResourceFilter, ResourceInstance, StateDocument,
    address, generate_moved_statement,
};
