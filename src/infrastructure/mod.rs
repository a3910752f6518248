//! Filesystem conventions of the Zellij sandbox.

pub mod paths;

pub use paths::{data_dir, expand_tilde};
