//! Shared test utilities

#![allow(dead_code)]

mod action;
mod registry;

pub use action::*;
pub use registry::*;
