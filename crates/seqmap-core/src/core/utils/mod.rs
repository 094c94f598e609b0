//! Shared lookup tables and small helpers.

pub mod codes;
