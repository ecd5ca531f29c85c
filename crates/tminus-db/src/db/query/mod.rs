//! Event queries, written once per backend because the column types differ.

pub mod postgres;
pub mod sqlite;
