//! Compensation calculation engine for payroll, leave accrual, and
//! end-of-service settlement.
//!
//! This crate is the computation core of an HR system operating under the
//! Saudi labor regulations: it turns per-employee compensation profiles,
//! attendance records, and variable monthly pay into deterministic,
//! auditable monetary results. The calculators are pure, synchronous
//! functions over immutable inputs; all I/O belongs to the surrounding
//! application, which fetches the inputs, calls in, and persists the
//! returned values.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod money;
