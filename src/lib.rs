//! Earnings Meter Engine
//!
//! This crate provides the calculation core for a live earnings meter:
//! given pay-rate settings and a point in time, it computes how much money
//! has been earned so far today (or accumulated since a chosen date).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
