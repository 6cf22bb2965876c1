//! Decision Criteria - Classical decision rules under uncertainty
//!
//! This crate scores the alternatives of a payoff matrix with the Laplace,
//! Maximax, Maximin, Hurwicz and Savage criteria, for profit or cost
//! matrices, when nothing is known about state probabilities.

pub mod adapters;
pub mod config;
pub mod domain;
