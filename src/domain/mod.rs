//! Domain layer containing decision logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (orientation, optimism, errors)
//! - `analysis` - Pure domain services evaluating decision criteria

pub mod analysis;
pub mod foundation;
