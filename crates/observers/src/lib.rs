//! Reusable observers for nmecon solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in `nmecon-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasObjective`], [`HasEstimate`], [`CanStopEarly`],
//!   [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`History`] records the estimate and residual of every iteration
//! - [`GoodEnough`] stops a solver once the residual is below a threshold
//!
//! [`Observer`]: nmecon_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasObjective`]: traits::HasObjective
//! [`HasEstimate`]: traits::HasEstimate
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod good_enough;
mod history;

pub use good_enough::GoodEnough;
pub use history::{History, Record};
