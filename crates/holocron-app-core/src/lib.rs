// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Holocron (storage port, prefs, favorites).
//! Keeps front ends thin and framework-agnostic.

pub mod config;
pub mod config_port;
pub mod favorites;
pub mod prefs;
