#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod logging;
pub mod model;
pub mod submit;
pub mod tui;
pub mod wizard;
