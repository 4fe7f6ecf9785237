pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod planner;
pub mod ui;

pub use domain::{BumpMode, BumpTarget, Version, VersionCatalog};
pub use error::{Result, YieldError};
pub use planner::{BumpRequest, TagYielder};
