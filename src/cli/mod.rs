//! Command-line workflow

pub mod orchestration;

pub use orchestration::{run_yield_workflow, WorkflowResult, YieldWorkflowArgs};
