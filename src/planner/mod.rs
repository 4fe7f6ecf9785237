//! Next-version computation from a bump request and catalog state

pub mod tag_yielder;

pub use tag_yielder::{BumpRequest, TagYielder};
