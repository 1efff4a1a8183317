//! Generate and check the sample EPUB test fixture.

pub mod cli;
pub mod error;
pub mod fixture;
