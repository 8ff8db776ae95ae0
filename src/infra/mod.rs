pub mod git;
pub mod locator;
