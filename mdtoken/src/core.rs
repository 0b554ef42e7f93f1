// src/core.rs
pub mod batch;
pub mod builder;
pub mod ignore;
pub mod line;
pub mod locator;
pub mod planner;
pub mod rewriter;
pub mod values;
pub mod vocabulary;

#[cfg(test)]
mod test_utils;
