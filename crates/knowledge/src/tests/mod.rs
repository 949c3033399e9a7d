//! End-to-end tests for the retrieval core.

mod respond;
mod training;
