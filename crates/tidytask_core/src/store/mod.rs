//! In-memory task store.
//!
//! # Responsibility
//! - Own the ordered category and task sequences.
//! - Provide the CRUD and query surface consumed by the service layer.
//!
//! # Invariants
//! - The reserved "All" category always exists and is never deleted.
//! - Task creation order is preserved; queries never reorder.
//! - Expected failures (duplicate name, out-of-range index, protected
//!   category) are signaled by `bool` returns, not errors.

pub mod task_store;
