/// General utilities for safe numeric conversion.
///
/// This module provides reusable helpers for converting between `i64` and
/// `f64` without silent data loss. They are used wherever the evaluator mixes
/// integers and floats: promotion in arithmetic, comparisons across the two
/// numeric variants, and subscript indices written as floats.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
/// - Provide general utility functions used in multiple modules.
pub mod num;
