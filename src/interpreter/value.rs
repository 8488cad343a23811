/// Core value representation.
///
/// Declares the `Value` enum with all runtime types, truthiness, structural
/// equality and the canonical string rendering.
pub mod core;

/// Shared mutable list storage.
///
/// Declares the list handle type. All list values are handles into shared
/// list bodies; mutations through one handle are visible through every alias.
pub mod list;
