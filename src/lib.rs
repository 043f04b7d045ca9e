//! Public library API for schema-less inspection of FlatBuffers-style binary tables.

/// Header parsing, heuristic table walking, string scanning, and report assembly.
pub mod flat;
