//! Edge case and property tests for baa-lex.
