//! Integration tests for the settings system
//!
//! These tests verify override semantics across repeated application and
//! across the external codec.

// Tests for DifficultyAdjust
mod adjust_tests;
