//! Tests for the clipboard domain models.
