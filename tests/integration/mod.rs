// Integration tests for Mailroom
// This module organizes all integration tests

pub mod api_errors;
