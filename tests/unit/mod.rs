// Unit tests for Mailroom
// This module organizes all unit tests

pub mod config;
