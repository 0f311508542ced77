//! Integration tests for console removal: fixture sources, files on disk
//! and configuration-driven runs.

mod console_removal;
mod files;
