//! # Context Guardian
//!
//! A Claude Code hook that watches how full the context window is.
//!
//! ## Overview
//!
//! On each invocation the hook reads the JSON payload Claude Code writes to
//! stdin, follows `transcript_path` to the session transcript (JSONL), takes
//! the most recent `message.usage` record and sums its input, cache-creation
//! and cache-read token counters. Once that sum reaches the configured share
//! of the context window, a warning is written to stderr and the process exits
//! with status 2 so Claude Code hands the message to the agent.
//!
//! Every failure (bad input, unreadable transcript, no usage data) ends in a
//! silent exit 0; the hook never blocks its host.

/// Context window size and threshold arithmetic
pub mod budget;

/// Command-line arguments and environment configuration
pub mod cli;

/// Warning text rendering
pub mod display;

/// Data models for hook input and transcript lines
pub mod models;

/// The read, scan, sum and compare pipeline
pub mod monitor;

/// Streaming scan of JSONL transcripts
pub mod transcript;
