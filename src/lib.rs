//! # Heuristic Connect Four
//!
//! Connect Four against an AI that averages a threat-counting heuristic over
//! every line of play a few moves deep. Features a terminal UI built with
//! Ratatui and a plain text mode.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win detection, player, state machine
//! - [`ai`] — Heuristic, lookahead search, column selection, agents
//! - [`arena`] — Agent-vs-agent matches and statistics
//! - [`ui`] — Terminal UI and line-based game loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`logging`] — Logger setup for the binaries

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
