//! # ML Tateti
//!
//! A tic-tac-toe ("ta-te-ti") reinforcement-learning environment: board
//! state, legal-move validation, win detection, and reward signaling for an
//! external learning agent, with a console harness for playing an agent
//! against a human and a headless rollout driver.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, marks, state machine
//! - [`env`] — Gym-style environment: observations, rewards, random opponent
//! - [`ai`] — Agent trait and the built-in random policy
//! - [`training`] — Episode rollouts, experience records, metrics collection
//! - [`ui`] — Console rendering, keypad input, interactive play session
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod env;
pub mod error;
pub mod game;
pub mod training;
pub mod ui;
