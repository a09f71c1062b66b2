//! Interactive CLI chat experience for Confab.
//!
//! This module implements the chat loop: async line input, a pending
//! spinner while the backend is thinking, slash commands, and transcript
//! display. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;

pub use loop_runner::run_chat_loop;
