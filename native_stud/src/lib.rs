//! Native five-card-stud table engine.
//!
//! The crate is split into the round engine (`game`), card and hand
//! machinery (`poker`), the collaborator seams a running table needs
//! (`session`), a probabilistic bot (`bot`), and the terminal runner
//! (`cli`, `config`, `pretty`).

pub mod bot;
pub mod cli;
pub mod config;
pub mod game;
pub mod poker;
pub mod pretty;
pub mod session;
