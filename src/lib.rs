//! Terminal snake built around a run-length body model.
//!
//! The snake stores one run per straight stretch instead of one entry per
//! cell, so memory follows the number of turns. [`snake`] owns that model,
//! [`tiles`] derives per-cell drawing tiles from it, [`controller`] advances
//! one tick at a time, and [`game`] layers food, score, and speed on top.
//! The remaining modules are the terminal shell around the core.

pub mod config;
pub mod controller;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod tiles;
pub mod ui;
