//! Skincare Advisor - skin profiling, ingredient checks and routine building
//!
//! This crate classifies quiz answers into a skin profile, flags conflicting
//! active ingredients, recommends similar or suitable products and keeps a
//! user's morning and evening routines. It follows a hexagonal layout:
//! pure `domain` logic, `ports` for the outside world, `adapters` that
//! implement them and an `application` layer that wires the two together.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
