//! HTTP handlers

pub mod appointment;
pub mod auth;
pub mod health;
pub mod patient;
pub mod task;
