//! Bike station finder server.
//!
//! A chatbot backend that answers: "Where are the nearest bike-share
//! stations to where I'm standing?"

pub mod config;
pub mod domain;
pub mod nearest;
pub mod reply;
pub mod stations;
pub mod web;
