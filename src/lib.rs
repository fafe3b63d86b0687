//! Star Wars catalog and favorites REST API.
//!
//! This crate exposes read access to two catalog entities (characters and
//! vehicles) and a many-to-many favorites relationship between users and
//! those entities. Endpoints map one-to-one to queries and mutations against
//! the relational store; the only logic beyond that is existence checks and
//! duplicate prevention on insert.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
