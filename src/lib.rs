//! Vitals - Standalone HTTP Liveness Probe Service
//!
//! A minimal web service exposing a single liveness endpoint, used by
//! infrastructure probes and browser frontends to verify the backend is up.

pub mod config;
pub mod cors;
pub mod http;
pub mod middleware;
pub mod routes;
