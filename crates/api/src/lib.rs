//! HTTP surface: server bootstrap, routing, and view rendering.

pub mod app;
