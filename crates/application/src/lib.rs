// Nacos Auth - Application Layer
// Services that orchestrate the domain:
// - auth: reference resolution, Secret extraction, client parameter composition

pub mod auth;

pub use auth::*;
