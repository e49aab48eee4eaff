//! HTTP front of the hook service: `POST /api/generate-hooks`.

pub mod server;

pub use server::{router, HookServer};
