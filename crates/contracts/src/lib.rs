//! Shared contracts between the admin frontend and the catalog REST API.
//!
//! Everything here is plain data: aggregate shapes mirrored from the API's
//! JSON responses, form DTOs, and the pagination/dropdown envelopes. No I/O.

pub mod domain;
pub mod shared;
