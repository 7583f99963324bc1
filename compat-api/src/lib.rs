/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Compatibility bridge between the legacy conferencing REST API and the
//! roomhub room-management protocol.
//!
//! The HTTP layer (out of scope here) parses the legacy query string into
//! the typed requests in [`requests`], calls [`create`] or [`join`] to
//! obtain a roomhub request, and runs the [`defaults`] passes before
//! handing the result to the room backend. Everything in this crate is
//! synchronous, per-request data transformation with no state of its own.

pub mod create;
pub mod defaults;
pub mod error;
pub mod join;
pub mod keys;
pub mod meeting_id;
pub mod requests;
pub mod responses;

pub use create::convert_create_request;
pub use error::ConvertError;
pub use join::convert_join_request;
