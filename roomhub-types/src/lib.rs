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

//! Shared protocol types for the roomhub room-management backend.
//!
//! This crate defines the request contract between the room backend and its
//! callers (the legacy compatibility bridge, integration tests). It is
//! intentionally framework-agnostic — no HTTP types, no database types.

pub mod room;
pub mod settings;
pub mod token;

pub use room::{CreateRoomRequest, LockSettings, RoomCreateFeatures, RoomMetadata};
pub use settings::{RoomDefaultSettings, UploadPolicy};
pub use token::{GenerateTokenRequest, UserInfo, UserMetadata};
