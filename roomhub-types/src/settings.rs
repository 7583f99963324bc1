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

//! Server-wide room policy, loaded by the deployment's config layer and
//! passed into the defaulting functions as plain data.

use serde::{Deserialize, Serialize};

/// Deployment-wide caps applied to every room-creation request.
///
/// `None` for a cap means the deployment does not enforce one.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RoomDefaultSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,

    /// Maximum room duration in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_num_breakout_rooms: Option<u32>,
}

/// Deployment-wide upload and notepad policy.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UploadPolicy {
    /// File extensions chat uploads may carry.
    #[serde(default)]
    pub allowed_file_types: Vec<String>,

    /// Maximum chat upload size in megabytes.
    pub max_chat_file_size: u64,

    /// Maximum whiteboard preload size in megabytes.
    pub max_whiteboard_file_size: u64,

    /// Whether this deployment offers the shared notepad at all.
    pub allow_shared_notepad: bool,
}
