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

//! Access-token generation request types.
//!
//! The backend turns one of these into a signed room access token; this
//! crate only defines the shape.

use serde::{Deserialize, Serialize};

use crate::room::LockSettings;

/// Request to issue an access token for one participant in one room.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GenerateTokenRequest {
    pub room_id: String,
    pub user_info: UserInfo,
}

/// Identity of the participant the token is for.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UserInfo {
    /// Display name shown in the room UI.
    pub name: String,
    pub is_admin: bool,
    pub user_metadata: UserMetadata,
}

/// Participant metadata carried inside the token.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UserMetadata {
    /// Per-user lock overrides. An empty block means "room defaults apply".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_settings: Option<LockSettings>,

    /// Identifier of this user in the caller's own system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ex_user_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}
