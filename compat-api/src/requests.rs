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

//! Typed forms of the legacy query-parameter requests.
//!
//! Every field is serde-renamed to the exact legacy parameter name and
//! defaulted, so a partially-populated query string deserializes cleanly.
//! The typed structs cannot distinguish "absent" from "zero value" — that
//! is what the raw parameter map passed alongside them is for.

use serde::{Deserialize, Serialize};

/// Legacy `create` call parameters.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CreateMeetingRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default, rename = "meetingID")]
    pub meeting_id: String,

    /// Deprecated in the legacy API; preserved in the extra-data blob only.
    #[serde(default, rename = "attendeePW")]
    pub attendee_pw: String,

    /// Deprecated in the legacy API; preserved in the extra-data blob only.
    #[serde(default, rename = "moderatorPW")]
    pub moderator_pw: String,

    #[serde(default)]
    pub welcome: String,

    #[serde(default, rename = "maxParticipants")]
    pub max_participants: u32,

    #[serde(default, rename = "logoutURL")]
    pub logout_url: String,

    /// Meeting duration in minutes. Zero means unlimited.
    #[serde(default)]
    pub duration: u64,

    #[serde(default)]
    pub record: bool,

    #[serde(default, rename = "autoStartRecording")]
    pub auto_start_recording: bool,

    #[serde(default, rename = "webcamsOnlyForModerator")]
    pub webcams_only_for_moderator: bool,

    #[serde(default, rename = "muteOnStart")]
    pub mute_on_start: bool,

    /// `ALWAYS_ACCEPT` or `ASK_MODERATOR`.
    #[serde(default, rename = "guestPolicy")]
    pub guest_policy: String,

    #[serde(default, rename = "meetingKeepEvents")]
    pub meeting_keep_events: bool,

    #[serde(default)]
    pub logo: String,

    /// Comma-separated tokens, e.g.
    /// `breakoutRooms,chat,externalVideos,polls,screenshare,sharedNotes,
    /// liveTranscription,presentation,virtualBackgrounds,raiseHand`.
    #[serde(default, rename = "disabledFeatures")]
    pub disabled_features: String,

    #[serde(default, rename = "preUploadedPresentation")]
    pub pre_uploaded_presentation: String,

    #[serde(default, rename = "lockSettingsDisableCam")]
    pub lock_settings_disable_cam: bool,

    #[serde(default, rename = "lockSettingsDisableMic")]
    pub lock_settings_disable_mic: bool,

    #[serde(default, rename = "lockSettingsDisablePrivateChat")]
    pub lock_settings_disable_private_chat: bool,

    #[serde(default, rename = "lockSettingsDisablePublicChat")]
    pub lock_settings_disable_public_chat: bool,

    #[serde(default, rename = "lockSettingsDisableNotes")]
    pub lock_settings_disable_notes: bool,

    #[serde(default, rename = "lockSettingsHideUserList")]
    pub lock_settings_hide_user_list: bool,

    /// Accepted for wire compatibility; echoed back in responses only.
    #[serde(default, rename = "voiceBridge")]
    pub voice_bridge: String,

    /// Accepted for wire compatibility; echoed back in responses only.
    #[serde(default, rename = "dialNumber")]
    pub dial_number: String,
}

/// Legacy `join` call parameters.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct JoinMeetingRequest {
    #[serde(default, rename = "fullName")]
    pub full_name: String,

    #[serde(default, rename = "meetingID")]
    pub meeting_id: String,

    /// Deprecated in the legacy API.
    #[serde(default)]
    pub password: String,

    /// `MODERATOR` or `VIEWER`.
    #[serde(default)]
    pub role: String,

    #[serde(default, rename = "userID")]
    pub user_id: String,

    #[serde(default, rename = "avatarURL")]
    pub avatar_url: String,

    #[serde(default)]
    pub redirect: String,
}
