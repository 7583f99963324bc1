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

//! Room-creation request types.
//!
//! Optional fields use `Option<T>` throughout: `None` means "the caller did
//! not specify this", which the defaulting layer treats differently from an
//! explicit zero or `false`. Nothing here may collapse that distinction.

use serde::{Deserialize, Serialize};

/// Request to create a room on the backend.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CreateRoomRequest {
    pub room_id: String,

    /// Seconds an empty room stays open before the backend closes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_timeout: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,

    pub metadata: RoomMetadata,
}

/// Room metadata attached to a creation request.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RoomMetadata {
    pub room_title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logout_url: Option<String>,

    /// Unix timestamp in seconds, stamped by the defaulting layer.
    pub started_at: u64,

    /// JSON side-channel for caller-specific data the backend stores but
    /// never interprets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<String>,

    pub room_features: RoomCreateFeatures,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_lock_settings: Option<LockSettings>,
}

/// Per-capability feature switches for a new room.
///
/// Flat `bool` fields are plain on/off switches. `Option<bool>` fields and
/// the optional sub-blocks are tri-state: absent means "use the deployment
/// default", which the defaulting layer fills in.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RoomCreateFeatures {
    pub allow_webcams: bool,
    pub admin_only_webcams: bool,
    pub enable_analytics: bool,
    pub mute_on_start: bool,
    pub allow_rtmp: bool,
    pub allow_polls: bool,
    pub allow_screen_share: bool,
    pub allow_view_other_users_list: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_raise_hand: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_virtual_bg: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_gen_user_id: Option<bool>,

    /// Room duration in minutes. Absent means unlimited (subject to the
    /// deployment cap).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_duration: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_features: Option<RecordingFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_features: Option<ChatFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_note_pad_features: Option<SharedNotePadFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whiteboard_features: Option<WhiteboardFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_media_player_features: Option<ExternalMediaPlayerFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiting_room_features: Option<WaitingRoomFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakout_room_features: Option<BreakoutRoomFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_external_link_features: Option<DisplayExternalLinkFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_features: Option<IngressFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_to_text_translation_features: Option<SpeechToTextTranslationFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_to_end_encryption_features: Option<EndToEndEncryptionFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polls_features: Option<PollsFeatures>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RecordingFeatures {
    pub is_allow: bool,
    pub is_allow_cloud: bool,
    pub is_allow_local: bool,
    pub enable_auto_cloud_recording: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ChatFeatures {
    pub allow_chat: bool,
    pub allow_file_upload: bool,
    /// File extensions accepted for upload. Filled from deployment policy
    /// when the caller leaves it empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_file_types: Vec<String>,
    /// Maximum upload size in megabytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SharedNotePadFeatures {
    pub allowed_shared_note_pad: bool,
    pub is_active: bool,
    pub visible: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct WhiteboardFeatures {
    pub allowed_whiteboard: bool,
    pub visible: bool,
    /// URL of a presentation to load into the whiteboard on room start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preload_file: Option<String>,
    pub whiteboard_file_id: String,
    pub file_name: String,
    pub total_pages: u32,
    /// Maximum preload file size in megabytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_allowed_file_size: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ExternalMediaPlayerFeatures {
    pub allowed_external_media_player: bool,
    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct WaitingRoomFeatures {
    pub is_active: bool,
    pub waiting_room_msg: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct BreakoutRoomFeatures {
    pub is_allow: bool,
    pub is_active: bool,
    /// Number of breakout rooms a moderator may open. Zero means "not
    /// chosen yet"; the defaulting layer resolves it.
    pub allowed_number_rooms: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DisplayExternalLinkFeatures {
    pub is_allow: bool,
    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct IngressFeatures {
    pub is_allow: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SpeechToTextTranslationFeatures {
    pub is_allow: bool,
    pub is_allow_translation: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct EndToEndEncryptionFeatures {
    pub is_enabled: bool,
    /// When set, the caller will distribute its own key out of band and the
    /// backend must not generate one.
    pub enabled_self_insert_encryption_key: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PollsFeatures {
    pub is_allow: bool,
}

/// Per-capability restrictions applied to non-moderator participants.
///
/// Every field is tri-state: `None` means the caller expressed no opinion
/// and the deployment default applies; `Some(false)` is an explicit unlock
/// that defaulting must never overwrite.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct LockSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_microphone: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_webcam: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_screen_sharing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_chat_send_message: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_private_chat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_whiteboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_shared_notepad: Option<bool>,
}
