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

//! Legacy `create` → roomhub create-room translation.
//!
//! The raw parameter map travels alongside the typed request: the typed
//! struct cannot tell an absent boolean from an explicit `false`, and the
//! `meta_` keys never appear in the typed struct at all.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use roomhub_types::room::{
    BreakoutRoomFeatures, ChatFeatures, CreateRoomRequest, DisplayExternalLinkFeatures,
    ExternalMediaPlayerFeatures, IngressFeatures, LockSettings, RecordingFeatures,
    RoomCreateFeatures, RoomMetadata, SharedNotePadFeatures, SpeechToTextTranslationFeatures,
    WaitingRoomFeatures, WhiteboardFeatures,
};

use crate::defaults;
use crate::error::ConvertError;
use crate::meeting_id::normalize_meeting_id;
use crate::requests::CreateMeetingRequest;

/// Guest-policy value that puts new arrivals in a waiting room.
const GUEST_POLICY_ASK_MODERATOR: &str = "ASK_MODERATOR";

const META_PARAM_PREFIX: &str = "meta_";

/// Legacy-only fields preserved as a JSON blob in the room metadata, so the
/// legacy response paths can echo them back later.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CreateExtraData {
    #[serde(rename = "attendeePW")]
    pub attendee_pw: String,
    #[serde(rename = "moderatorPW")]
    pub moderator_pw: String,
    pub logo: String,
    #[serde(rename = "originalMeetingId")]
    pub original_meeting_id: String,
    pub meta: HashMap<String, String>,
}

/// One recognized token of the legacy `disabledFeatures` list.
///
/// Unknown tokens have no variant and are ignored by the fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledFeature {
    BreakoutRooms,
    Chat,
    ExternalVideos,
    Polls,
    ScreenShare,
    SharedNotes,
    LiveTranscription,
    Presentation,
    VirtualBackgrounds,
    RaiseHand,
}

impl DisabledFeature {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "breakoutRooms" => Some(Self::BreakoutRooms),
            "chat" => Some(Self::Chat),
            "externalVideos" => Some(Self::ExternalVideos),
            "polls" => Some(Self::Polls),
            "screenshare" => Some(Self::ScreenShare),
            "sharedNotes" => Some(Self::SharedNotes),
            "liveTranscription" => Some(Self::LiveTranscription),
            "presentation" => Some(Self::Presentation),
            "virtualBackgrounds" => Some(Self::VirtualBackgrounds),
            "raiseHand" => Some(Self::RaiseHand),
            _ => None,
        }
    }

    /// Flip exactly the one feature this token maps to.
    pub fn apply(self, features: &mut RoomCreateFeatures) {
        match self {
            Self::BreakoutRooms => {
                if let Some(f) = features.breakout_room_features.as_mut() {
                    f.is_allow = false;
                }
            }
            Self::Chat => {
                if let Some(f) = features.chat_features.as_mut() {
                    f.allow_chat = false;
                }
            }
            Self::ExternalVideos => {
                if let Some(f) = features.external_media_player_features.as_mut() {
                    f.allowed_external_media_player = false;
                }
            }
            Self::Polls => features.allow_polls = false,
            Self::ScreenShare => features.allow_screen_share = false,
            Self::SharedNotes => {
                if let Some(f) = features.shared_note_pad_features.as_mut() {
                    f.allowed_shared_note_pad = false;
                }
            }
            Self::LiveTranscription => {
                if let Some(f) = features.speech_to_text_translation_features.as_mut() {
                    f.is_allow = false;
                }
            }
            Self::Presentation => {
                if let Some(f) = features.whiteboard_features.as_mut() {
                    f.allowed_whiteboard = false;
                }
            }
            Self::VirtualBackgrounds => features.allow_virtual_bg = Some(false),
            Self::RaiseHand => features.allow_raise_hand = Some(false),
        }
    }
}

/// Translate a legacy `create` call into a roomhub create-room request.
///
/// Fails only when the extra-data blob cannot be serialized; there is no
/// partial result.
pub fn convert_create_request(
    r: &CreateMeetingRequest,
    raw_queries: &HashMap<String, String>,
) -> Result<CreateRoomRequest, ConvertError> {
    let mut req = CreateRoomRequest {
        room_id: normalize_meeting_id(&r.meeting_id),
        empty_timeout: None,
        max_participants: None,
        metadata: RoomMetadata {
            room_title: r.name.clone(),
            room_features: baseline_features(r),
            default_lock_settings: Some(LockSettings::default()),
            ..Default::default()
        },
    };

    if r.max_participants > 0 {
        req.max_participants = Some(r.max_participants);
    }
    if r.duration > 0 {
        req.metadata.room_features.room_duration = Some(r.duration);
    }
    if !r.logout_url.is_empty() {
        req.metadata.logout_url = Some(r.logout_url.clone());
    }
    if !r.welcome.is_empty() {
        req.metadata.welcome_message = Some(r.welcome.clone());
    }

    if r.guest_policy == GUEST_POLICY_ASK_MODERATOR {
        req.metadata.room_features.waiting_room_features = Some(WaitingRoomFeatures {
            is_active: true,
            ..Default::default()
        });
    }

    if !r.disabled_features.is_empty() {
        apply_disabled_features(&mut req.metadata.room_features, &r.disabled_features);
    }

    let whiteboard_enabled = req
        .metadata
        .room_features
        .whiteboard_features
        .as_ref()
        .is_some_and(|f| f.allowed_whiteboard);
    if !r.pre_uploaded_presentation.is_empty() && whiteboard_enabled {
        if let Some(f) = req.metadata.room_features.whiteboard_features.as_mut() {
            f.preload_file = Some(r.pre_uploaded_presentation.clone());
        }
    }

    // Only honor the typed flag when the parameter was actually sent:
    // `meetingKeepEvents=false` must win over the baseline, but an absent
    // parameter must not.
    if raw_queries
        .get("meetingKeepEvents")
        .is_some_and(|v| !v.is_empty())
    {
        req.metadata.room_features.enable_analytics = r.meeting_keep_events;
    }

    // Hiding the user list is a feature switch on the room, not a lock.
    if r.lock_settings_hide_user_list {
        req.metadata.room_features.allow_view_other_users_list = false;
    }

    // Deployment lock defaults first, then request locks on top. Legacy
    // requests can only add locks, never release a default one.
    defaults::apply_default_lock_settings(&mut req);
    if let Some(locks) = req.metadata.default_lock_settings.as_mut() {
        apply_lock_settings(locks, r);
    }

    req.metadata.extra_data = Some(serialize_extra_data(r, raw_queries)?);

    Ok(req)
}

/// Feature set every legacy-created room starts from. The disabled-feature
/// fan-out and the defaulting passes narrow it down afterwards.
fn baseline_features(r: &CreateMeetingRequest) -> RoomCreateFeatures {
    RoomCreateFeatures {
        allow_webcams: true,
        admin_only_webcams: r.webcams_only_for_moderator,
        enable_analytics: true,
        mute_on_start: r.mute_on_start,
        allow_rtmp: true,
        allow_polls: true,
        allow_screen_share: true,
        allow_view_other_users_list: true,
        allow_raise_hand: Some(true),
        allow_virtual_bg: Some(true),
        auto_gen_user_id: Some(true),
        recording_features: Some(RecordingFeatures {
            is_allow: r.record,
            is_allow_cloud: r.record,
            is_allow_local: false,
            enable_auto_cloud_recording: r.auto_start_recording,
        }),
        chat_features: Some(ChatFeatures {
            allow_chat: true,
            allow_file_upload: true,
            ..Default::default()
        }),
        shared_note_pad_features: Some(SharedNotePadFeatures {
            allowed_shared_note_pad: true,
            ..Default::default()
        }),
        whiteboard_features: Some(WhiteboardFeatures {
            allowed_whiteboard: true,
            ..Default::default()
        }),
        external_media_player_features: Some(ExternalMediaPlayerFeatures {
            allowed_external_media_player: true,
            ..Default::default()
        }),
        breakout_room_features: Some(BreakoutRoomFeatures {
            is_allow: true,
            ..Default::default()
        }),
        display_external_link_features: Some(DisplayExternalLinkFeatures {
            is_allow: true,
            ..Default::default()
        }),
        ingress_features: Some(IngressFeatures { is_allow: true }),
        speech_to_text_translation_features: Some(SpeechToTextTranslationFeatures {
            is_allow: true,
            is_allow_translation: true,
        }),
        ..Default::default()
    }
}

fn apply_disabled_features(features: &mut RoomCreateFeatures, disabled: &str) {
    for token in disabled.split(',') {
        if let Some(feature) = DisabledFeature::parse(token.trim()) {
            feature.apply(features);
        }
    }
}

fn apply_lock_settings(locks: &mut LockSettings, r: &CreateMeetingRequest) {
    if r.lock_settings_disable_cam {
        locks.lock_webcam = Some(true);
    }
    if r.lock_settings_disable_mic {
        locks.lock_microphone = Some(true);
    }
    if r.lock_settings_disable_public_chat {
        locks.lock_chat_send_message = Some(true);
    }
    if r.lock_settings_disable_private_chat {
        locks.lock_private_chat = Some(true);
    }
    if r.lock_settings_disable_notes {
        locks.lock_shared_notepad = Some(true);
    }
}

fn serialize_extra_data(
    r: &CreateMeetingRequest,
    raw_queries: &HashMap<String, String>,
) -> Result<String, ConvertError> {
    let mut meta = HashMap::new();
    for (key, value) in raw_queries {
        if let Some(name) = key.strip_prefix(META_PARAM_PREFIX) {
            // Malformed percent-encoding keeps the raw literal.
            let decoded = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.clone());
            meta.insert(name.to_string(), decoded);
        }
    }

    let extra_data = CreateExtraData {
        attendee_pw: r.attendee_pw.clone(),
        moderator_pw: r.moderator_pw.clone(),
        logo: r.logo.clone(),
        original_meeting_id: r.meeting_id.clone(),
        meta,
    };

    serde_json::to_string(&extra_data).map_err(|err| {
        tracing::error!("extra data serialization failed: {err}");
        ConvertError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_recognized_token_parses() {
        for token in [
            "breakoutRooms",
            "chat",
            "externalVideos",
            "polls",
            "screenshare",
            "sharedNotes",
            "liveTranscription",
            "presentation",
            "virtualBackgrounds",
            "raiseHand",
        ] {
            assert!(DisabledFeature::parse(token).is_some(), "token: {token}");
        }
    }

    #[test]
    fn unknown_tokens_do_not_parse() {
        assert_eq!(DisabledFeature::parse("webcams"), None);
        assert_eq!(DisabledFeature::parse("Chat"), None);
        assert_eq!(DisabledFeature::parse(""), None);
    }
}
