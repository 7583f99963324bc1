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

//! Room-request defaulting and server-policy enforcement.
//!
//! Four independent passes, each idempotent for a given input:
//!
//! 1. [`apply_default_room_features`] — fill every unset feature block with
//!    its conservative default and stamp the start time.
//! 2. [`apply_server_policy`] — overlay deployment upload/notepad policy
//!    and derive the end-to-end encryption key when one is needed.
//! 3. [`apply_default_lock_settings`] — default the three lock settings
//!    that ship locked, without touching explicit values.
//! 4. [`clamp_room_quotas`] — lower request values to the deployment caps.
//!
//! All passes only ever fill `None` fields or lower values; an explicit
//! `Some(false)` or in-range value from the caller is never overwritten.

use chrono::Utc;

use roomhub_types::room::{
    BreakoutRoomFeatures, ChatFeatures, CreateRoomRequest, DisplayExternalLinkFeatures,
    EndToEndEncryptionFeatures, ExternalMediaPlayerFeatures, IngressFeatures, LockSettings,
    PollsFeatures, RecordingFeatures, SharedNotePadFeatures, SpeechToTextTranslationFeatures,
    WaitingRoomFeatures, WhiteboardFeatures,
};
use roomhub_types::settings::{RoomDefaultSettings, UploadPolicy};

use crate::keys;

/// Hard ceiling on breakout rooms per meeting, regardless of configuration.
const MAX_BREAKOUT_ROOMS: u32 = 16;

/// Breakout-room count used when a room allows them but never chose one.
const DEFAULT_BREAKOUT_ROOMS: u32 = 6;

/// Whiteboard preload cap used when the configured one is absurd (< 1 MB).
const FALLBACK_WHITEBOARD_FILE_SIZE: u64 = 30;

/// Empty-room timeout applied when the request's value is unset or below
/// the 120-second floor.
const DEFAULT_EMPTY_TIMEOUT_SECS: u32 = 1800;

/// Fill every unset feature block with its conservative default.
///
/// The polls block inherits the top-level `allow_polls` flag so rooms
/// created through the legacy API keep their old polls behavior.
pub fn apply_default_room_features(req: &mut CreateRoomRequest) {
    let rf = &mut req.metadata.room_features;

    if rf.recording_features.is_none() {
        rf.recording_features = Some(RecordingFeatures {
            is_allow: true,
            is_allow_cloud: true,
            is_allow_local: true,
            enable_auto_cloud_recording: false,
        });
    }

    if rf.chat_features.is_none() {
        rf.chat_features = Some(ChatFeatures::default());
    }

    if rf.shared_note_pad_features.is_none() {
        rf.shared_note_pad_features = Some(SharedNotePadFeatures::default());
    }

    if rf.whiteboard_features.is_none() {
        rf.whiteboard_features = Some(WhiteboardFeatures {
            allowed_whiteboard: false,
            visible: false,
            preload_file: None,
            whiteboard_file_id: "default".to_string(),
            file_name: "default".to_string(),
            total_pages: 10,
            max_allowed_file_size: None,
        });
    }

    if rf.external_media_player_features.is_none() {
        rf.external_media_player_features = Some(ExternalMediaPlayerFeatures::default());
    }

    if rf.waiting_room_features.is_none() {
        rf.waiting_room_features = Some(WaitingRoomFeatures::default());
    }

    if rf.breakout_room_features.is_none() {
        rf.breakout_room_features = Some(BreakoutRoomFeatures {
            is_allow: false,
            is_active: false,
            allowed_number_rooms: DEFAULT_BREAKOUT_ROOMS,
        });
    }

    if rf.display_external_link_features.is_none() {
        rf.display_external_link_features = Some(DisplayExternalLinkFeatures::default());
    }

    if rf.ingress_features.is_none() {
        rf.ingress_features = Some(IngressFeatures::default());
    }

    if rf.speech_to_text_translation_features.is_none() {
        rf.speech_to_text_translation_features = Some(SpeechToTextTranslationFeatures::default());
    }

    if rf.end_to_end_encryption_features.is_none() {
        rf.end_to_end_encryption_features = Some(EndToEndEncryptionFeatures::default());
    }

    if rf.polls_features.is_none() {
        rf.polls_features = Some(PollsFeatures {
            is_allow: rf.allow_polls,
        });
    }

    if req.metadata.default_lock_settings.is_none() {
        req.metadata.default_lock_settings = Some(LockSettings::default());
    }

    req.metadata.started_at = Utc::now().timestamp() as u64;
}

/// Overlay deployment policy onto a request whose feature blocks are
/// already filled (run [`apply_default_room_features`] first; blocks still
/// absent here are skipped).
pub fn apply_server_policy(req: &mut CreateRoomRequest, policy: &UploadPolicy) {
    let rf = &mut req.metadata.room_features;

    // Unless the caller opted in, users pick their own IDs.
    if rf.auto_gen_user_id.is_none() {
        rf.auto_gen_user_id = Some(false);
    }

    if let Some(notepad) = rf.shared_note_pad_features.as_mut() {
        if notepad.allowed_shared_note_pad && !policy.allow_shared_notepad {
            notepad.allowed_shared_note_pad = false;
        }
    }

    if let Some(chat) = rf.chat_features.as_mut() {
        if chat.allow_file_upload {
            if chat.allowed_file_types.is_empty() {
                chat.allowed_file_types = policy.allowed_file_types.clone();
            }
            chat.max_file_size = Some(policy.max_chat_file_size);
        }
    }

    if let Some(whiteboard) = rf.whiteboard_features.as_mut() {
        if whiteboard.allowed_whiteboard {
            let mut max_size = policy.max_whiteboard_file_size;
            if max_size < 1 {
                max_size = FALLBACK_WHITEBOARD_FILE_SIZE;
            }
            whiteboard.max_allowed_file_size = Some(max_size);
        }
    }

    if let Some(breakout) = rf.breakout_room_features.as_mut() {
        if breakout.is_allow && breakout.allowed_number_rooms == 0 {
            breakout.allowed_number_rooms = DEFAULT_BREAKOUT_ROOMS;
        }
    }

    if let Some(e2ee) = rf.end_to_end_encryption_features.as_mut() {
        if e2ee.is_enabled && !e2ee.enabled_self_insert_encryption_key {
            // Availability over defense in depth: a dead OS entropy source
            // degrades to the thread RNG instead of failing the request.
            let key = match keys::generate_secure_key(keys::ENCRYPTION_KEY_LENGTH) {
                Ok(key) => key,
                Err(err) => {
                    tracing::warn!("secure key generation failed, using thread rng: {err}");
                    keys::generate_key(keys::ENCRYPTION_KEY_LENGTH)
                }
            };
            e2ee.encryption_key = Some(key);
        }
    }
}

/// Default screen-share, whiteboard, and shared-notepad locks to locked.
///
/// Only `None` fields are touched; an explicit `Some(false)` stays an
/// explicit unlock.
pub fn apply_default_lock_settings(req: &mut CreateRoomRequest) {
    let locks = req
        .metadata
        .default_lock_settings
        .get_or_insert_with(LockSettings::default);

    if locks.lock_screen_sharing.is_none() {
        locks.lock_screen_sharing = Some(true);
    }
    if locks.lock_whiteboard.is_none() {
        locks.lock_whiteboard = Some(true);
    }
    if locks.lock_shared_notepad.is_none() {
        locks.lock_shared_notepad = Some(true);
    }
}

/// Lower request values to the deployment caps.
pub fn clamp_room_quotas(req: &mut CreateRoomRequest, settings: &RoomDefaultSettings) {
    if let Some(cap) = settings.max_participants.filter(|cap| *cap > 0) {
        req.max_participants = match req.max_participants {
            Some(requested) if requested != 0 && requested <= cap => Some(requested),
            _ => Some(cap),
        };
    }

    if let Some(cap) = settings.max_duration.filter(|cap| *cap > 0) {
        let duration = &mut req.metadata.room_features.room_duration;
        *duration = match *duration {
            Some(requested) if requested != 0 && requested <= cap => Some(requested),
            _ => Some(cap),
        };
    }

    if req
        .empty_timeout
        .map_or(true, |timeout| timeout < 120)
    {
        req.empty_timeout = Some(DEFAULT_EMPTY_TIMEOUT_SECS);
    }

    let mut breakout_cap = settings
        .max_num_breakout_rooms
        .unwrap_or(MAX_BREAKOUT_ROOMS);
    // TODO: confirm whether the participant cap should really gate the
    // breakout clamp here; deployments have relied on it doing so.
    if settings
        .max_participants
        .is_some_and(|cap| cap > MAX_BREAKOUT_ROOMS)
    {
        breakout_cap = MAX_BREAKOUT_ROOMS;
    }
    breakout_cap = breakout_cap.min(MAX_BREAKOUT_ROOMS);

    if let Some(breakout) = req.metadata.room_features.breakout_room_features.as_mut() {
        if breakout.allowed_number_rooms > breakout_cap {
            breakout.allowed_number_rooms = breakout_cap;
        }
    }
}
