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

//! Legacy `join` → roomhub token-generation translation.

use roomhub_types::room::LockSettings;
use roomhub_types::token::{GenerateTokenRequest, UserInfo, UserMetadata};

use crate::meeting_id::normalize_meeting_id;
use crate::requests::JoinMeetingRequest;

/// Translate a legacy `join` call into a roomhub token request.
///
/// Pure construction, no failure path. The admin decision (legacy role plus
/// password checks) belongs to the caller.
pub fn convert_join_request(r: &JoinMeetingRequest, is_admin: bool) -> GenerateTokenRequest {
    let mut req = GenerateTokenRequest {
        room_id: normalize_meeting_id(&r.meeting_id),
        user_info: UserInfo {
            name: r.full_name.clone(),
            is_admin,
            user_metadata: UserMetadata {
                lock_settings: Some(LockSettings::default()),
                ex_user_id: Some(r.user_id.clone()),
                profile_pic: None,
            },
        },
    };

    if !r.avatar_url.is_empty() {
        req.user_info.user_metadata.profile_pic = Some(r.avatar_url.clone());
    }

    req
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join_request() -> JoinMeetingRequest {
        JoinMeetingRequest {
            full_name: "Alice".to_string(),
            meeting_id: "weekly sync".to_string(),
            user_id: "u-7".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn room_id_is_normalized_like_the_create_path() {
        let req = convert_join_request(&join_request(), false);
        assert_eq!(req.room_id, "weekly_sync");
    }

    #[test]
    fn admin_flag_and_identity_are_carried() {
        let req = convert_join_request(&join_request(), true);
        assert!(req.user_info.is_admin);
        assert_eq!(req.user_info.name, "Alice");
        assert_eq!(
            req.user_info.user_metadata.ex_user_id.as_deref(),
            Some("u-7")
        );
    }

    #[test]
    fn lock_settings_override_is_present_but_empty() {
        let req = convert_join_request(&join_request(), false);
        let locks = req
            .user_info
            .user_metadata
            .lock_settings
            .expect("placeholder block");
        assert_eq!(locks, LockSettings::default());
    }

    #[test]
    fn avatar_is_copied_only_when_non_empty() {
        let mut r = join_request();
        let req = convert_join_request(&r, false);
        assert!(req.user_info.user_metadata.profile_pic.is_none());

        r.avatar_url = "https://example.com/alice.png".to_string();
        let req = convert_join_request(&r, false);
        assert_eq!(
            req.user_info.user_metadata.profile_pic.as_deref(),
            Some("https://example.com/alice.png")
        );
    }
}
