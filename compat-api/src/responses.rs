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

//! Legacy XML-shaped response types.
//!
//! The legacy API answers every call with an XML `<response>` document
//! whose first child is a `returncode` of `SUCCESS` or `FAILED`. The HTTP
//! layer owns the actual encoding; these structs only pin the wire shape.

use chrono::Utc;
use serde::{Deserialize, Serialize};

pub const RETURN_CODE_SUCCESS: &str = "SUCCESS";
pub const RETURN_CODE_FAILED: &str = "FAILED";

/// Response document for the legacy `create` call.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename = "response")]
pub struct CreateMeetingResponse {
    pub returncode: String,
    #[serde(rename = "messageKey")]
    pub message_key: String,
    pub message: String,
    #[serde(rename = "meetingID")]
    pub meeting_id: String,
    #[serde(rename = "internalMeetingID")]
    pub internal_meeting_id: String,
    #[serde(rename = "parentMeetingID")]
    pub parent_meeting_id: String,
    /// Deprecated on the legacy wire; echoed for old clients.
    #[serde(rename = "attendeePW")]
    pub attendee_pw: String,
    /// Deprecated on the legacy wire; echoed for old clients.
    #[serde(rename = "moderatorPW")]
    pub moderator_pw: String,
    #[serde(rename = "createTime")]
    pub create_time: i64,
    #[serde(rename = "createDate")]
    pub create_date: String,
    #[serde(rename = "hasUserJoined")]
    pub has_user_joined: bool,
    pub duration: i64,
    #[serde(rename = "voiceBridge")]
    pub voice_bridge: String,
    #[serde(rename = "dialNumber")]
    pub dial_number: String,
    #[serde(rename = "hasBeenForciblyEnded")]
    pub has_been_forcibly_ended: bool,
}

impl CreateMeetingResponse {
    /// Successful envelope stamped with the current time.
    pub fn success(meeting_id: &str, internal_meeting_id: &str) -> Self {
        let now = Utc::now();
        Self {
            returncode: RETURN_CODE_SUCCESS.to_string(),
            meeting_id: meeting_id.to_string(),
            internal_meeting_id: internal_meeting_id.to_string(),
            create_time: now.timestamp_millis(),
            create_date: now.format("%a %b %d %H:%M:%S UTC %Y").to_string(),
            ..Default::default()
        }
    }

    /// Failed envelope with a machine-readable message key.
    pub fn failed(message_key: &str, message: &str) -> Self {
        Self {
            returncode: RETURN_CODE_FAILED.to_string(),
            message_key: message_key.to_string(),
            message: message.to_string(),
            ..Default::default()
        }
    }
}

/// Response document for the legacy `join` call.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename = "response")]
pub struct JoinMeetingResponse {
    pub returncode: String,
    #[serde(rename = "messageKey")]
    pub message_key: String,
    pub message: String,
    pub meeting_id: String,
    pub session_token: String,
    pub url: String,
}

impl JoinMeetingResponse {
    pub fn success(meeting_id: &str, session_token: &str, url: &str) -> Self {
        Self {
            returncode: RETURN_CODE_SUCCESS.to_string(),
            meeting_id: meeting_id.to_string(),
            session_token: session_token.to_string(),
            url: url.to_string(),
            ..Default::default()
        }
    }

    pub fn failed(message_key: &str, message: &str) -> Self {
        Self {
            returncode: RETURN_CODE_FAILED.to_string(),
            message_key: message_key.to_string(),
            message: message.to_string(),
            ..Default::default()
        }
    }
}

/// Pre-uploaded presentation manifest sent with a legacy `create` call:
///
/// ```xml
/// <modules>
///   <module name="presentation">
///     <document url="https://.../deck.pdf" filename="deck.pdf" name="deck"/>
///   </module>
/// </modules>
/// ```
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename = "modules")]
pub struct PreUploadedPresentationModules {
    pub module: PresentationModule,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct PresentationModule {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "document", default)]
    pub documents: Vec<PresentationDocument>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct PresentationDocument {
    #[serde(rename = "@url")]
    pub url: String,
    #[serde(rename = "@filename")]
    pub filename: String,
    #[serde(rename = "@name")]
    pub name: String,
}

impl PreUploadedPresentationModules {
    /// Parse the manifest body uploaded by a legacy client.
    pub fn parse(xml: &str) -> Result<Self, quick_xml::DeError> {
        quick_xml::de::from_str(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_create_response_carries_key_and_message() {
        let resp = CreateMeetingResponse::failed("idNotUnique", "meeting already exists");
        assert_eq!(resp.returncode, RETURN_CODE_FAILED);
        assert_eq!(resp.message_key, "idNotUnique");
        assert_eq!(resp.message, "meeting already exists");
        assert!(resp.meeting_id.is_empty());
    }

    #[test]
    fn success_create_response_stamps_create_time() {
        let before = Utc::now().timestamp_millis();
        let resp = CreateMeetingResponse::success("team-standup", "internal-1");
        let after = Utc::now().timestamp_millis();
        assert_eq!(resp.returncode, RETURN_CODE_SUCCESS);
        assert!(resp.create_time >= before && resp.create_time <= after);
        assert!(resp.create_date.ends_with(&Utc::now().format("%Y").to_string()));
    }

    #[test]
    fn presentation_manifest_parses_documents() {
        let xml = r#"<modules>
            <module name="presentation">
                <document url="https://example.com/a.pdf" filename="a.pdf" name="a"/>
                <document url="https://example.com/b.pdf" filename="b.pdf" name="b"/>
            </module>
        </modules>"#;
        let modules = PreUploadedPresentationModules::parse(xml).expect("parse");
        assert_eq!(modules.module.name, "presentation");
        assert_eq!(modules.module.documents.len(), 2);
        assert_eq!(modules.module.documents[1].filename, "b.pdf");
    }

    #[test]
    fn create_response_encodes_legacy_element_names() {
        let resp = CreateMeetingResponse::failed("checksumError", "checksum mismatch");
        let xml = quick_xml::se::to_string(&resp).expect("serialize");
        assert!(xml.starts_with("<response>"));
        assert!(xml.contains("<returncode>FAILED</returncode>"));
        assert!(xml.contains("<messageKey>checksumError</messageKey>"));
    }
}
