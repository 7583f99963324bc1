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

//! Legacy meeting-ID normalization.
//!
//! The room backend only accepts IDs matching `^[a-zA-Z0-9_-]+$`; legacy
//! clients send arbitrary strings (spaces, dots, unicode). Both the create
//! and join paths must normalize the same way so a join finds the room its
//! create made.

use std::sync::OnceLock;

use regex::Regex;

const VALID_ID_PATTERN: &str = "^[a-zA-Z0-9_-]+$";

fn valid_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VALID_ID_PATTERN).expect("valid regex"))
}

/// Map a legacy meeting ID onto the room-ID format the backend accepts.
///
/// Conforming IDs pass through unchanged; in all other IDs every offending
/// character is replaced with `_`.
pub fn normalize_meeting_id(meeting_id: &str) -> String {
    if valid_id_regex().is_match(meeting_id) {
        return meeting_id.to_string();
    }
    meeting_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conforming_id_passes_through() {
        assert_eq!(normalize_meeting_id("team-standup_01"), "team-standup_01");
    }

    #[test]
    fn offending_characters_become_underscores() {
        assert_eq!(normalize_meeting_id("weekly sync #3"), "weekly_sync__3");
        assert_eq!(normalize_meeting_id("a.b.c"), "a_b_c");
    }

    #[test]
    fn non_ascii_is_replaced_per_character() {
        assert_eq!(normalize_meeting_id("café"), "caf_");
    }

    #[test]
    fn empty_id_stays_empty() {
        assert_eq!(normalize_meeting_id(""), "");
    }
}
