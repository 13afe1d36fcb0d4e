// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CancellationCode, FeedbackCode, ResolutionCode};
use std::str::FromStr;

#[test]
fn test_feedback_code_display_strings() {
    assert_eq!(FeedbackCode::AwaitingCaller.as_str(), "Awaiting Caller");
    assert_eq!(FeedbackCode::AwaitingChange.as_str(), "Awaiting Change");
    assert_eq!(FeedbackCode::AwaitingProvider.as_str(), "Awaiting Provider");
}

#[test]
fn test_resolution_code_display_strings() {
    assert_eq!(ResolutionCode::Completed.as_str(), "Completed");
    assert_eq!(ResolutionCode::NotCompleted.as_str(), "Not Completed");
    assert_eq!(ResolutionCode::Solved.as_str(), "Solved");
    assert_eq!(ResolutionCode::Workaround.as_str(), "Workaround");
    assert_eq!(ResolutionCode::NotSolved.as_str(), "Not Solved");
    assert_eq!(ResolutionCode::CallerClosed.as_str(), "Caller Closed");
}

#[test]
fn test_cancellation_code_display_strings() {
    assert_eq!(CancellationCode::Duplicate.as_str(), "Duplicate");
    assert_eq!(CancellationCode::Inappropriate.as_str(), "Inappropriate");
}

#[test]
fn test_feedback_code_parses_display_string() {
    let parsed: FeedbackCode = FeedbackCode::from_str("Awaiting Provider").unwrap();
    assert_eq!(parsed, FeedbackCode::AwaitingProvider);
}

#[test]
fn test_resolution_code_parses_display_string() {
    let parsed: ResolutionCode = ResolutionCode::from_str("Caller Closed").unwrap();
    assert_eq!(parsed, ResolutionCode::CallerClosed);
}

#[test]
fn test_codes_reject_unknown_strings() {
    assert!(FeedbackCode::from_str("Awaiting Vendor").is_err());
    assert!(ResolutionCode::from_str("Fixed").is_err());
    assert!(CancellationCode::from_str("Spam").is_err());
}
