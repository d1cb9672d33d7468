//! Test utilities for record sources
//!
//! Provides record fixtures, an upstream-shaped envelope encoder, and a
//! scripted in-memory [`RecordSource`] whose responses can be delayed to
//! reproduce out-of-order completions.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use userdir_core::prelude::*;
use userdir_core::{
    Coordinates, DatedAge, Gender, Location, Login, NationalId, Picture, Street, Timezone,
    UserName, UserRecord,
};

use crate::client::RecordSource;
use crate::request::FetchRequest;

/// Creates a test user with deterministic identity fields.
///
/// The uuid is `uuid-{index}`, the username `user{index}` and the email
/// `{first}.{last}@example.com` in lowercase.
pub fn test_user(index: usize, first: &str, last: &str, gender: Gender) -> UserRecord {
    let date = Utc
        .with_ymd_and_hms(1990, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default();
    let folder = match gender {
        Gender::Male => "men",
        Gender::Female => "women",
    };

    UserRecord {
        gender,
        name: UserName {
            title: match gender {
                Gender::Male => "Mr".to_string(),
                Gender::Female => "Ms".to_string(),
            },
            first: first.to_string(),
            last: last.to_string(),
        },
        location: Location {
            street: Street {
                number: 100 + index as u32,
                name: "Main Street".to_string(),
            },
            city: "Springfield".to_string(),
            state: "Oregon".to_string(),
            country: "United States".to_string(),
            postcode: "97477".to_string(),
            coordinates: Coordinates {
                latitude: "44.0462".to_string(),
                longitude: "-123.0220".to_string(),
            },
            timezone: Timezone {
                offset: "-8:00".to_string(),
                description: "Pacific Time (US & Canada)".to_string(),
            },
        },
        email: format!(
            "{}.{}@example.com",
            first.to_lowercase(),
            last.to_lowercase()
        ),
        login: Login {
            uuid: format!("uuid-{index}"),
            username: format!("user{index}"),
        },
        dob: DatedAge { date, age: 36 },
        registered: DatedAge { date, age: 10 },
        phone: format!("(555) 010-{index:04}"),
        cell: format!("(555) 020-{index:04}"),
        id: NationalId {
            name: "SSN".to_string(),
            value: Some(format!("000-00-{index:04}")),
        },
        picture: Picture {
            large: format!("https://randomuser.me/api/portraits/{folder}/{index}.jpg"),
            medium: format!("https://randomuser.me/api/portraits/med/{folder}/{index}.jpg"),
            thumbnail: format!("https://randomuser.me/api/portraits/thumb/{folder}/{index}.jpg"),
        },
        nat: "US".to_string(),
    }
}

/// Creates `count` users of one gender named `First{i} Last{i}`
pub fn test_batch(count: usize, gender: Gender) -> Vec<UserRecord> {
    test_batch_from(0, count, gender)
}

/// Like [`test_batch`] but numbering starts at `start`, so batches built for
/// different requests never share uuids.
pub fn test_batch_from(start: usize, count: usize, gender: Gender) -> Vec<UserRecord> {
    (start..start + count)
        .map(|i| test_user(i, &format!("First{i}"), &format!("Last{i}"), gender))
        .collect()
}

/// Encode records the way the upstream API wraps them
pub fn envelope_json(records: &[UserRecord]) -> String {
    serde_json::json!({
        "results": records,
        "info": {
            "seed": "test",
            "results": records.len(),
            "page": 1,
            "version": "1.4"
        }
    })
    .to_string()
}

/// One scripted reply
#[derive(Debug, Clone)]
pub struct ScriptedReply {
    pub delay: Duration,
    pub outcome: std::result::Result<Vec<UserRecord>, String>,
}

/// In-memory [`RecordSource`] that answers requests from a script.
///
/// Replies are consumed in call order. Each reply sleeps for its delay on
/// the tokio clock before resolving, so tests with a paused clock control
/// completion order exactly. When the script runs dry the fallback batch is
/// returned immediately.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRecordSource {
    replies: Arc<Mutex<VecDeque<ScriptedReply>>>,
    requests: Arc<Mutex<Vec<FetchRequest>>>,
    fallback: Arc<Vec<UserRecord>>,
}

impl ScriptedRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source that always answers with `records`
    pub fn with_fallback(records: Vec<UserRecord>) -> Self {
        Self {
            fallback: Arc::new(records),
            ..Self::default()
        }
    }

    /// Queue a successful reply
    pub fn push_ok(&self, records: Vec<UserRecord>, delay: Duration) -> &Self {
        self.push(ScriptedReply {
            delay,
            outcome: Ok(records),
        })
    }

    /// Queue a failing reply
    pub fn push_err(&self, reason: impl Into<String>, delay: Duration) -> &Self {
        self.push(ScriptedReply {
            delay,
            outcome: Err(reason.into()),
        })
    }

    fn push(&self, reply: ScriptedReply) -> &Self {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
        self
    }

    /// Requests received so far, in call order
    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }
}

impl RecordSource for ScriptedRecordSource {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<UserRecord>> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        let reply = self.replies.lock().ok().and_then(|mut r| r.pop_front());
        let Some(reply) = reply else {
            return Ok(self.fallback.as_ref().clone());
        };

        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.outcome.map_err(Error::fetch_failure)
    }
}
