//! Notification feed entries and their relative-time labels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 86_400;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Icon family shown next to a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationIcon {
    #[default]
    Bug,
    User,
    Subscribe,
}

/// An entry in the notification feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(rename = "iconType")]
    pub icon: NotificationIcon,
}

impl Notification {
    /// Builds a feed entry from `draft` with the given id.
    ///
    /// A draft without a timestamp is stamped with `now`.
    #[must_use]
    pub fn from_draft(id: String, draft: NewNotification, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            message: draft.message,
            timestamp: draft.timestamp.unwrap_or(now),
            read: draft.read,
            kind: draft.kind,
            icon: draft.icon,
        }
    }

    /// Relative label for this notification's age at `now`.
    #[must_use]
    pub fn time_ago(&self, now: DateTime<Utc>) -> String {
        time_ago(self.timestamp, now)
    }
}

/// A notification before the feed assigns it an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub read: bool,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    #[serde(rename = "iconType", default)]
    pub icon: NotificationIcon,
}

impl NewNotification {
    /// Creates an unread info notification.
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: NotificationKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub const fn with_icon(mut self, icon: NotificationIcon) -> Self {
        self.icon = icon;
        self
    }

    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Formats the time elapsed from `then` to `now` as a feed label.
///
/// - under 2 minutes (or in the future): "Just now"
/// - under 1 hour: "N minutes ago"
/// - under 24 hours: "1 hour ago" / "N hours ago"
/// - under 48 hours: "Yesterday"
/// - otherwise: "N days ago"
///
/// # Example
///
/// ```rust
/// use admin_dashboard::domain::time_ago;
/// use chrono::{Duration, Utc};
///
/// let now = Utc::now();
/// assert_eq!(time_ago(now - Duration::minutes(6), now), "6 minutes ago");
/// assert_eq!(time_ago(now - Duration::hours(30), now), "Yesterday");
/// ```
#[must_use]
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - then).num_seconds().max(0);

    if elapsed < SECONDS_PER_HOUR {
        let minutes = elapsed / SECONDS_PER_MINUTE;
        if minutes <= 1 {
            "Just now".to_string()
        } else {
            format!("{minutes} minutes ago")
        }
    } else if elapsed < SECONDS_PER_DAY {
        match elapsed / SECONDS_PER_HOUR {
            1 => "1 hour ago".to_string(),
            hours => format!("{hours} hours ago"),
        }
    } else if elapsed < 2 * SECONDS_PER_DAY {
        "Yesterday".to_string()
    } else {
        format!("{} days ago", elapsed / SECONDS_PER_DAY)
    }
}
