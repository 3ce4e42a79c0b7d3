use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Note identifier. Milliseconds since the Unix epoch at creation time,
/// bumped as needed to stay unique.
pub type NoteId = u64;

/// A single user-authored text record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub text: String,
}

/// Hands out strictly increasing ids seeded from the wall clock.
///
/// Two notes created within the same millisecond get `t` and `t + 1`
/// rather than colliding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdGenerator {
    last: Option<NoteId>,
}

impl IdGenerator {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Continue after the largest id in `ids`.
    pub fn seeded<'a>(ids: impl IntoIterator<Item = &'a NoteId>) -> Self {
        Self {
            last: ids.into_iter().copied().max(),
        }
    }

    pub fn next(&mut self, now_ms: u64) -> NoteId {
        let id = match self.last {
            Some(last) => now_ms.max(last.saturating_add(1)),
            None => now_ms,
        };
        self.last = Some(id);
        id
    }
}

/// Wall clock in milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}
