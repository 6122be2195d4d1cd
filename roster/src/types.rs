use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type TutorId = String;
pub type ReservationId = String;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("malformed availability bound '{value}'")]
    MalformedBound {
        value: String,
        #[source]
        source: chrono::format::ParseError,
    },

    #[error("time range ends before it starts ({from} > {to})")]
    InvertedRange {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
}

/// A client-selected lesson slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Self, ScheduleError> {
        if from > to {
            return Err(ScheduleError::InvertedRange { from, to });
        }
        Ok(Self { from, to })
    }
}

/// A tutor-published open interval.
///
/// Bounds are kept in the string form the schedule-publishing workflow
/// produced them in (RFC 3339) and parsed to instants on comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub start: String,
    pub end: String,
}

impl AvailabilityWindow {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parse both bounds, failing on the first one that is not a valid instant.
    pub fn bounds(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), ScheduleError> {
        let start = parse_bound(&self.start)?;
        let end = parse_bound(&self.end)?;
        Ok((start, end))
    }
}

fn parse_bound(value: &str) -> Result<DateTime<Utc>, ScheduleError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| ScheduleError::MalformedBound {
            value: value.to_string(),
            source,
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    American,
    British,
}

/// Academic-major category a tutor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MajorField {
    SocialScience,
    Humanities,
    Engineering,
    NaturalScience,
    Arts,
}

/// Lesson duration a prepaid credit is bound to.
///
/// The 20- and 40-minute pools are independent and non-fungible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonKind {
    Min20,
    Min40,
}

impl LessonKind {
    pub fn minutes(self) -> i64 {
        match self {
            LessonKind::Min20 => 20,
            LessonKind::Min40 => 40,
        }
    }

    pub fn from_minutes(minutes: i64) -> anyhow::Result<Self> {
        match minutes {
            20 => Ok(LessonKind::Min20),
            40 => Ok(LessonKind::Min40),
            other => Err(anyhow::anyhow!("Invalid lesson duration: {} minutes", other)),
        }
    }
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.minutes())
    }
}

impl FromStr for LessonKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let minutes: i64 = s
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid LessonKind value: {}", s))?;
        Self::from_minutes(minutes)
    }
}

/// An immutable record of a booked lesson slot linking a client and a tutor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: ReservationId,
    pub kind: LessonKind,
    pub user_id: String,
    pub tutor_id: TutorId,
    pub tutor_name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Reservation {
    /// Pure construction: `end` is derived from `start` and the lesson kind.
    pub fn new(
        id: ReservationId,
        kind: LessonKind,
        user_id: impl Into<String>,
        tutor: &Tutor,
        start: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            kind,
            user_id: user_id.into(),
            tutor_id: tutor.id.clone(),
            tutor_name: tutor.name.clone(),
            start,
            end: start + Duration::minutes(kind.minutes()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutor {
    #[serde(rename = "tutorID")]
    pub id: TutorId,
    pub name: String,
    pub school: String,
    pub major: String,
    pub gender: Gender,
    pub accent: Accent,
    pub major_field: MajorField,
    pub acceptance_rate: f64,

    /// Published open intervals. Empty means the tutor has not listed a
    /// schedule and is treated as always available.
    #[serde(default)]
    pub available: Vec<AvailabilityWindow>,

    /// Booked slots, append-only, written only by the booking manager.
    #[serde(skip)]
    pub reserved: Vec<Reservation>,
}
