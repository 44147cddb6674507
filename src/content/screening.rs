//! Wellness screening catalog
//!
//! The city's scheduled screening services as plain data, with typed
//! schedules so callers can ask what is available on a given day.

use chrono::NaiveDate;
use itertools::Itertools;
use serde::Serialize;

/// When a screening event runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventSchedule {
    /// A single calendar day
    OnDate(NaiveDate),
    /// An inclusive range of days
    Range {
        /// First day of the event
        start: NaiveDate,
        /// Last day of the event
        end: NaiveDate,
    },
    /// Offered on an ongoing basis
    Recurring,
}

impl EventSchedule {
    /// Whether the event is available on `date`.
    #[must_use]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        match self {
            Self::OnDate(day) => *day == date,
            Self::Range { start, end } => (*start..=*end).contains(&date),
            Self::Recurring => true,
        }
    }

    /// Whether the event still lies ahead of (or includes) `today`.
    #[must_use]
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        match self {
            Self::OnDate(day) => *day >= today,
            Self::Range { end, .. } => *end >= today,
            Self::Recurring => true,
        }
    }
}

/// A scheduled screening service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreeningEvent {
    /// Catalog identifier
    pub id: u32,
    /// Service title
    pub title: &'static str,
    /// Audience and cost tags shown on the card
    pub tags: &'static [&'static str],
    /// Typed schedule for availability queries
    pub schedule: EventSchedule,
    /// Date line exactly as shown on the card
    pub date_label: &'static str,
    /// Hours line exactly as shown on the card
    pub hours: &'static str,
    /// Venue
    pub location: &'static str,
    /// One-paragraph description
    pub summary: &'static str,
    /// What to bring or prepare
    pub requirements: &'static [&'static str],
}

/// All screening events, in display order.
///
/// # Panics
///
/// Never panics; the schedule dates are fixed, valid calendar days.
#[must_use]
pub fn events() -> Vec<ScreeningEvent> {
    vec![
        ScreeningEvent {
            id: 1,
            title: "Cervical Cancer Screening",
            tags: &["Free", "Women 21+"],
            schedule: EventSchedule::OnDate(NaiveDate::from_ymd_opt(2024, 10, 12).unwrap()),
            date_label: "October 12, 2024",
            hours: "8:00 AM - 4:00 PM",
            location: "City Health Office, Naga City",
            summary: "Free Pap smear and HPV testing for early detection of cervical cancer. \
                      Early detection saves lives.",
            requirements: &[
                "Valid ID",
                "PhilHealth card (if available)",
                "Appointment preferred but walk-ins accepted",
            ],
        },
        ScreeningEvent {
            id: 2,
            title: "Prostate Health Check",
            tags: &["Men 50+", "Free Consultation"],
            schedule: EventSchedule::Range {
                start: NaiveDate::from_ymd_opt(2024, 10, 15).unwrap(),
                end: NaiveDate::from_ymd_opt(2024, 10, 16).unwrap(),
            },
            date_label: "October 15-16, 2024",
            hours: "9:00 AM - 3:00 PM",
            location: "Naga City Hall Main Lobby",
            summary: "Comprehensive prostate screening including PSA test and digital rectal \
                      examination for men over 50.",
            requirements: &[
                "Valid government ID",
                "Medical history form",
                "Fasting for 8 hours before test",
            ],
        },
        ScreeningEvent {
            id: 3,
            title: "HIV/AIDS Anonymous Test",
            tags: &["Private", "Walk-in", "Free"],
            schedule: EventSchedule::Recurring,
            date_label: "Available Daily",
            hours: "Monday - Friday: 9:00 AM - 5:00 PM",
            location: "Social Hygiene Clinic, Naga City",
            summary: "Confidential and anonymous HIV testing with same-day results. Counseling \
                      services available.",
            requirements: &[
                "No ID required",
                "Anonymous testing",
                "Free counseling included",
            ],
        },
    ]
}

/// Events available on `date`.
#[must_use]
pub fn events_on(date: NaiveDate) -> Vec<ScreeningEvent> {
    events()
        .into_iter()
        .filter(|event| event.schedule.is_active_on(date))
        .collect()
}

/// Events that have not yet passed as of `today`.
#[must_use]
pub fn upcoming(today: NaiveDate) -> Vec<ScreeningEvent> {
    events()
        .into_iter()
        .filter(|event| event.schedule.is_upcoming(today))
        .collect()
}

/// Events carrying `tag`, compared case-insensitively.
#[must_use]
pub fn with_tag(tag: &str) -> Vec<ScreeningEvent> {
    events()
        .into_iter()
        .filter(|event| event.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
        .collect()
}

/// Distinct tags across the catalog, sorted.
#[must_use]
pub fn all_tags() -> Vec<&'static str> {
    events()
        .iter()
        .flat_map(|event| event.tags.iter().copied())
        .unique()
        .sorted()
        .collect()
}
