//! Outbreak hotspot data
//!
//! Fixed monitoring data behind the dengue outbreak map: the tracked
//! hotspots, the viewport the map widget opens with, and the prevention
//! guidance shown alongside it. Everything serializes so an external
//! widget can consume it directly.

use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use super::identify::CITY_HEALTH_OFFICE_HOTLINE;

/// Alert severity of a monitored hotspot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Active cluster, immediate action advised
    High,
    /// Elevated case counts, heightened vigilance
    Moderate,
}

impl AlertSeverity {
    /// Marker radius in meters the map draws for this severity.
    #[must_use]
    pub const fn marker_radius_m(self) -> u32 {
        match self {
            Self::High => 800,
            Self::Moderate => 500,
        }
    }

    /// Marker color as a hex code.
    #[must_use]
    pub const fn hex_color(self) -> &'static str {
        match self {
            Self::High => "#ef4444",
            Self::Moderate => "#f59e0b",
        }
    }

    /// Legend label for this severity.
    #[must_use]
    pub const fn legend_label(self) -> &'static str {
        match self {
            Self::High => "High Risk",
            Self::Moderate => "Moderate Risk",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.legend_label())
    }
}

/// A monitored outbreak cluster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotspot {
    /// Barangay or area name
    pub name: &'static str,
    /// Latitude of the cluster center
    pub lat: f64,
    /// Longitude of the cluster center
    pub lng: f64,
    /// Current alert severity
    pub severity: AlertSeverity,
}

/// Geographic bounds given as south-west and north-east corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoBounds {
    /// Southern latitude limit
    pub south: f64,
    /// Western longitude limit
    pub west: f64,
    /// Northern latitude limit
    pub north: f64,
    /// Eastern longitude limit
    pub east: f64,
}

impl GeoBounds {
    /// Whether the point lies inside these bounds.
    #[must_use]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.south && lat <= self.north && lng >= self.west && lng <= self.east
    }
}

/// Initial viewport for the hotspot map
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapViewport {
    /// Latitude the map centers on
    pub center_lat: f64,
    /// Longitude the map centers on
    pub center_lng: f64,
    /// Initial zoom level
    pub zoom: u8,
    /// Smallest zoom the widget allows
    pub min_zoom: u8,
    /// Largest zoom the widget allows
    pub max_zoom: u8,
    /// Hard pan limits keeping the view on the city
    pub bounds: GeoBounds,
}

/// Viewport the outbreak map opens with, framing Naga City.
#[must_use]
pub const fn map_viewport() -> MapViewport {
    MapViewport {
        center_lat: 13.6218,
        center_lng: 123.1948,
        zoom: 13,
        min_zoom: 13,
        max_zoom: 18,
        bounds: GeoBounds {
            south: 13.58,
            west: 123.15,
            north: 13.66,
            east: 123.25,
        },
    }
}

/// Currently tracked dengue hotspots, in display order.
#[must_use]
pub fn hotspots() -> Vec<Hotspot> {
    vec![
        Hotspot {
            name: "Barangay Triangulo",
            lat: 13.6218,
            lng: 123.1948,
            severity: AlertSeverity::High,
        },
        Hotspot {
            name: "Barangay Concepcion",
            lat: 13.6298,
            lng: 123.1898,
            severity: AlertSeverity::High,
        },
        Hotspot {
            name: "Barangay San Felipe",
            lat: 13.6158,
            lng: 123.2028,
            severity: AlertSeverity::Moderate,
        },
    ]
}

/// Advisory naming the current high-alert areas.
#[must_use]
pub fn outbreak_advisory() -> String {
    let areas = hotspots()
        .into_iter()
        .filter(|hotspot| hotspot.severity == AlertSeverity::High)
        .map(|hotspot| hotspot.name)
        .join(" and ");
    format!(
        "Active clusters detected in {areas}. Residents should eliminate standing water \
         immediately and report symptoms to health centers."
    )
}

/// Case-reporting line shown under the map.
#[must_use]
pub fn reporting_notice() -> String {
    format!("Report Dengue Cases. Contact Naga City Health Office: {CITY_HEALTH_OFFICE_HOTLINE}")
}

/// One prevention topic with its tips
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreventionTopic {
    /// Topic heading
    pub title: &'static str,
    /// Tips under the heading, in display order
    pub items: &'static [&'static str],
}

/// Prevention guidance shown with the outbreak map.
#[must_use]
pub fn prevention_topics() -> Vec<PreventionTopic> {
    vec![
        PreventionTopic {
            title: "Eliminate Standing Water",
            items: &[
                "Empty flower vases and change water daily",
                "Remove water from plant saucers",
                "Clean and scrub containers weekly",
                "Dispose of old tires and containers",
            ],
        },
        PreventionTopic {
            title: "Protect Your Home",
            items: &[
                "Install window and door screens",
                "Use mosquito nets while sleeping",
                "Keep gutters clean and free-flowing",
                "Cover water storage containers tightly",
            ],
        },
        PreventionTopic {
            title: "Personal Protection",
            items: &[
                "Wear long sleeves and pants during dawn/dusk",
                "Use mosquito repellent on exposed skin",
                "Apply insect repellent on clothing",
                "Avoid areas with high mosquito activity",
            ],
        },
        PreventionTopic {
            title: "Seek Medical Help",
            items: &[
                "Consult a doctor if fever develops",
                "Watch for warning signs: severe abdominal pain, persistent vomiting",
                "Get blood tests done early",
                "Stay hydrated and rest adequately",
            ],
        },
    ]
}
