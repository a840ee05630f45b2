use serde::Serialize;

use crate::dynamics::state::{LaunchConfig, EARTH_RADIUS};
use crate::sim::FlightRecord;

// ---------------------------------------------------------------------------
// Geographic projection of the planar trajectory for globe rendering
// ---------------------------------------------------------------------------

/// A geographic sample: degrees, degrees, altitude normalized by the
/// planet's radius (renderer convention).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    pub alt: f64,
}

/// Named, colored polyline of one stage's flight path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    pub name: String,
    pub color: String,
    pub stage_id: usize,
    pub points: Vec<GeoPoint>,
}

/// Label placed at the launch coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteMarker {
    pub label: String,
    pub lat: f64,
    pub lng: f64,
}

const STAGE_COLORS: [&str; 6] = [
    "#e63946", "#f4a261", "#2a9d8f", "#457b9d", "#8d5a97", "#6d6875",
];

/// Great-circle destination point: where you end up starting from
/// `(lat, lng)` and travelling `distance` meters along `bearing` (degrees
/// clockwise from north). Returns degrees.
fn destination(lat: f64, lng: f64, bearing: f64, distance: f64) -> (f64, f64) {
    let delta = distance / EARTH_RADIUS; // angular distance
    let theta = bearing.to_radians();
    let phi1 = lat.to_radians();
    let lambda1 = lng.to_radians();

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    (phi2.to_degrees(), lambda2.to_degrees())
}

/// Project the flight records onto the globe: one polyline per stage, each
/// record's cumulative downrange distance carried along the launch heading
/// from the launch coordinate.
pub fn project_flight(records: &[FlightRecord], launch: &LaunchConfig) -> Vec<Trajectory> {
    let mut tracks: Vec<Trajectory> = Vec::new();

    for r in records {
        if tracks.last().map(|t| t.stage_id) != Some(r.stage_id) {
            tracks.push(Trajectory {
                name: format!("Stage {}", r.stage_id + 1),
                color: STAGE_COLORS[r.stage_id % STAGE_COLORS.len()].to_string(),
                stage_id: r.stage_id,
                points: Vec::new(),
            });
        }
        let (lat, lng) = destination(launch.launch_lat, launch.launch_lng, launch.heading, r.east);
        tracks.last_mut().unwrap().points.push(GeoPoint {
            lat,
            lng,
            alt: r.altitude / EARTH_RADIUS,
        });
    }

    tracks
}

/// Launch-site label at the origin of the flight.
pub fn launch_site(launch: &LaunchConfig) -> SiteMarker {
    SiteMarker {
        label: "Launch site".into(),
        lat: launch.launch_lat,
        lng: launch.launch_lng,
    }
}
