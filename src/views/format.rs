// ============================================================================
// FORMAT - Texto para las vistas (sin DOM)
// ============================================================================

use crate::models::{CurrentLocation, Directions, LatLng};

/// Coordenada escrita por el usuario ("40,4168" también vale)
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().replace(',', ".").parse().ok()?;
    value.is_finite().then_some(value)
}

/// Solo si ambas coordenadas son válidas y están en rango
pub fn parse_lat_lng(lat: &str, lng: &str) -> Option<LatLng> {
    let lat = parse_coordinate(lat).filter(|v| (-90.0..=90.0).contains(v))?;
    let lng = parse_coordinate(lng).filter(|v| (-180.0..=180.0).contains(v))?;
    Some(LatLng::new(lat, lng))
}

pub fn format_lat_lng(point: &LatLng) -> String {
    format!("{:.5}, {:.5}", point.lat, point.lng)
}

pub fn format_current_location(location: &CurrentLocation) -> String {
    match location.as_lat_lng() {
        Some(point) => format_lat_lng(&point),
        None => "Sin ubicación".to_string(),
    }
}

pub fn format_destination(destination: Option<&LatLng>) -> String {
    destination.map(format_lat_lng).unwrap_or_else(|| "Sin destino".to_string())
}

pub fn format_distance(meters: u64) -> String {
    if meters < 1000 {
        format!("{} m", meters)
    } else {
        format!("{:.1} km", meters as f64 / 1000.0)
    }
}

pub fn format_duration(seconds: u64) -> String {
    let minutes = (seconds + 59) / 60;
    if minutes < 60 {
        format!("{} min", minutes)
    } else {
        format!("{} h {:02} min", minutes / 60, minutes % 60)
    }
}

/// "A-6 · 2.0 km · 7 min"
pub fn format_directions(directions: Option<&Directions>) -> String {
    let Some(directions) = directions else {
        return "Sin ruta".to_string();
    };
    let mut parts: Vec<String> = Vec::new();
    if let Some(summary) = directions.summary().filter(|s| !s.is_empty()) {
        parts.push(summary.to_string());
    }
    if let Some(meters) = directions.total_distance_meters() {
        parts.push(format_distance(meters));
    }
    if let Some(seconds) = directions.total_duration_seconds() {
        parts.push(format_duration(seconds));
    }
    if parts.is_empty() {
        format!("{} ruta(s)", directions.route_count())
    } else {
        parts.join(" · ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate(" 40.5 "), Some(40.5));
        assert_eq!(parse_coordinate("-3,7"), Some(-3.7));
        assert_eq!(parse_coordinate("abc"), None);
        assert_eq!(parse_coordinate("NaN"), None);
        assert_eq!(parse_coordinate(""), None);
    }

    #[test]
    fn test_parse_lat_lng_checks_ranges() {
        assert_eq!(parse_lat_lng("40.4", "-3.7"), Some(LatLng::new(40.4, -3.7)));
        assert_eq!(parse_lat_lng("91", "0"), None);
        assert_eq!(parse_lat_lng("0", "181"), None);
        assert_eq!(parse_lat_lng("0", ""), None);
    }

    #[test]
    fn test_format_locations() {
        assert_eq!(format_current_location(&CurrentLocation::default()), "Sin ubicación");
        assert_eq!(
            format_current_location(&CurrentLocation::from(LatLng::new(40.4168, -3.7038))),
            "40.41680, -3.70380"
        );
        assert_eq!(format_destination(None), "Sin destino");
    }

    #[test]
    fn test_format_distance_and_duration() {
        assert_eq!(format_distance(850), "850 m");
        assert_eq!(format_distance(2500), "2.5 km");
        assert_eq!(format_duration(61), "2 min");
        assert_eq!(format_duration(3900), "1 h 05 min");
    }

    #[test]
    fn test_format_directions() {
        assert_eq!(format_directions(None), "Sin ruta");

        let directions = Directions::new(json!({
            "routes": [{ "summary": "M-30", "legs": [{ "distance": { "value": 2000 }, "duration": { "value": 420 } }] }]
        }));
        assert_eq!(format_directions(Some(&directions)), "M-30 · 2.0 km · 7 min");

        let opaque = Directions::new(json!({ "routes": [{}, {}] }));
        assert_eq!(format_directions(Some(&opaque)), "2 ruta(s)");
    }
}
