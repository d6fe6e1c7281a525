use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Resultado de ruta del SDK. Opaco: se guarda tal cual llega, sin validar.
/// Los helpers solo leen el formato de `DirectionsResult` y devuelven
/// `None` si el JSON tiene otra forma.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Directions(Value);

impl Directions {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn into_raw(self) -> Value {
        self.0
    }

    fn routes(&self) -> Option<&Vec<Value>> {
        self.0.get("routes")?.as_array()
    }

    fn legs(&self) -> Option<&Vec<Value>> {
        self.routes()?.first()?.get("legs")?.as_array()
    }

    pub fn route_count(&self) -> usize {
        self.routes().map(|routes| routes.len()).unwrap_or(0)
    }

    /// Resumen de la primera ruta ("A-6 y M-30")
    pub fn summary(&self) -> Option<&str> {
        self.routes()?.first()?.get("summary")?.as_str()
    }

    /// Suma de `legs[].distance.value` de la primera ruta
    pub fn total_distance_meters(&self) -> Option<u64> {
        self.sum_legs("distance")
    }

    /// Suma de `legs[].duration.value` de la primera ruta
    pub fn total_duration_seconds(&self) -> Option<u64> {
        self.sum_legs("duration")
    }

    fn sum_legs(&self, field: &str) -> Option<u64> {
        let legs = self.legs()?;
        if legs.is_empty() {
            return None;
        }
        legs.iter()
            .map(|leg| leg.get(field)?.get("value")?.as_u64())
            .sum()
    }
}

impl From<Value> for Directions {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Directions {
        Directions::new(json!({
            "routes": [{
                "summary": "A-6",
                "legs": [
                    { "distance": { "value": 1200, "text": "1,2 km" }, "duration": { "value": 300 } },
                    { "distance": { "value": 800 }, "duration": { "value": 120 } }
                ]
            }],
            "status": "OK"
        }))
    }

    #[test]
    fn test_reads_directions_result_shape() {
        let directions = sample();
        assert_eq!(directions.route_count(), 1);
        assert_eq!(directions.summary(), Some("A-6"));
        assert_eq!(directions.total_distance_meters(), Some(2000));
        assert_eq!(directions.total_duration_seconds(), Some(420));
    }

    #[test]
    fn test_other_shapes_are_kept_but_unreadable() {
        let directions = Directions::new(json!("whatever"));
        assert_eq!(directions.route_count(), 0);
        assert_eq!(directions.summary(), None);
        assert_eq!(directions.total_distance_meters(), None);
        assert_eq!(directions.raw(), &json!("whatever"));
    }

    #[test]
    fn test_leg_without_distance_gives_none() {
        let directions = Directions::new(json!({ "routes": [{ "legs": [{ "duration": { "value": 10 } }] }] }));
        assert_eq!(directions.total_distance_meters(), None);
        assert_eq!(directions.total_duration_seconds(), Some(10));
    }
}
