use serde::{Deserialize, Serialize};

/// A point on the Earth's surface, in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Radius of uncertainty in meters, as reported by the sender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            horizontal_accuracy: None,
        }
    }

    pub fn with_accuracy(mut self, meters: f64) -> Self {
        self.horizontal_accuracy = Some(meters);
        self
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5},{:.5}", self.latitude, self.longitude)?;
        if let Some(meters) = self.horizontal_accuracy {
            write!(f, " ±{meters}m")?;
        }
        Ok(())
    }
}
