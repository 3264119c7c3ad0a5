//! GPS assist for the location sub-form.

use std::sync::Arc;

use ll_core::models::GeoPoint;
use ll_core::traits::Geolocation;
use tracing::{debug, warn};

use crate::forms::LocationForm;

#[derive(Clone)]
pub struct LocationService {
    geolocation: Arc<dyn Geolocation>,
}

impl LocationService {
    pub fn new(geolocation: Arc<dyn Geolocation>) -> Self {
        Self { geolocation }
    }

    /// Fills `form.coordinates` from the device. A failed or implausible fix
    /// leaves the form as it was; the typed address is enough to submit.
    pub async fn attach_current_position(&self, form: &mut LocationForm) -> Option<GeoPoint> {
        match self.geolocation.current_position().await {
            Ok(point) if point.is_valid() => {
                debug!(latitude = point.latitude, longitude = point.longitude, "position attached");
                form.coordinates = Some(point);
                Some(point)
            }
            Ok(point) => {
                warn!(?point, "discarding out-of-range position");
                None
            }
            Err(e) => {
                warn!(error = %e, "geolocation unavailable");
                None
            }
        }
    }
}
