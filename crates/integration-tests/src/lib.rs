//! Shared fixtures for the end-to-end scenarios in `tests/`.

use std::sync::Arc;

use ll_core::models::{AnswerPolicy, GeoPoint};
use ll_device_console::{ConsoleTelephony, FixedGeolocation};
use ll_services::{App, LocationForm, RequestForm};
use ll_store_memory::{InMemoryForumStore, InMemoryRequestStore};

pub const MYSORE: GeoPoint = GeoPoint { latitude: 12.2958, longitude: 76.6394 };

/// An app wired to fresh in-memory stores and the console device adapters.
/// The stores are returned too so tests can inspect them directly.
pub fn memory_app(policy: AnswerPolicy) -> (App, Arc<InMemoryRequestStore>, Arc<InMemoryForumStore>) {
    let requests = Arc::new(InMemoryRequestStore::new());
    let forum = Arc::new(InMemoryForumStore::with_policy(policy));
    let app = App::new(
        requests.clone(),
        forum.clone(),
        Arc::new(ConsoleTelephony),
        Arc::new(FixedGeolocation::new(MYSORE)),
    );
    (app, requests, forum)
}

pub fn location_form() -> LocationForm {
    LocationForm {
        address: "Flat 402, Sunshine Apartments".into(),
        area: "Jubilee Hills".into(),
        landmark: "Near Apollo Hospital".into(),
        city: "Hyderabad".into(),
        pincode: "500033".into(),
        coordinates: None,
    }
}

pub fn request_form(service_type: &str, description: &str, phone: &str) -> RequestForm {
    RequestForm {
        service_type: service_type.into(),
        service_name: String::new(),
        customer_name: "Test User".into(),
        phone: phone.into(),
        description: description.into(),
        location: location_form(),
    }
}
