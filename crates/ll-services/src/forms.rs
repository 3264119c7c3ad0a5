//! # Forms
//!
//! Input collected by the screens, checked before anything reaches a store.
//! The stores accept whatever they are given, so this is the only gate on
//! data quality. Error messages are the ones shown to the user.

use ll_core::error::{AppError, Result};
use ll_core::models::{GeoPoint, Location, NewServiceRequest, UNLISTED_SERVICE_TYPE, Visibility};
use serde::{Deserialize, Serialize};

pub const MISSING_REQUEST_FIELDS: &str = "Please fill in all required fields.";
pub const MISSING_UNLISTED_FIELDS: &str = "Please fill in all fields";
pub const MISSING_LOCATION_FIELDS: &str = "Please fill in all required location fields.";
pub const INVALID_PINCODE: &str = "Pincode must be exactly 6 digits.";
pub const INVALID_COORDINATES: &str = "Location coordinates are out of range.";
pub const MISSING_POST_FIELDS: &str = "Please fill in both title and description.";
pub const EMPTY_REPLY: &str = "Reply text cannot be empty.";
pub const SIGN_IN_TO_POST: &str = "Please sign in to post a question.";

pub const PINCODE_LEN: usize = 6;

/// Trimmed value, or `None` when blank.
fn filled(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn require(values: &[&str], message: &str) -> Result<()> {
    if values.iter().all(|v| !v.trim().is_empty()) {
        Ok(())
    } else {
        Err(AppError::validation(message))
    }
}

/// The "Service Location" sub-form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationForm {
    pub address: String,
    pub area: String,
    pub landmark: String,
    pub city: String,
    pub pincode: String,
    pub coordinates: Option<GeoPoint>,
}

impl LocationForm {
    pub fn validate(&self) -> Result<Location> {
        require(
            &[self.address.as_str(), self.area.as_str(), self.city.as_str(), self.pincode.as_str()],
            MISSING_LOCATION_FIELDS,
        )?;

        let pincode = self.pincode.trim();
        if pincode.len() != PINCODE_LEN || !pincode.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::validation(INVALID_PINCODE));
        }
        if let Some(point) = self.coordinates {
            if !point.is_valid() {
                return Err(AppError::validation(INVALID_COORDINATES));
            }
        }

        Ok(Location {
            address: self.address.trim().to_string(),
            area: self.area.trim().to_string(),
            landmark: filled(&self.landmark),
            city: self.city.trim().to_string(),
            pincode: pincode.to_string(),
            coordinates: self.coordinates,
        })
    }
}

/// Request for a service picked from the catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequestForm {
    /// Category name the service belongs to
    pub service_type: String,
    pub service_name: String,
    pub customer_name: String,
    pub phone: String,
    pub description: String,
    pub location: LocationForm,
}

impl RequestForm {
    pub fn validate(&self) -> Result<NewServiceRequest> {
        require(
            &[
                self.customer_name.as_str(),
                self.phone.as_str(),
                self.location.address.as_str(),
                self.description.as_str(),
            ],
            MISSING_REQUEST_FIELDS,
        )?;
        let location = self.location.validate()?;

        Ok(NewServiceRequest {
            service_type: self.service_type.trim().to_string(),
            service_name: filled(&self.service_name),
            customer_name: filled(&self.customer_name),
            description: self.description.trim().to_string(),
            phone: self.phone.trim().to_string(),
            location: Some(location),
            ..NewServiceRequest::default()
        })
    }
}

/// "Can't find what you're looking for?" request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UnlistedRequestForm {
    pub title: String,
    pub description: String,
    pub phone: String,
    /// The location sub-form is optional here.
    pub location: Option<LocationForm>,
}

impl UnlistedRequestForm {
    pub fn validate(&self) -> Result<NewServiceRequest> {
        require(
            &[self.title.as_str(), self.description.as_str(), self.phone.as_str()],
            MISSING_UNLISTED_FIELDS,
        )?;
        let location = self.location.as_ref().map(LocationForm::validate).transpose()?;

        Ok(NewServiceRequest {
            service_type: UNLISTED_SERVICE_TYPE.to_string(),
            service_name: filled(&self.title),
            description: self.description.trim().to_string(),
            phone: self.phone.trim().to_string(),
            location,
            ..NewServiceRequest::default()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ForumPostForm {
    pub title: String,
    pub description: String,
}

impl ForumPostForm {
    /// Returns the trimmed `(title, description)`.
    pub fn validate(&self, title_max_len: usize) -> Result<(String, String)> {
        require(&[self.title.as_str(), self.description.as_str()], MISSING_POST_FIELDS)?;
        let title = self.title.trim();
        if title.chars().count() > title_max_len {
            return Err(AppError::Validation(format!(
                "Title must be at most {title_max_len} characters."
            )));
        }
        Ok((title.to_string(), self.description.trim().to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReplyForm {
    pub reply_text: String,
    pub visibility: Visibility,
}

impl ReplyForm {
    pub fn validate(&self) -> Result<String> {
        filled(&self.reply_text).ok_or_else(|| AppError::validation(EMPTY_REPLY))
    }
}
