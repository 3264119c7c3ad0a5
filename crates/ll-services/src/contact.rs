//! Call and WhatsApp shortcuts from the admin dashboard.
//!
//! The dialer is a device capability behind [`Telephony`]; nothing here
//! touches the stores, so a missing dialer never affects request data.

use std::sync::Arc;

use ll_core::error::{AppError, Result};
use ll_core::traits::Telephony;
use tracing::{error, info};

pub const DIALER_UNAVAILABLE: &str = "Cannot open phone dialer.";
pub const WHATSAPP_UNAVAILABLE: &str =
    "WhatsApp is not installed or the number format is incorrect for direct link.";

pub fn dial_url(phone: &str) -> String {
    format!("tel:{}", phone.trim())
}

/// WhatsApp wants bare digits: `+91 98765-43210` becomes `919876543210`.
pub fn whatsapp_url(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("whatsapp://send?phone={digits}")
}

#[derive(Clone)]
pub struct ContactService {
    telephony: Arc<dyn Telephony>,
}

impl ContactService {
    pub fn new(telephony: Arc<dyn Telephony>) -> Self {
        Self { telephony }
    }

    pub async fn call(&self, phone: &str) -> Result<()> {
        self.open(&dial_url(phone), DIALER_UNAVAILABLE).await
    }

    pub async fn whatsapp(&self, phone: &str) -> Result<()> {
        self.open(&whatsapp_url(phone), WHATSAPP_UNAVAILABLE).await
    }

    async fn open(&self, url: &str, unavailable: &str) -> Result<()> {
        if !self.telephony.can_open(url).await {
            return Err(AppError::Unavailable(unavailable.to_string()));
        }
        match self.telephony.open(url).await {
            Ok(()) => {
                info!(url, "contact link opened");
                Ok(())
            }
            Err(e) => {
                error!(url, error = %e, "failed to open contact link");
                Err(AppError::Unavailable(unavailable.to_string()))
            }
        }
    }
}
