use crate::core::{AppError, Currency, Result};
use reqwest::Url;
use std::fmt;

pub const DEFAULT_IPAY88_BASE_URL: &str = "https://sandbox.ipay88.com.my";

/// iPay88 merchant credentials and the URLs the gateway talks to
#[derive(Clone)]
pub struct Ipay88Config {
    pub merchant_code: String,
    pub merchant_key: String,
    /// Gateway host, without trailing slash
    pub base_url: String,
    /// Where the shopper's browser lands after paying
    pub response_url: String,
    /// Server-to-server callback target (this service's `/ipay88Response`)
    pub backend_url: String,
    pub currency: Currency,
}

impl Ipay88Config {
    pub(crate) fn from_vars<F>(var: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            var(key).ok_or_else(|| AppError::configuration(format!("{} not set", key)))
        };

        let currency = match var("IPAY88_CURRENCY") {
            Some(code) => code.parse().map_err(AppError::configuration)?,
            None => Currency::default(),
        };

        Ok(Ipay88Config {
            merchant_code: required("IPAY88_MERCHANT_CODE")?,
            merchant_key: required("IPAY88_MERCHANT_KEY")?,
            base_url: var("IPAY88_BASE_URL")
                .unwrap_or_else(|| DEFAULT_IPAY88_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            response_url: required("IPAY88_RESPONSE_URL")?,
            backend_url: required("IPAY88_BACKEND_URL")?,
            currency,
        })
    }

    /// Hosted payment page the redirect form posts to
    pub fn entry_url(&self) -> String {
        format!("{}/epayment/entry.asp", self.base_url)
    }

    /// Server-side payment verification endpoint
    pub fn verify_url(&self) -> String {
        format!("{}/payment/verify", self.base_url)
    }

    pub fn validate(&self) -> Result<()> {
        if self.merchant_code.trim().is_empty() {
            return Err(AppError::configuration("IPAY88_MERCHANT_CODE is empty"));
        }

        if self.merchant_key.trim().is_empty() {
            return Err(AppError::configuration("IPAY88_MERCHANT_KEY is empty"));
        }

        for (name, value) in [
            ("IPAY88_BASE_URL", &self.base_url),
            ("IPAY88_RESPONSE_URL", &self.response_url),
            ("IPAY88_BACKEND_URL", &self.backend_url),
        ] {
            validate_http_url(name, value)?;
        }

        Ok(())
    }
}

fn validate_http_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| AppError::configuration(format!("Invalid {}: {}", name, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::configuration(format!(
            "{} must use http or https, got {}",
            name, other
        ))),
    }
}

// Keeps the merchant key out of logs and panic messages
impl fmt::Debug for Ipay88Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ipay88Config")
            .field("merchant_code", &self.merchant_code)
            .field("merchant_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("response_url", &self.response_url)
            .field("backend_url", &self.backend_url)
            .field("currency", &self.currency)
            .finish()
    }
}
