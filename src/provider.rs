//! Client for the external provider that generates the body document.
//!
//! The provider answers a report request with the URL of a generated PDF;
//! the PDF itself is fetched later by the composer.

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use cosmic_numerology::BirthDate;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

const REPORT_ENDPOINT: &str = "pro_numerology_report";

/// Birth time and place are not collected; the provider still requires them.
const DEFAULT_HOUR: u32 = 12;
const DEFAULT_MINUTE: u32 = 0;
const DEFAULT_LATITUDE: f64 = 28.6139;
const DEFAULT_LONGITUDE: f64 = 77.2090;
const DEFAULT_TIMEZONE: f64 = 5.5;
const DEFAULT_PLACE: &str = "New Delhi, India";

/// Maps a report language to the provider's language code. Unknown
/// languages fall back to English.
pub fn language_code(language: &str) -> &'static str {
    match language.trim().to_ascii_lowercase().as_str() {
        "hindi" | "hi" => "hi",
        "marathi" | "mr" => "mr",
        _ => "en",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRequestPayload {
    pub name: String,
    pub gender: String,
    pub day: u32,
    pub month: u32,
    pub year: u32,
    pub hour: u32,
    pub min: u32,
    pub lat: f64,
    pub lon: f64,
    pub tzone: f64,
    pub place: String,
    pub language: String,
    pub footer_link: String,
    pub logo_url: String,
}

pub struct ProviderClient {
    client: Client,
    base_url: String,
    user_id: String,
    api_key: String,
    footer_link: String,
    logo_url: String,
}

impl ProviderClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let (user_id, api_key) = match (&config.user_id, &config.api_key) {
            (Some(user), Some(key)) if !user.is_empty() && !key.is_empty() => {
                (user.clone(), key.clone())
            }
            _ => return Err(ProviderError::MissingCredentials),
        };
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_id,
            api_key,
            footer_link: config.footer_link.clone(),
            logo_url: config.logo_url.clone(),
        })
    }

    pub fn payload(
        &self,
        name: &str,
        gender: &str,
        date: &BirthDate,
        language: &str,
    ) -> ReportRequestPayload {
        ReportRequestPayload {
            name: name.to_string(),
            gender: gender.to_lowercase(),
            day: date.day(),
            month: date.month(),
            year: date.year(),
            hour: DEFAULT_HOUR,
            min: DEFAULT_MINUTE,
            lat: DEFAULT_LATITUDE,
            lon: DEFAULT_LONGITUDE,
            tzone: DEFAULT_TIMEZONE,
            place: DEFAULT_PLACE.to_string(),
            language: language_code(language).to_string(),
            footer_link: self.footer_link.clone(),
            logo_url: self.logo_url.clone(),
        }
    }

    /// Requests a numerology report and returns the URL of the generated
    /// body document.
    pub async fn numerology_report_url(
        &self,
        name: &str,
        gender: &str,
        date: &BirthDate,
        language: &str,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/{}", self.base_url, REPORT_ENDPOINT);
        let payload = self.payload(name, gender, date, language);
        log::info!(
            "Requesting body document from provider (language '{}')",
            payload.language
        );

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.user_id, Some(&self.api_key))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status == StatusCode::METHOD_NOT_ALLOWED {
            return Err(ProviderError::PlanLimitation);
        }
        if status != StatusCode::OK {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let document_url = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|value| extract_pdf_url(&value));
        match document_url {
            Some(url) => {
                log::info!("Provider generated body document at {}", url);
                Ok(url)
            }
            None => Err(ProviderError::MissingUrl(body)),
        }
    }
}

/// Reads `pdf_url` from the top level or from a nested `response` object.
fn extract_pdf_url(value: &Value) -> Option<String> {
    let direct = value.get("pdf_url").and_then(Value::as_str);
    let nested = || {
        value
            .get("response")
            .and_then(|r| r.get("pdf_url"))
            .and_then(Value::as_str)
    };
    direct
        .or_else(nested)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}
