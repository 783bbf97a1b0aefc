//! # NVI Client
//!
//! reqwest adapter for the KPSPublic `TCKimlikNoDogrula` SOAP operation.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, warn};

use super::soap::{contains_true_verdict, KimlikNoDogrula, SoapEnvelope, SOAP_ACTION, SOAP_CONTENT_TYPE};
use crate::domain::{CitizenQuery, VerificationError};
use crate::ports::VerificationAuthority;

/// Production endpoint of the KPSPublic service.
pub const NVI_ENDPOINT: &str = "https://tckimlik.nvi.gov.tr/Service/KPSPublic.asmx";

/// Civil-registry verifier speaking SOAP 1.1 over HTTPS.
///
/// Holds one pooled [`Client`]; safe to share across tasks. The HTTP status
/// of the reply is ignored and only the verdict marker in the body counts.
#[derive(Debug, Clone)]
pub struct NviSoapClient {
    client: Client,
    endpoint: String,
}

impl NviSoapClient {
    /// Create a client for `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, VerificationError> {
        let client = Client::builder()
            .build()
            .map_err(|e| VerificationError::Request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Target URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the service whether the identity/name/birth-year combination exists.
    ///
    /// Names are trimmed but otherwise sent as given.
    pub async fn verify_remote(
        &self,
        tckn: &str,
        ad: &str,
        soyad: &str,
        dogum_yili: i64,
    ) -> Result<bool, VerificationError> {
        let tckimlik_no: u64 = tckn.parse()?;
        let envelope = SoapEnvelope::kimlik_no_dogrula(&KimlikNoDogrula {
            tckimlik_no,
            ad: ad.trim(),
            soyad: soyad.trim(),
            dogum_yili,
        });

        debug!(endpoint = %self.endpoint, envelope = envelope.as_str(), "sending SOAP request");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, SOAP_CONTENT_TYPE)
            .header("SOAPAction", SOAP_ACTION)
            .body(envelope.into_string())
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    VerificationError::Request(e.to_string())
                } else {
                    VerificationError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| VerificationError::Body(e.to_string()))?;

        debug!(status = %status, body = %body, "SOAP response received");
        if !status.is_success() {
            warn!(status = %status, "civil registry replied with non-success status");
        }

        Ok(contains_true_verdict(&body))
    }
}

#[async_trait]
impl VerificationAuthority for NviSoapClient {
    async fn verify(&self, query: &CitizenQuery) -> Result<bool, VerificationError> {
        self.verify_remote(
            &query.identity.to_string(),
            &query.ad,
            &query.soyad,
            query.dogum_yili,
        )
        .await
    }

    fn name(&self) -> &str {
        "nvi-kpspublic"
    }
}
