//! # Validation Request
//!
//! Inbound tuple plus the cleaned query handed to the civil-registry authority.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use super::identity::IdentityNumber;

/// One validation request as received from a caller.
///
/// Field names follow the public JSON contract (`tckn`, `ad`, `soyad`,
/// `dogumYili`). Keys match case-insensitively and unknown keys are skipped.
/// Absent or `null` fields decode to empty strings / zero so that the
/// pipeline, not the decoder, reports them as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationRequest {
    /// Identity number, expected to be 11 digits.
    pub tckn: String,
    /// First name.
    pub ad: String,
    /// Last name.
    pub soyad: String,
    /// Birth year.
    #[serde(rename = "dogumYili")]
    pub dogum_yili: i64,
}

impl ValidationRequest {
    /// Create a request.
    pub fn new(
        tckn: impl Into<String>,
        ad: impl Into<String>,
        soyad: impl Into<String>,
        dogum_yili: i64,
    ) -> Self {
        Self {
            tckn: tckn.into(),
            ad: ad.into(),
            soyad: soyad.into(),
            dogum_yili,
        }
    }

    /// Copy with names trimmed and uppercased.
    pub fn normalized(&self) -> Self {
        Self {
            tckn: self.tckn.clone(),
            ad: normalize_name(&self.ad),
            soyad: normalize_name(&self.soyad),
            dogum_yili: self.dogum_yili,
        }
    }

    /// True when a name, surname or birth year is missing.
    pub fn has_missing_fields(&self) -> bool {
        self.ad.trim().is_empty() || self.soyad.trim().is_empty() || self.dogum_yili == 0
    }
}

/// Query sent to the verification authority for an already checksum-valid number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitizenQuery {
    /// Checksum-valid identity number.
    pub identity: IdentityNumber,
    /// First name, normalized.
    pub ad: String,
    /// Last name, normalized.
    pub soyad: String,
    /// Birth year, non-zero.
    pub dogum_yili: i64,
}

enum RequestField {
    Tckn,
    Ad,
    Soyad,
    DogumYili,
    Unknown,
}

impl RequestField {
    fn from_key(key: &str) -> Self {
        match key.to_lowercase().as_str() {
            "tckn" => Self::Tckn,
            "ad" => Self::Ad,
            "soyad" => Self::Soyad,
            "dogumyili" => Self::DogumYili,
            _ => Self::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for ValidationRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RequestVisitor;

        impl<'de> Visitor<'de> for RequestVisitor {
            type Value = ValidationRequest;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a validation request object")
            }

            // a bare `null` body leaves every field at its zero value
            fn visit_unit<E>(self) -> Result<ValidationRequest, E>
            where
                E: de::Error,
            {
                Ok(ValidationRequest::default())
            }

            fn visit_map<A>(self, mut map: A) -> Result<ValidationRequest, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut request = ValidationRequest::default();

                // later duplicates overwrite earlier ones
                while let Some(key) = map.next_key::<String>()? {
                    match RequestField::from_key(&key) {
                        RequestField::Tckn => {
                            request.tckn = map.next_value::<Option<String>>()?.unwrap_or_default();
                        }
                        RequestField::Ad => {
                            request.ad = map.next_value::<Option<String>>()?.unwrap_or_default();
                        }
                        RequestField::Soyad => {
                            request.soyad =
                                map.next_value::<Option<String>>()?.unwrap_or_default();
                        }
                        RequestField::DogumYili => {
                            request.dogum_yili =
                                map.next_value::<Option<i64>>()?.unwrap_or_default();
                        }
                        RequestField::Unknown => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                Ok(request)
            }
        }

        deserializer.deserialize_any(RequestVisitor)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}
