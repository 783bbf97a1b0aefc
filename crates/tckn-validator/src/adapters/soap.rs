//! # SOAP Codec
//!
//! Request envelope for the NVI `TCKimlikNoDogrula` operation and verdict
//! extraction from its reply.
//!
//! The reply is not parsed as XML. The verdict is the presence of one exact
//! literal, which tolerates any surrounding envelope layout.

use std::fmt::Write as _;

/// Target namespace of the KPSPublic web service.
pub const NVI_NAMESPACE: &str = "http://tckimlik.nvi.gov.tr/WS";

/// `SOAPAction` header value for the identity check operation.
pub const SOAP_ACTION: &str = "http://tckimlik.nvi.gov.tr/WS/TCKimlikNoDogrula";

/// `Content-Type` header value for SOAP 1.1 requests.
pub const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Exact substring that marks a positive verdict.
pub const TRUE_VERDICT_MARKER: &str =
    "<TCKimlikNoDogrulaResult>true</TCKimlikNoDogrulaResult>";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const ENVELOPE_OPEN: &str = concat!(
    r#"<soap:Envelope xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
    r#"xmlns:xsd="http://www.w3.org/2001/XMLSchema" "#,
    r#"xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">"#
);

/// Body of a `TCKimlikNoDogrula` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KimlikNoDogrula<'a> {
    /// Identity number in integer form.
    pub tckimlik_no: u64,
    /// First name, already trimmed.
    pub ad: &'a str,
    /// Last name, already trimmed.
    pub soyad: &'a str,
    /// Birth year.
    pub dogum_yili: i64,
}

impl KimlikNoDogrula<'_> {
    /// Render the operation element, indented for placement inside `soap:Body`.
    fn write_xml(&self, out: &mut String, indent: &str) {
        let inner = format!("{indent}  ");
        let _ = writeln!(out, r#"{indent}<TCKimlikNoDogrula xmlns="{NVI_NAMESPACE}">"#);
        let _ = writeln!(out, "{inner}<TCKimlikNo>{}</TCKimlikNo>", self.tckimlik_no);
        let _ = writeln!(out, "{inner}<Ad>{}</Ad>", escape_text(self.ad));
        let _ = writeln!(out, "{inner}<Soyad>{}</Soyad>", escape_text(self.soyad));
        let _ = writeln!(out, "{inner}<DogumYili>{}</DogumYili>", self.dogum_yili);
        let _ = writeln!(out, "{indent}</TCKimlikNoDogrula>");
    }
}

/// A serialized SOAP 1.1 request, built fresh for each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapEnvelope(String);

impl SoapEnvelope {
    /// Wrap a `TCKimlikNoDogrula` body in the fixed envelope.
    pub fn kimlik_no_dogrula(operation: &KimlikNoDogrula<'_>) -> Self {
        let mut out = String::with_capacity(512);
        out.push_str(XML_DECLARATION);
        out.push('\n');
        out.push_str(ENVELOPE_OPEN);
        out.push('\n');
        out.push_str("  <soap:Body>\n");
        operation.write_xml(&mut out, "    ");
        out.push_str("  </soap:Body>\n");
        out.push_str("</soap:Envelope>");
        Self(out)
    }

    /// Envelope text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the envelope text.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// True when the reply contains the positive verdict marker verbatim.
pub fn contains_true_verdict(body: &str) -> bool {
    body.contains(TRUE_VERDICT_MARKER)
}

/// Escape XML character data.
fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            _ => out.push(c),
        }
    }
    out
}
