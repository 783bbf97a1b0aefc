//! Shared fixtures for integration tests and benchmarks.

use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use rand::Rng;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Path served by the canned authority, mirroring the real service.
pub const KPS_PATH: &str = "/Service/KPSPublic.asmx";

/// SOAP reply carrying `verdict`.
pub fn soap_reply(verdict: bool) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="utf-8"?>"#,
            r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
            r#"xmlns:xsd="http://www.w3.org/2001/XMLSchema">"#,
            "<soap:Body>",
            r#"<TCKimlikNoDogrulaResponse xmlns="http://tckimlik.nvi.gov.tr/WS">"#,
            "<TCKimlikNoDogrulaResult>{}</TCKimlikNoDogrulaResult>",
            "</TCKimlikNoDogrulaResponse>",
            "</soap:Body></soap:Envelope>"
        ),
        verdict
    )
}

/// What the canned authority answers with.
#[derive(Debug, Clone)]
pub struct CannedReply {
    /// HTTP status
    pub status: StatusCode,
    /// Raw body
    pub body: String,
}

impl CannedReply {
    /// 200 with a well-formed verdict.
    pub fn verdict(verdict: bool) -> Self {
        Self {
            status: StatusCode::OK,
            body: soap_reply(verdict),
        }
    }

    /// Arbitrary status and body.
    pub fn raw(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// One request as seen by the canned authority.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// `Content-Type` header
    pub content_type: Option<String>,
    /// `SOAPAction` header
    pub soap_action: Option<String>,
    /// Request body
    pub body: String,
}

#[derive(Clone)]
struct CannedState {
    reply: CannedReply,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

async fn answer(State(state): State<CannedState>, headers: HeaderMap, body: Bytes) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    if let Ok(mut captured) = state.captured.lock() {
        captured.push(CapturedRequest {
            content_type: header("content-type"),
            soap_action: header("soapaction"),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    (state.reply.status, state.reply.body.clone())
}

/// Local stand-in for the KPSPublic service, stopped on drop.
pub struct CannedAuthority {
    addr: SocketAddr,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl CannedAuthority {
    /// Bind `127.0.0.1:0` and serve `reply` to every POST.
    pub async fn spawn(reply: CannedReply) -> io::Result<Self> {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new().route(KPS_PATH, post(answer)).with_state(CannedState {
            reply,
            captured: Arc::clone(&captured),
        });

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            captured,
            shutdown: Some(tx),
        })
    }

    /// Full endpoint URL.
    pub fn url(&self) -> String {
        format!("http://{}{}", self.addr, KPS_PATH)
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }
}

impl Drop for CannedAuthority {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Endpoint nothing listens on.
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:1/Service/KPSPublic.asmx";

/// Random identity number that satisfies both check digits.
pub fn random_valid_tckn<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut d = [0u8; 11];
    d[0] = rng.gen_range(1..=9);
    for digit in d.iter_mut().take(9).skip(1) {
        *digit = rng.gen_range(0..=9);
    }

    let odd: i32 = [d[0], d[2], d[4], d[6], d[8]].iter().map(|&x| i32::from(x)).sum();
    let even: i32 = [d[1], d[3], d[5], d[7]].iter().map(|&x| i32::from(x)).sum();
    d[9] = (odd * 7 - even).rem_euclid(10) as u8;
    d[10] = (d[..10].iter().map(|&x| u32::from(x)).sum::<u32>() % 10) as u8;

    d.iter().map(|x| char::from(b'0' + x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tckn_validator::is_valid_tckn;

    #[test]
    fn test_random_valid_tckn_passes_checksum() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let tckn = random_valid_tckn(&mut rng);
            assert_eq!(tckn.len(), 11);
            assert!(is_valid_tckn(&tckn), "{}", tckn);
        }
    }

    #[test]
    fn test_soap_reply_marker() {
        assert!(tckn_validator::contains_true_verdict(&soap_reply(true)));
        assert!(!tckn_validator::contains_true_verdict(&soap_reply(false)));
    }
}
