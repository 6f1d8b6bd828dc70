//! In-process stub of the prediction service

use reqwest::Url;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Canned reply for one request
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// A request line as received, e.g. `GET /api/predict?metal=gold HTTP/1.1`
#[derive(Debug, Clone)]
pub struct Received {
    pub method: String,
    pub target: String,
}

impl Received {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or("")
    }

    /// Decoded query parameter
    pub fn param(&self, key: &str) -> Option<String> {
        let base = Url::parse("http://stub").unwrap();
        let url = base.join(&self.target).unwrap();
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

/// Stub server answering each request with the next scripted reply
pub struct StubServer {
    pub base_url: String,
    received: Arc<Mutex<Vec<Received>>>,
}

impl StubServer {
    /// Serve `replies` in order; once exhausted, every request gets a 500
    pub async fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let received = Arc::new(Mutex::new(Vec::new()));
        let replies = Arc::new(Mutex::new(replies.into_iter()));

        let log = received.clone();
        tokio::spawn(async move {
            loop {
                let (mut socket, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                let log = log.clone();
                let replies = replies.clone();
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }
                    let head = String::from_utf8_lossy(&buf).to_string();
                    let mut parts = head.lines().next().unwrap_or("").split_whitespace();
                    let method = parts.next().unwrap_or("").to_string();
                    let target = parts.next().unwrap_or("").to_string();
                    log.lock().unwrap().push(Received { method, target });

                    let reply = replies
                        .lock()
                        .unwrap()
                        .next()
                        .unwrap_or_else(|| Reply::status(500, r#"{"detail":"no reply"}"#));
                    let response = format!(
                        "HTTP/1.1 {} Stub\r\n\
                         Content-Type: application/json\r\n\
                         Content-Length: {}\r\n\
                         Connection: close\r\n\r\n{}",
                        reply.status,
                        reply.body.len(),
                        reply.body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            received,
        }
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

/// Listener that accepts connections and never answers
pub async fn silent_server() -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    (format!("http://{}", addr), handle)
}

/// Server body for a seven day forecast with the given city and first price
pub fn forecast_body(city: &str, state: &str, current: f64) -> String {
    let forecast: Vec<_> = (1..=7u32)
        .map(|day| {
            let price = current + f64::from(day) * 50.0;
            let confidence = if day <= 3 {
                95 - day * 5
            } else {
                (85 - day * 5).max(50)
            };
            json!({
                "day": day,
                "price": price,
                "price_per_gram": price / 10.0,
                "trend": f64::from(day) * 50.0 / current * 100.0,
                "confidence": confidence,
            })
        })
        .collect();
    json!({
        "metal": "gold",
        "purity": "22K",
        "unit": 10,
        "unit_label": "10 grams",
        "location": {"state": state, "city": city},
        "currentPrice": current,
        "currentPricePerGram": current / 10.0,
        "forecast": forecast,
        "weekAverage": current + 200.0,
        "weekTrend": 350.0 / current * 100.0,
        "spread": 0.1,
        "timestamp": "2025-01-15T10:30:00.123456",
    })
    .to_string()
}
