//! Test doubles for the fee oracle and the fee handler.

use crate::{FEE, FEE_HANDLER, FEE_TOKEN, RESOURCE_ID};
use alloy::{
    primitives::{Address, Bytes},
    transports::TransportErrorKind,
};
use async_trait::async_trait;
use dynamic_fee::{
    fee::TransferRequest,
    handler::{FeeCalculation, FeeCalculationRequest, FeeHandler},
};
use std::{
    io,
    net::Ipv4Addr,
    sync::{Arc, Mutex},
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};
use url::Url;

/// A fee oracle answering exactly one HTTP request with a canned response.
pub struct MockOracle {
    /// Base URL of the oracle.
    pub url: Url,
    handle: JoinHandle<Option<String>>,
}

impl MockOracle {
    /// Spawns an oracle answering with `status` and `body`.
    pub async fn spawn(status: u16, body: impl Into<String>) -> eyre::Result<Self> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
        let url = Url::parse(&format!("http://{}", listener.local_addr()?))?;
        let body = body.into();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.ok()?;

            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).await.ok()?;
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                reason(status),
                body.len()
            );
            stream.write_all(response.as_bytes()).await.ok()?;
            stream.shutdown().await.ok()?;

            String::from_utf8_lossy(&head).lines().next().map(str::to_string)
        });

        Ok(Self { url, handle })
    }

    /// Returns the request line of the request the oracle served.
    pub async fn request_line(self) -> Option<String> {
        self.handle.await.ok().flatten()
    }
}

/// Returns the URL of a port nothing listens on.
pub async fn unreachable_oracle() -> eyre::Result<Url> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let url = Url::parse(&format!("http://{}", listener.local_addr()?))?;
    drop(listener);
    Ok(url)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Unknown",
    }
}

/// What [`MockFeeHandler`] answers with.
#[derive(Debug, Clone)]
pub enum HandlerOutcome {
    /// Return the fee.
    Fee(FeeCalculation),
    /// Fail with a transport error carrying the message.
    Fail(String),
}

/// A [`FeeHandler`] recording its calls.
#[derive(Debug)]
pub struct MockFeeHandler {
    outcome: HandlerOutcome,
    calls: Mutex<Vec<FeeCalculationRequest>>,
}

impl MockFeeHandler {
    /// Handler returning [`FEE`] in [`FEE_TOKEN`].
    pub fn new() -> Self {
        Self::with_outcome(HandlerOutcome::Fee(FeeCalculation {
            fee: FEE,
            token_address: FEE_TOKEN,
        }))
    }

    /// Handler failing every call.
    pub fn failing(msg: &str) -> Self {
        Self::with_outcome(HandlerOutcome::Fail(msg.to_string()))
    }

    /// Handler answering with `outcome`.
    pub fn with_outcome(outcome: HandlerOutcome) -> Self {
        Self { outcome, calls: Mutex::new(Vec::new()) }
    }

    /// Returns the recorded calls.
    pub fn calls(&self) -> Vec<FeeCalculationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeeHandler for MockFeeHandler {
    fn address(&self) -> Address {
        FEE_HANDLER
    }

    async fn calculate_fee(
        &self,
        request: FeeCalculationRequest,
    ) -> Result<FeeCalculation, alloy::contract::Error> {
        self.calls.lock().unwrap().push(request);
        match &self.outcome {
            HandlerOutcome::Fee(calculation) => Ok(*calculation),
            HandlerOutcome::Fail(msg) => {
                Err(alloy::contract::Error::TransportError(TransportErrorKind::custom_str(msg)))
            }
        }
    }
}

/// The transfer used across the test cases.
pub fn transfer(token_amount: &str) -> TransferRequest {
    TransferRequest {
        sender: Address::ZERO,
        from_domain_id: 1,
        to_domain_id: 2,
        resource_id: RESOURCE_ID,
        token_amount: token_amount.to_string(),
        deposit_data: Bytes::new(),
    }
}

/// Collects the log output of this crate for the current thread.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Installs a subscriber writing every event of this crate into the buffer.
    pub fn set_default(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("dynamic_fee=trace"))
            .with_writer(self.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Returns everything logged so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
