//! Live barcode scanning.
//!
//! Decoding is done by an external library behind the [`Decoder`] trait. A [`ScannerSession`]
//! owns the decoder and runs single-shot scans: the first detection is written into the
//! barcode input and the session stops. The camera is exclusive, so a session that is
//! starting or running refuses to start again.

#[cfg(feature = "web")]
mod quagga;

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{error::scanner::ScannerError, form::FieldTarget};

#[cfg(feature = "web")]
pub use quagga::QuaggaDecoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbology {
    Code128,
    Ean,
    Ean8,
    Upc,
}

impl Symbology {
    /// Name of the decoder's reader for this symbology
    pub fn reader(&self) -> &'static str {
        match self {
            Symbology::Code128 => "code_128_reader",
            Symbology::Ean => "ean_reader",
            Symbology::Ean8 => "ean_8_reader",
            Symbology::Upc => "upc_reader",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScannerConfig {
    /// CSS selector of the element the camera preview is mounted into
    pub target: String,
    pub width: u32,
    pub height: u32,
    pub facing_mode: &'static str,
    pub symbologies: Vec<Symbology>,
    /// Input the decoded code is written into
    pub field: &'static str,
    /// How long init waits for the decoder library to appear on the page
    pub library_timeout_ms: u32,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            target: "#scanner-container".to_string(),
            width: 480,
            height: 320,
            facing_mode: "environment",
            symbologies: vec![
                Symbology::Code128,
                Symbology::Ean,
                Symbology::Ean8,
                Symbology::Upc,
            ],
            field: crate::form::catalog::BARCODE_INPUT,
            library_timeout_ms: 10_000,
        }
    }
}

impl ScannerConfig {
    /// Decoder initialization options; `inputStream.target` is still a selector here.
    pub fn to_init(&self) -> Value {
        let readers: Vec<&str> = self.symbologies.iter().map(Symbology::reader).collect();

        json!({
            "inputStream": {
                "name": "Live",
                "type": "LiveStream",
                "target": self.target,
                "constraints": {
                    "width": self.width,
                    "height": self.height,
                    "facingMode": self.facing_mode,
                },
            },
            "decoder": {
                "readers": readers,
            },
        })
    }

    /// First message sent to the decoder bridge: init options plus the library load timeout.
    pub fn to_bridge(&self) -> Value {
        json!({
            "init": self.to_init(),
            "libraryTimeoutMs": self.library_timeout_ms,
        })
    }
}

/// One result reported by the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    #[serde(rename = "codeResult")]
    pub code_result: CodeResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeResult {
    pub code: String,
}

impl Detection {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code_result: CodeResult { code: code.into() },
        }
    }

    pub fn code(&self) -> &str {
        &self.code_result.code
    }
}

/// Interface of the external barcode decoding library.
///
/// Futures are not required to be `Send`: the browser runs everything on one thread.
#[allow(async_fn_in_trait)]
pub trait Decoder {
    /// Opens the camera and prepares decoding with `config`.
    async fn init(&mut self, config: &ScannerConfig) -> Result<(), ScannerError>;

    /// Begins decoding frames; only called after a successful [`Decoder::init`].
    fn start(&mut self);

    /// Waits for the next decoded barcode.
    async fn next_detection(&mut self) -> Result<Detection, ScannerError>;

    /// Releases the camera.
    fn stop(&mut self);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScannerState {
    #[default]
    Idle,
    Starting,
    Active,
    Stopped,
}

pub struct ScannerSession<D: Decoder> {
    decoder: D,
    config: ScannerConfig,
    state: ScannerState,
}

impl<D: Decoder> ScannerSession<D> {
    pub fn new(decoder: D, config: ScannerConfig) -> Self {
        Self {
            decoder,
            config,
            state: ScannerState::Idle,
        }
    }

    pub fn state(&self) -> ScannerState {
        self.state
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    fn is_running(&self) -> bool {
        matches!(self.state, ScannerState::Starting | ScannerState::Active)
    }

    /// Initializes and starts the decoder.
    ///
    /// # Returns
    /// - `Ok(())` - The session is [`ScannerState::Active`]
    /// - `Err(ScannerError::AlreadyActive)` - A session is starting or running; nothing changed
    /// - `Err(ScannerError::Init)` - Logged; the session is back to [`ScannerState::Idle`]
    pub async fn start(&mut self) -> Result<(), ScannerError> {
        if self.is_running() {
            tracing::warn!("Barcode scanner already active, ignoring start");
            return Err(ScannerError::AlreadyActive);
        }

        self.state = ScannerState::Starting;

        if let Err(e) = self.decoder.init(&self.config).await {
            tracing::error!("{}", e);
            self.state = ScannerState::Idle;
            return Err(e);
        }

        tracing::info!("Barcode decoder initialization finished. Ready to start");
        self.decoder.start();
        self.state = ScannerState::Active;

        Ok(())
    }

    /// Handles one detection: writes the code into the barcode input and stops.
    ///
    /// Detections arriving when the session is not active are ignored with
    /// [`ScannerError::NotActive`] and leave the input untouched.
    pub fn detect<F: FieldTarget>(
        &mut self,
        detection: &Detection,
        target: &mut F,
    ) -> Result<String, ScannerError> {
        if self.state != ScannerState::Active {
            tracing::debug!("Ignoring detection {}; scanner not active", detection.code());
            return Err(ScannerError::NotActive);
        }

        let code = detection.code().to_string();
        target.set_field(self.config.field, code.clone());
        tracing::info!("Detected barcode {}", code);
        self.stop()?;

        Ok(code)
    }

    /// Waits for the first detection of an active session and handles it.
    pub async fn scan<F: FieldTarget>(&mut self, target: &mut F) -> Result<String, ScannerError> {
        if self.state != ScannerState::Active {
            return Err(ScannerError::NotActive);
        }

        match self.decoder.next_detection().await {
            Ok(detection) => self.detect(&detection, target),
            Err(e) => {
                tracing::error!("{}", e);
                self.stop()?;
                Err(e)
            }
        }
    }

    /// Stops a starting or running session.
    pub fn stop(&mut self) -> Result<(), ScannerError> {
        if !self.is_running() {
            return Err(ScannerError::NotActive);
        }

        self.decoder.stop();
        self.state = ScannerState::Stopped;

        Ok(())
    }
}
