mod config;

use std::collections::VecDeque;

use serde_json::json;

use crate::{
    error::scanner::ScannerError,
    form::FormValues,
    scanner::{Decoder, Detection, ScannerConfig, ScannerSession, ScannerState},
};

/// Decoder answering from a script and recording the calls it receives
#[derive(Default)]
struct FakeDecoder {
    init_error: Option<String>,
    detections: VecDeque<Detection>,
    calls: Vec<&'static str>,
}

impl FakeDecoder {
    fn with_detections(codes: &[&str]) -> Self {
        Self {
            detections: codes.iter().map(|code| Detection::new(*code)).collect(),
            ..Self::default()
        }
    }

    fn failing(reason: &str) -> Self {
        Self {
            init_error: Some(reason.to_string()),
            ..Self::default()
        }
    }
}

impl Decoder for FakeDecoder {
    async fn init(&mut self, _config: &ScannerConfig) -> Result<(), ScannerError> {
        self.calls.push("init");
        // Fails once, like a library that finishes loading later
        match self.init_error.take() {
            Some(reason) => Err(ScannerError::Init(reason)),
            None => Ok(()),
        }
    }

    fn start(&mut self) {
        self.calls.push("start");
    }

    async fn next_detection(&mut self) -> Result<Detection, ScannerError> {
        self.detections
            .pop_front()
            .ok_or_else(|| ScannerError::Channel("closed".to_string()))
    }

    fn stop(&mut self) {
        self.calls.push("stop");
    }
}

fn session(decoder: FakeDecoder) -> ScannerSession<FakeDecoder> {
    ScannerSession::new(decoder, ScannerConfig::default())
}

fn calls(session: &ScannerSession<FakeDecoder>) -> Vec<&'static str> {
    session.decoder.calls.clone()
}
