use dioxus::document::{eval, Eval};
use serde::Deserialize;

use crate::{
    error::scanner::ScannerError,
    scanner::{Decoder, Detection, ScannerConfig},
};

/// Bridge to the QuaggaJS script added by the scan page.
///
/// Receives the init config, waits for `Quagga` to be defined, then answers with `{ error }`
/// and forwards every detection until told to stop. Any failure before that is reported as
/// `{ error }` so init never waits forever.
const BRIDGE: &str = r#"
try {
    const { init: config, libraryTimeoutMs } = await dioxus.recv();
    const deadline = Date.now() + libraryTimeoutMs;
    while (typeof Quagga === "undefined") {
        if (Date.now() >= deadline) {
            throw new Error("QuaggaJS did not load");
        }
        await new Promise((resolve) => setTimeout(resolve, 100));
    }
    const selector = config.inputStream.target;
    config.inputStream.target = document.querySelector(selector);
    if (!config.inputStream.target) {
        throw new Error("No scanner container matches " + selector);
    }
    const failed = await new Promise((resolve) => {
        Quagga.init(config, function (err) {
            resolve(err ? String(err) : null);
        });
    });
    dioxus.send({ error: failed });
    const onDetected = function (result) {
        dioxus.send({ codeResult: { code: result.codeResult.code } });
    };
    if (!failed) {
        Quagga.onDetected(onDetected);
    }
    while (!failed) {
        const command = await dioxus.recv();
        if (command === "start") {
            Quagga.start();
        } else if (command === "stop") {
            Quagga.offDetected(onDetected);
            Quagga.stop();
            break;
        }
    }
} catch (e) {
    dioxus.send({ error: String(e) });
}
"#;

#[derive(Deserialize)]
struct InitReply {
    error: Option<String>,
}

/// [`Decoder`] backed by QuaggaJS through `document::eval`.
#[derive(Default)]
pub struct QuaggaDecoder {
    bridge: Option<Eval>,
}

impl QuaggaDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    fn command(&mut self, command: &str) {
        if let Some(bridge) = &self.bridge {
            let _ = bridge.send(command);
        }
    }
}

impl Decoder for QuaggaDecoder {
    async fn init(&mut self, config: &ScannerConfig) -> Result<(), ScannerError> {
        let mut bridge = eval(BRIDGE);

        bridge
            .send(config.to_bridge())
            .map_err(|e| ScannerError::Channel(format!("{:?}", e)))?;
        let reply = bridge
            .recv::<InitReply>()
            .await
            .map_err(|e| ScannerError::Channel(format!("{:?}", e)))?;

        if let Some(error) = reply.error {
            return Err(ScannerError::Init(error));
        }

        self.bridge = Some(bridge);
        Ok(())
    }

    fn start(&mut self) {
        self.command("start");
    }

    async fn next_detection(&mut self) -> Result<Detection, ScannerError> {
        let bridge = self
            .bridge
            .as_mut()
            .ok_or(ScannerError::NotActive)?;

        bridge
            .recv::<Detection>()
            .await
            .map_err(|e| ScannerError::Channel(format!("{:?}", e)))
    }

    fn stop(&mut self) {
        self.command("stop");
        self.bridge = None;
    }
}

impl Drop for QuaggaDecoder {
    fn drop(&mut self) {
        self.command("stop");
    }
}
