use super::*;

/// Expect the decoder init options for live capture with every symbology
#[test]
fn builds_init_options() {
    let init = ScannerConfig::default().to_init();

    assert_eq!(
        init,
        json!({
            "inputStream": {
                "name": "Live",
                "type": "LiveStream",
                "target": "#scanner-container",
                "constraints": {
                    "width": 480,
                    "height": 320,
                    "facingMode": "environment",
                },
            },
            "decoder": {
                "readers": ["code_128_reader", "ean_reader", "ean_8_reader", "upc_reader"],
            },
        })
    );
}

/// Expect the bridge message to carry the init options and the library load timeout
#[test]
fn builds_bridge_message() {
    let config = ScannerConfig {
        library_timeout_ms: 2_500,
        ..ScannerConfig::default()
    };

    let message = config.to_bridge();

    assert_eq!(message["init"], config.to_init());
    assert_eq!(message["libraryTimeoutMs"], 2_500);
    assert_eq!(ScannerConfig::default().to_bridge()["libraryTimeoutMs"], 10_000);
}

/// Expect detections to deserialize from the decoder's result shape
#[test]
fn parses_detection() {
    let detection: Detection =
        serde_json::from_value(json!({ "codeResult": { "code": "4006381333931" } })).unwrap();

    assert_eq!(detection.code(), "4006381333931");
}
