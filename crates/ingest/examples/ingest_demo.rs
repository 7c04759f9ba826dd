use ingest::{Platform, PlatformRegistry};
use serde_json::json;

fn main() {
    let registry = PlatformRegistry::with_defaults();

    let raw = json!({
        "object": "page",
        "entry": [{
            "id": "PAGE_1",
            "time": 1700000000000u64,
            "messaging": [{
                "sender": {"id": "6543210987654321"},
                "recipient": {"id": "PAGE_1"},
                "timestamp": 1700000000000u64,
                "message": {"mid": "m_demo", "text": "  order #A1-99812 never came, call +1 555-123-4567  "}
            }]
        }]
    });

    for platform in Platform::ALL {
        match registry.normalize(platform, &raw) {
            Ok(message) => match serde_json::to_string_pretty(&message) {
                Ok(json) => println!("{platform}:\n{json}"),
                Err(err) => eprintln!("{platform}: serialize failed: {err}"),
            },
            Err(err) => eprintln!("{platform}: {err}"),
        }
    }
}
