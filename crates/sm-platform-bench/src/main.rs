//! Benchmark for URN parsing and facade encoding.
//!
//! Generates a batch of identifiers (half canonical, half legacy bare IDs),
//! then times parsing, formatting, JSON and protobuf round trips of an
//! envelope list addressed to them.

use std::time::Instant;

use sm_platform::codec::{decode, encode};
use sm_platform::{Namespace, SecureEnvelope, SecureEnvelopeList, Urn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

const DEFAULT_COUNT: usize = 100_000;
const DECODE_ITERS: u32 = 10;

/// Produces `count` identifier strings, alternating canonical and legacy forms.
fn generate_inputs(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let id = Uuid::new_v4().simple().to_string();
            if i % 2 == 0 {
                let ns = Namespace::ALL[i / 2 % Namespace::ALL.len()];
                format!("urn:{}:user:{}", ns, id)
            } else {
                id
            }
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let count = std::env::args()
        .nth(1)
        .map(|arg| arg.parse().expect("count must be a positive integer"))
        .unwrap_or(DEFAULT_COUNT);

    println!("Generating {} identifiers", count);
    let inputs = generate_inputs(count);

    // Parse
    let parse_start = Instant::now();
    let urns: Vec<Urn> = inputs
        .iter()
        .map(|s| Urn::parse(s).expect("Failed to parse URN"))
        .collect();
    let parse_time = parse_start.elapsed();
    println!(
        "\nParse: {:?} ({:.0} ns/urn)",
        parse_time,
        parse_time.as_nanos() as f64 / count as f64
    );

    // Format
    let format_start = Instant::now();
    let formatted: Vec<String> = urns.iter().map(Urn::to_string).collect();
    let format_time = format_start.elapsed();
    println!(
        "Format: {:?} ({:.0} ns/urn)",
        format_time,
        format_time.as_nanos() as f64 / count as f64
    );

    // Every legacy input must come back in canonical form
    let migrated = inputs.iter().filter(|s| !s.contains(':')).count();
    assert!(formatted.iter().all(|s| s.starts_with("urn:")));
    println!("  {} legacy identifiers migrated", migrated);

    let list = SecureEnvelopeList {
        envelopes: urns
            .into_iter()
            .map(|recipient_id| SecureEnvelope {
                recipient_id,
                encrypted_data: vec![0xAB; 64],
                encrypted_symmetric_key: vec![0xCD; 32],
                signature: vec![0xEF; 32],
                ..Default::default()
            })
            .collect(),
    };

    // JSON
    let json_start = Instant::now();
    let json = serde_json::to_vec(&list).expect("Failed to encode JSON");
    let json_encode_time = json_start.elapsed();

    let json_decode_start = Instant::now();
    let from_json: SecureEnvelopeList =
        serde_json::from_slice(&json).expect("Failed to decode JSON");
    let json_decode_time = json_decode_start.elapsed();
    assert_eq!(from_json, list);

    println!("\nJSON: {} bytes", json.len());
    println!("  Encode: {:?}", json_encode_time);
    println!("  Decode: {:?}", json_decode_time);

    // Protobuf
    let encode_start = Instant::now();
    let encoded = encode(&list);
    let encode_time = encode_start.elapsed();

    // Warmup
    for _ in 0..3 {
        let _ = decode::<SecureEnvelopeList>(&encoded).expect("Failed to decode");
    }

    let decode_start = Instant::now();
    let mut decoded = None;
    for _ in 0..DECODE_ITERS {
        decoded = Some(decode::<SecureEnvelopeList>(&encoded).expect("Failed to decode"));
    }
    let decode_time = decode_start.elapsed() / DECODE_ITERS;
    assert_eq!(decoded.as_ref(), Some(&list));

    println!("\nProtobuf: {} bytes", encoded.len());
    println!("  Encode: {:?}", encode_time);
    println!(
        "  Decode: {:?} (avg of {} iterations)",
        decode_time, DECODE_ITERS
    );
    println!(
        "  Size vs JSON: {:.1}%",
        encoded.len() as f64 / json.len() as f64 * 100.0
    );
}
