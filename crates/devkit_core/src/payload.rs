//! Serialização do payload de telemetria.
//!
//! O JSON é formatado com indentação de 4 espaços e copiado para um buffer de
//! capacidade fixa:
//!
//! ```text
//! ┌──────────────────────────────┬────┐
//! │ JSON (até capacidade - 1)    │ \0 │
//! └──────────────────────────────┴────┘
//! ```
//!
//! Se o JSON não couber, é truncado sem erro. Quem consome o payload não pode
//! assumir um documento válido além desse limite.

use crate::types::TelemetryRecord;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Capacidade do buffer de mensagem do dispositivo (inclui o terminador).
pub const PAYLOAD_MAX_BYTES: usize = 512;

const INDENT: &[u8] = b"    ";

/// Erros de serialização do payload.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Erro de serialização: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Payload não é UTF-8 válido")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializa o registro em JSON formatado, sem limite de tamanho.
pub fn serialize_record(record: &TelemetryRecord) -> Result<String, PayloadError> {
    let mut buf = Vec::with_capacity(PAYLOAD_MAX_BYTES);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    record.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Limita `text` a `capacity - 1` bytes, cortando numa fronteira UTF-8.
///
/// Capacidade zero produz string vazia.
pub fn truncate_payload(text: &str, capacity: usize) -> String {
    let limit = capacity.saturating_sub(1);
    if text.len() <= limit {
        return text.to_owned();
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_owned()
}

/// Serializa e trunca na capacidade informada.
pub fn encode_record(record: &TelemetryRecord, capacity: usize) -> Result<String, PayloadError> {
    let full = serialize_record(record)?;
    Ok(truncate_payload(&full, capacity))
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> TelemetryRecord {
        TelemetryRecord {
            message_id: 7,
            temperature: 24.5,
            humidity: 61.25,
            pressure: 1013.5,
            magnetometer_x: -312,
            magnetometer_y: 80,
            magnetometer_z: 455,
            accelerometer_x: -12,
            accelerometer_y: 4,
            accelerometer_z: 1002,
            gyroscope_x: 560,
            gyroscope_y: -1190,
            gyroscope_z: 70,
        }
    }

    #[test]
    fn pretty_output_uses_four_space_indent() {
        let json = serialize_record(&sample_record()).unwrap();
        assert!(json.starts_with("{\n    \"messageId\": 7,\n    \"temperature\": 24.5,"));
        assert!(json.ends_with("\n}"));
    }

    #[test]
    fn full_record_fits_default_capacity() {
        let full = serialize_record(&sample_record()).unwrap();
        let encoded = encode_record(&sample_record(), PAYLOAD_MAX_BYTES).unwrap();
        assert_eq!(full, encoded);
        let parsed: TelemetryRecord = serde_json::from_str(&encoded).unwrap();
        assert_eq!(parsed, sample_record());
    }

    #[test]
    fn oversized_payload_is_truncated_silently() {
        let encoded = encode_record(&sample_record(), 64).unwrap();
        assert_eq!(encoded.len(), 63);
        assert!(serde_json::from_str::<TelemetryRecord>(&encoded).is_err());
        let full = serialize_record(&sample_record()).unwrap();
        assert!(full.starts_with(&encoded));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // "é" ocupa 2 bytes
        assert_eq!(truncate_payload("aé", 3), "a");
        assert_eq!(truncate_payload("aé", 4), "aé");
    }

    #[test]
    fn zero_and_one_capacity_yield_empty() {
        assert_eq!(truncate_payload("{}", 0), "");
        assert_eq!(truncate_payload("{}", 1), "");
        assert_eq!(truncate_payload("{}", 3), "{}");
    }
}
