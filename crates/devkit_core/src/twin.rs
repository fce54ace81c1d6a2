//! Atualização de configuração via device twin.
//!
//! Dois formatos de mensagem:
//!
//! - **Complete**: documento inteiro, valor em `desired.interval`
//! - **Partial**: apenas os campos alterados, valor em `interval` na raiz

use crate::types::{DeviceState, MIN_INTERVAL_MS};
use serde_json::{Map, Value};
use tracing::{error, info};

/// Formato da atualização recebida do hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwinUpdateKind {
    Complete,
    Partial,
}

/// Erros de parsing do twin.
#[derive(Debug, thiserror::Error)]
pub enum TwinError {
    #[error("JSON inválido: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Raiz do documento não é um objeto")]
    NotAnObject,
}

/// Campo numérico de um objeto; ausente ou não numérico vale 0.
fn number_field(obj: &Map<String, Value>, key: &str) -> f64 {
    obj.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Extrai o valor de `interval` conforme o formato da mensagem.
pub fn extract_interval(kind: TwinUpdateKind, raw: &str) -> Result<f64, TwinError> {
    let root: Value = serde_json::from_str(raw)?;
    let root = root.as_object().ok_or(TwinError::NotAnObject)?;

    let val = match kind {
        TwinUpdateKind::Complete => root
            .get("desired")
            .and_then(Value::as_object)
            .map(|desired| number_field(desired, "interval"))
            .unwrap_or(0.0),
        TwinUpdateKind::Partial => number_field(root, "interval"),
    };
    Ok(val)
}

/// Aplica uma atualização de twin ao estado.
///
/// Retorna o novo intervalo quando houve mudança. Mensagens inválidas são
/// logadas e descartadas; valores `<= 500` são ignorados em silêncio.
pub fn apply_twin_update(state: &mut DeviceState, kind: TwinUpdateKind, raw: &str) -> Option<u32> {
    let val = match extract_interval(kind, raw) {
        Ok(v) => v,
        Err(e) => {
            error!("Parse do twin falhou ({e}): {raw}");
            return None;
        }
    };

    if val > f64::from(MIN_INTERVAL_MS) {
        // `as` trunca em direção a zero e satura em u32::MAX
        state.interval_ms = val as u32;
        info!(">>> Device twin atualizado: intervalo = {} ms", state.interval_ms);
        Some(state.interval_ms)
    } else {
        None
    }
}
