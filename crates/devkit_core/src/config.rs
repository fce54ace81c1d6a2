//! Configuração unificada via TOML.
//!
//! Os defaults correspondem às constantes de compilação do firmware, então um
//! `config.toml` ausente ou parcial mantém o comportamento da placa.

use crate::alerts::AlertThresholds;
use crate::payload::PAYLOAD_MAX_BYTES;
use crate::types::{MIN_INTERVAL_MS, SEND_INTERVAL_DEFAULT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Erros de leitura/escrita de configuração.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Erro de I/O em {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Erro ao parsear {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Erro ao serializar configuração: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Configuração do dispositivo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Identificador exibido nos logs
    pub device_id: String,
    /// Intervalo de envio inicial (ms)
    pub interval_ms: u32,
    /// Capacidade do buffer de payload (bytes, inclui terminador)
    pub payload_max_bytes: usize,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            device_id: "devkit".into(),
            interval_ms: SEND_INTERVAL_DEFAULT,
            payload_max_bytes: PAYLOAD_MAX_BYTES,
        }
    }
}

/// Configuração de rede do sender.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// IP de destino da telemetria
    pub dest_ip: String,
    /// Porta UDP de destino
    pub port: u16,
    /// IP local para bind (vazio = auto)
    pub bind_ip: String,
    /// Porta UDP onde chegam as atualizações de twin
    pub twin_port: u16,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            dest_ip: "127.0.0.1".into(),
            port: 5005,
            bind_ip: String::new(),
            twin_port: 5006,
        }
    }
}

/// Configuração do LED.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub enabled: bool,
    pub blink_ms: u64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            blink_ms: 500,
        }
    }
}

/// Configuração raiz do aplicativo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub device: DeviceConfig,
    pub alerts: AlertThresholds,
    pub network: NetworkConfig,
    pub feedback: FeedbackConfig,
}

impl AppConfig {
    /// Lê e parseia um arquivo TOML.
    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Carrega configuração de um arquivo TOML, com fallback para o padrão.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match Self::try_load(path) {
                Ok(config) => {
                    info!("Configuração carregada de {}", path.display());
                    return config;
                }
                Err(e) => warn!("{e}"),
            }
        }

        info!("Usando configuração padrão");
        AppConfig::default()
    }

    /// Salva configuração em arquivo TOML.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Configuração salva em {}", path.display());
        Ok(())
    }

    /// Retorna o caminho padrão do config.toml.
    pub fn default_path() -> PathBuf {
        let exe_dir = std::env::current_exe()
            .map(|p| p.parent().unwrap_or(Path::new(".")).to_path_buf())
            .unwrap_or_else(|_| PathBuf::from("."));
        exe_dir.join("config.toml")
    }

    /// Valida a configuração e retorna lista de erros.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.device.interval_ms <= MIN_INTERVAL_MS {
            errors.push(format!(
                "Intervalo inválido: {} ms (mínimo > {MIN_INTERVAL_MS})",
                self.device.interval_ms
            ));
        }
        if self.device.payload_max_bytes < 2 {
            errors.push(format!(
                "payload_max_bytes muito pequeno: {}",
                self.device.payload_max_bytes
            ));
        }
        if self.network.port == 0 {
            errors.push("Porta de destino não pode ser 0".into());
        }
        if self.network.twin_port == 0 {
            errors.push("Porta do twin não pode ser 0".into());
        }

        errors
    }
}
