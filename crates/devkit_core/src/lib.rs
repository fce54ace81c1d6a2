//! # DevKit Core
//!
//! Lógica do firmware da placa IoT: leitura dos sensores, montagem do
//! payload JSON de telemetria, alertas por threshold e atualização de
//! configuração via device twin.
//!
//! ## Módulos
//! - [`types`] – Registro de telemetria, eixos, flags e estado do dispositivo
//! - [`sensors`] – Trait de leitura dos sensores da placa
//! - [`alerts`] – Thresholds e avaliação de alertas
//! - [`payload`] – Serialização JSON com buffer limitado
//! - [`builder`] – Leitura → payload → alertas
//! - [`twin`] – Parsing de atualizações do device twin
//! - [`feedback`] – Blinks do LED RGB
//! - [`config`] – Configuração unificada via TOML

pub mod types;
pub mod sensors;
pub mod alerts;
pub mod payload;
pub mod builder;
pub mod twin;
pub mod feedback;
pub mod config;

// Re-exports convenientes
pub use builder::build_telemetry;
pub use config::AppConfig;
pub use sensors::SensorSuite;
pub use twin::{TwinUpdateKind, apply_twin_update};
pub use types::{AlertFlags, Axes, DeviceState, TelemetryMessage, TelemetryRecord};
