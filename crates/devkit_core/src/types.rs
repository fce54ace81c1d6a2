//! Definição de tipos/structs para telemetria.
//!
//! O [`TelemetryRecord`] serializa exatamente no formato JSON esperado pelo
//! IoT Hub (`messageId`, `temperature`, …, `gyroscopeZ`), na mesma ordem.

use serde::{Deserialize, Serialize};

/// Intervalo de envio padrão (ms).
pub const SEND_INTERVAL_DEFAULT: u32 = 5000;

/// Intervalo mínimo aceito via device twin (ms). Valores `<=` são ignorados.
pub const MIN_INTERVAL_MS: u32 = 500;

// ──────────────────────────────────────────────
// Eixos
// ──────────────────────────────────────────────

/// Leitura de um sensor de 3 eixos (magnetômetro, acelerômetro, giroscópio).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Axes {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Axes {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Maior magnitude entre os três eixos.
    pub fn max_magnitude(&self) -> u32 {
        self.x
            .unsigned_abs()
            .max(self.y.unsigned_abs())
            .max(self.z.unsigned_abs())
    }
}

impl From<[i32; 3]> for Axes {
    fn from(v: [i32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

// ──────────────────────────────────────────────
// Leitura completa
// ──────────────────────────────────────────────

/// Todos os valores lidos dos sensores em um ciclo.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorSnapshot {
    /// Temperatura (°C)
    pub temperature: f32,
    /// Umidade relativa (%)
    pub humidity: f32,
    /// Pressão (hPa)
    pub pressure: f32,
    pub magnetometer: Axes,
    pub accelerometer: Axes,
    pub gyroscope: Axes,
}

// ──────────────────────────────────────────────
// Payload
// ──────────────────────────────────────────────

/// Documento de telemetria enviado ao hub.
///
/// A ordem dos campos define a ordem no JSON serializado.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryRecord {
    pub message_id: i64,
    pub temperature: f32,
    pub humidity: f32,
    pub pressure: f32,
    pub magnetometer_x: i32,
    pub magnetometer_y: i32,
    pub magnetometer_z: i32,
    pub accelerometer_x: i32,
    pub accelerometer_y: i32,
    pub accelerometer_z: i32,
    pub gyroscope_x: i32,
    pub gyroscope_y: i32,
    pub gyroscope_z: i32,
}

impl TelemetryRecord {
    /// Monta o registro a partir de uma leitura completa.
    pub fn from_snapshot(message_id: i64, s: &SensorSnapshot) -> Self {
        Self {
            message_id,
            temperature: s.temperature,
            humidity: s.humidity,
            pressure: s.pressure,
            magnetometer_x: s.magnetometer.x,
            magnetometer_y: s.magnetometer.y,
            magnetometer_z: s.magnetometer.z,
            accelerometer_x: s.accelerometer.x,
            accelerometer_y: s.accelerometer.y,
            accelerometer_z: s.accelerometer.z,
            gyroscope_x: s.gyroscope.x,
            gyroscope_y: s.gyroscope.y,
            gyroscope_z: s.gyroscope.z,
        }
    }
}

/// Flags de alerta de um ciclo. É um snapshot, não estado acumulado.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertFlags {
    pub temperature_alert: bool,
    pub motion_alert: bool,
}

impl AlertFlags {
    pub fn any(&self) -> bool {
        self.temperature_alert || self.motion_alert
    }
}

/// Resultado do [`build_telemetry`](crate::builder::build_telemetry).
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryMessage {
    /// JSON formatado, possivelmente truncado na capacidade do buffer
    pub payload: String,
    pub alerts: AlertFlags,
    pub temperature: f32,
    pub humidity: f32,
}

// ──────────────────────────────────────────────
// Estado do dispositivo
// ──────────────────────────────────────────────

/// Estado mutável entre ciclos, pertencente ao event loop do host.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceState {
    pub(crate) interval_ms: u32,
    pub temperature: f32,
    pub humidity: f32,
    pub pressure: f32,
    pub last_accelerometer: Axes,
    pub last_gyroscope: Axes,
    pub last_magnetometer: Axes,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::with_interval(SEND_INTERVAL_DEFAULT)
    }
}

impl DeviceState {
    /// Estado inicial com os valores de power-on da placa.
    pub fn with_interval(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            temperature: -1000.0,
            humidity: -1.0,
            pressure: 0.0,
            last_accelerometer: Axes::default(),
            last_gyroscope: Axes::default(),
            last_magnetometer: Axes::default(),
        }
    }

    /// Intervalo de envio atual (ms).
    pub fn interval(&self) -> u32 {
        self.interval_ms
    }

    pub(crate) fn remember(&mut self, s: &SensorSnapshot) {
        self.temperature = s.temperature;
        self.humidity = s.humidity;
        self.pressure = s.pressure;
        self.last_accelerometer = s.accelerometer;
        self.last_gyroscope = s.gyroscope;
        self.last_magnetometer = s.magnetometer;
    }
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────
