//! Sistema de alertas – thresholds e avaliação.

use crate::types::{AlertFlags, SensorSnapshot};
use serde::{Deserialize, Serialize};

/// Temperatura acima da qual dispara alerta (°C).
pub const TEMPERATURE_ALERT_THRESHOLD: f32 = 30.0;

/// Magnitude por eixo do acelerômetro acima da qual dispara alerta de movimento.
pub const ACCEL_ALERT_THRESHOLD: u32 = 100;

/// Threshold do giroscópio. Não participa do alerta de movimento.
pub const GYRO_ALERT_THRESHOLD: u32 = 5000;

/// Thresholds de alerta.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AlertThresholds {
    pub temperature: f32,
    pub accelerometer: u32,
    pub gyroscope: u32,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE_ALERT_THRESHOLD,
            accelerometer: ACCEL_ALERT_THRESHOLD,
            gyroscope: GYRO_ALERT_THRESHOLD,
        }
    }
}

/// Avalia uma leitura contra os thresholds.
///
/// Ambas as comparações são estritas: um valor exatamente no threshold não
/// dispara alerta. Apenas o acelerômetro decide o alerta de movimento.
pub fn evaluate_alerts(snapshot: &SensorSnapshot, thresholds: &AlertThresholds) -> AlertFlags {
    AlertFlags {
        temperature_alert: snapshot.temperature > thresholds.temperature,
        motion_alert: snapshot.accelerometer.max_magnitude() > thresholds.accelerometer,
    }
}
