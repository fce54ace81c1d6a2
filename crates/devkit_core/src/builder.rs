//! Montagem da mensagem de telemetria: leitura → payload → alertas.

use crate::alerts::{AlertThresholds, evaluate_alerts};
use crate::payload::{PayloadError, encode_record};
use crate::sensors::SensorSuite;
use crate::types::{DeviceState, TelemetryMessage, TelemetryRecord};
use tracing::debug;

/// Lê os sensores, avalia alertas e serializa o payload.
///
/// Atualiza em `state` os espelhos de temperatura/umidade/pressão e os
/// últimos eixos lidos. O payload é truncado em `capacity` sem sinalizar erro.
pub fn build_telemetry<S: SensorSuite + ?Sized>(
    state: &mut DeviceState,
    sensors: &mut S,
    message_id: i64,
    thresholds: &AlertThresholds,
    capacity: usize,
) -> Result<TelemetryMessage, PayloadError> {
    let snapshot = sensors.read_all();
    let record = TelemetryRecord::from_snapshot(message_id, &snapshot);
    let alerts = evaluate_alerts(&snapshot, thresholds);

    state.remember(&snapshot);

    let payload = encode_record(&record, capacity)?;
    debug!(
        "Mensagem #{message_id}: {} bytes | temp {:.1}°C | alertas {:?}",
        payload.len(),
        snapshot.temperature,
        alerts
    );

    Ok(TelemetryMessage {
        payload,
        alerts,
        temperature: snapshot.temperature,
        humidity: snapshot.humidity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::PAYLOAD_MAX_BYTES;
    use crate::sensors::FixedSensors;
    use crate::types::{AlertFlags, Axes, SensorSnapshot};

    fn sensors(temperature: f32, accel: Axes) -> FixedSensors {
        FixedSensors::new(SensorSnapshot {
            temperature,
            humidity: 48.0,
            pressure: 1009.0,
            magnetometer: Axes::new(-20, 35, 410),
            accelerometer: accel,
            gyroscope: Axes::new(700, -350, 0),
        })
    }

    fn build(state: &mut DeviceState, s: &mut FixedSensors, id: i64) -> TelemetryMessage {
        build_telemetry(state, s, id, &AlertThresholds::default(), PAYLOAD_MAX_BYTES).unwrap()
    }

    #[test]
    fn hot_and_still_raises_temperature_alert_only() {
        let mut state = DeviceState::default();
        let msg = build(&mut state, &mut sensors(35.0, Axes::new(10, 10, 10)), 1);
        assert_eq!(
            msg.alerts,
            AlertFlags {
                temperature_alert: true,
                motion_alert: false
            }
        );
    }

    #[test]
    fn cool_and_shaken_raises_motion_alert_only() {
        let mut state = DeviceState::default();
        let msg = build(&mut state, &mut sensors(20.0, Axes::new(150, 0, 0)), 2);
        assert_eq!(
            msg.alerts,
            AlertFlags {
                temperature_alert: false,
                motion_alert: true
            }
        );
    }

    #[test]
    fn returns_raw_temperature_and_humidity() {
        let mut state = DeviceState::default();
        let msg = build(&mut state, &mut sensors(27.25, Axes::default()), 3);
        assert_eq!(msg.temperature, 27.25);
        assert_eq!(msg.humidity, 48.0);
    }

    #[test]
    fn payload_contains_every_reading() {
        let mut state = DeviceState::default();
        let msg = build(&mut state, &mut sensors(20.0, Axes::new(1, -2, 1003)), 99);
        let value: serde_json::Value = serde_json::from_str(&msg.payload).unwrap();
        assert_eq!(value["messageId"], 99);
        assert_eq!(value["humidity"], 48.0);
        assert_eq!(value["magnetometerZ"], 410);
        assert_eq!(value["accelerometerY"], -2);
        assert_eq!(value["gyroscopeX"], 700);
    }

    #[test]
    fn updates_device_state_cache() {
        let mut state = DeviceState::default();
        let mut s = sensors(20.0, Axes::new(5, 6, 7));
        build(&mut state, &mut s, 4);
        assert_eq!(s.reads, 6);
        assert_eq!(state.temperature, 20.0);
        assert_eq!(state.pressure, 1009.0);
        assert_eq!(state.last_accelerometer, Axes::new(5, 6, 7));
        assert_eq!(state.last_gyroscope, Axes::new(700, -350, 0));
        assert_eq!(state.last_magnetometer, Axes::new(-20, 35, 410));
        assert_eq!(state.interval(), 5000);
    }

    #[test]
    fn small_capacity_truncates_without_error() {
        let mut state = DeviceState::default();
        let msg = build_telemetry(
            &mut state,
            &mut sensors(35.0, Axes::new(200, 0, 0)),
            5,
            &AlertThresholds::default(),
            32,
        )
        .unwrap();
        assert_eq!(msg.payload.len(), 31);
        assert!(msg.alerts.temperature_alert && msg.alerts.motion_alert);
    }
}
