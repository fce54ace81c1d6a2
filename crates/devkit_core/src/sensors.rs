//! Capacidade de leitura dos sensores da placa.
//!
//! Os drivers reais (HTS221, LPS22HB, LSM6DSL, LIS2MDL) ficam fora deste
//! crate; aqui só existe o contrato e um dublê para testes.

use crate::types::{Axes, SensorSnapshot};

/// Sensores ambientais e de movimento da placa.
///
/// As leituras são síncronas e infalíveis do ponto de vista do core.
pub trait SensorSuite {
    /// Temperatura (°C)
    fn read_temperature(&mut self) -> f32;
    /// Umidade relativa (%)
    fn read_humidity(&mut self) -> f32;
    /// Pressão (hPa)
    fn read_pressure(&mut self) -> f32;
    fn read_magnetometer(&mut self) -> Axes;
    fn read_accelerometer(&mut self) -> Axes;
    fn read_gyroscope(&mut self) -> Axes;

    /// Lê todos os sensores na ordem: temperatura, umidade, pressão,
    /// magnetômetro, acelerômetro, giroscópio.
    fn read_all(&mut self) -> SensorSnapshot {
        let temperature = self.read_temperature();
        let humidity = self.read_humidity();
        let pressure = self.read_pressure();
        let magnetometer = self.read_magnetometer();
        let accelerometer = self.read_accelerometer();
        let gyroscope = self.read_gyroscope();
        SensorSnapshot {
            temperature,
            humidity,
            pressure,
            magnetometer,
            accelerometer,
            gyroscope,
        }
    }
}

impl<S: SensorSuite + ?Sized> SensorSuite for Box<S> {
    fn read_temperature(&mut self) -> f32 {
        (**self).read_temperature()
    }
    fn read_humidity(&mut self) -> f32 {
        (**self).read_humidity()
    }
    fn read_pressure(&mut self) -> f32 {
        (**self).read_pressure()
    }
    fn read_magnetometer(&mut self) -> Axes {
        (**self).read_magnetometer()
    }
    fn read_accelerometer(&mut self) -> Axes {
        (**self).read_accelerometer()
    }
    fn read_gyroscope(&mut self) -> Axes {
        (**self).read_gyroscope()
    }
}

/// Dublê que sempre devolve a mesma leitura.
#[derive(Debug, Clone, Default)]
pub struct FixedSensors {
    pub snapshot: SensorSnapshot,
    /// Número de leituras individuais feitas
    pub reads: usize,
}

impl FixedSensors {
    pub fn new(snapshot: SensorSnapshot) -> Self {
        Self { snapshot, reads: 0 }
    }
}

impl SensorSuite for FixedSensors {
    fn read_temperature(&mut self) -> f32 {
        self.reads += 1;
        self.snapshot.temperature
    }
    fn read_humidity(&mut self) -> f32 {
        self.reads += 1;
        self.snapshot.humidity
    }
    fn read_pressure(&mut self) -> f32 {
        self.reads += 1;
        self.snapshot.pressure
    }
    fn read_magnetometer(&mut self) -> Axes {
        self.reads += 1;
        self.snapshot.magnetometer
    }
    fn read_accelerometer(&mut self) -> Axes {
        self.reads += 1;
        self.snapshot.accelerometer
    }
    fn read_gyroscope(&mut self) -> Axes {
        self.reads += 1;
        self.snapshot.gyroscope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Registra a ordem das chamadas.
    #[derive(Default)]
    struct Recorder(Vec<&'static str>);

    impl SensorSuite for Recorder {
        fn read_temperature(&mut self) -> f32 {
            self.0.push("temperature");
            0.0
        }
        fn read_humidity(&mut self) -> f32 {
            self.0.push("humidity");
            0.0
        }
        fn read_pressure(&mut self) -> f32 {
            self.0.push("pressure");
            0.0
        }
        fn read_magnetometer(&mut self) -> Axes {
            self.0.push("magnetometer");
            Axes::default()
        }
        fn read_accelerometer(&mut self) -> Axes {
            self.0.push("accelerometer");
            Axes::default()
        }
        fn read_gyroscope(&mut self) -> Axes {
            self.0.push("gyroscope");
            Axes::default()
        }
    }

    #[test]
    fn read_all_follows_board_order() {
        let mut rec = Recorder::default();
        rec.read_all();
        assert_eq!(
            rec.0,
            [
                "temperature",
                "humidity",
                "pressure",
                "magnetometer",
                "accelerometer",
                "gyroscope"
            ]
        );
    }

    #[test]
    fn boxed_suite_delegates() {
        let snap = SensorSnapshot {
            pressure: 1013.25,
            gyroscope: Axes::new(-1, 0, 1),
            ..Default::default()
        };
        let mut boxed: Box<dyn SensorSuite> = Box::new(FixedSensors::new(snap));
        assert_eq!(boxed.read_all(), snap);
    }
}
