//! Placa simulada – substitui os drivers I²C quando rodando no host.
//!
//! Gera formas de onda determinísticas para que os alertas disparem de tempos
//! em tempos: a temperatura oscila entre ~22 °C e ~34 °C e o acelerômetro
//! registra um "tranco" a cada [`SHAKE_PERIOD`] leituras.

use devkit_core::sensors::SensorSuite;
use devkit_core::types::Axes;

/// Período (em leituras de acelerômetro) entre trancos simulados.
pub const SHAKE_PERIOD: u64 = 17;

/// Sensores da placa gerados a partir de um contador de ticks.
#[derive(Debug, Default)]
pub struct SimulatedBoard {
    tick: u64,
}

impl SimulatedBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn phase(&self, period: f32) -> f32 {
        (self.tick as f32 / period) * std::f32::consts::TAU
    }
}

impl SensorSuite for SimulatedBoard {
    fn read_temperature(&mut self) -> f32 {
        // Avança o tick uma vez por ciclo (primeira leitura do ciclo)
        self.tick += 1;
        28.0 + 6.0 * self.phase(40.0).sin()
    }

    fn read_humidity(&mut self) -> f32 {
        55.0 + 10.0 * self.phase(60.0).cos()
    }

    fn read_pressure(&mut self) -> f32 {
        1013.25 + 2.5 * self.phase(120.0).sin()
    }

    fn read_magnetometer(&mut self) -> Axes {
        let p = self.phase(90.0);
        Axes::new((300.0 * p.cos()) as i32, (300.0 * p.sin()) as i32, 450)
    }

    fn read_accelerometer(&mut self) -> Axes {
        if self.tick % SHAKE_PERIOD == 0 {
            return Axes::new(180, -140, 1000);
        }
        let wobble = (self.tick % 7) as i32 - 3;
        Axes::new(wobble, -wobble, 1000)
    }

    fn read_gyroscope(&mut self) -> Axes {
        let p = self.phase(25.0);
        Axes::new((800.0 * p.sin()) as i32, (420.0 * p.cos()) as i32, 70)
    }
}
