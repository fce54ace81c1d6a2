//! LED "virtual": registra as mudanças de cor no log.

use devkit_core::feedback::StatusLed;
use tracing::info;

#[derive(Debug, Default)]
pub struct ConsoleLed {
    lit: Option<(u8, u8, u8)>,
}

impl ConsoleLed {
    pub fn color(&self) -> Option<(u8, u8, u8)> {
        self.lit
    }
}

impl StatusLed for ConsoleLed {
    fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.lit = Some((r, g, b));
        let name = match (r > 0, g > 0, b > 0) {
            (true, false, false) => "vermelho",
            (false, false, true) => "azul",
            (false, true, false) => "verde",
            _ => "rgb",
        };
        info!("LED ● {name} ({r}, {g}, {b})");
    }

    fn turn_off(&mut self) {
        self.lit = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devkit_core::feedback::blink_alert;
    use std::time::Duration;

    #[test]
    fn led_ends_off_after_blink() {
        let mut led = ConsoleLed::default();
        led.set_color(0, 0, 32);
        assert_eq!(led.color(), Some((0, 0, 32)));
        blink_alert(&mut led, Duration::ZERO);
        assert_eq!(led.color(), None);
    }
}
