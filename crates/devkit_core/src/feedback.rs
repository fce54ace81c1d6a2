//! Feedback visual via LED RGB da placa.

use std::time::Duration;

/// Brilho usado nos blinks (0–255).
pub const RGB_LED_BRIGHTNESS: u8 = 32;

/// Duração padrão de um blink.
pub const BLINK_DURATION: Duration = Duration::from_millis(500);

/// LED RGB controlável.
pub trait StatusLed {
    fn set_color(&mut self, r: u8, g: u8, b: u8);
    fn turn_off(&mut self);

    /// Mantém o estado atual por `duration`.
    fn hold(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

fn blink<L: StatusLed + ?Sized>(led: &mut L, rgb: (u8, u8, u8), duration: Duration) {
    led.turn_off();
    led.set_color(rgb.0, rgb.1, rgb.2);
    led.hold(duration);
    led.turn_off();
}

/// Pisca vermelho: alerta de temperatura ou movimento.
pub fn blink_alert<L: StatusLed + ?Sized>(led: &mut L, duration: Duration) {
    blink(led, (RGB_LED_BRIGHTNESS, 0, 0), duration);
}

/// Pisca azul: mensagem confirmada pelo hub.
pub fn blink_send_confirmation<L: StatusLed + ?Sized>(led: &mut L, duration: Duration) {
    blink(led, (0, 0, RGB_LED_BRIGHTNESS), duration);
}
