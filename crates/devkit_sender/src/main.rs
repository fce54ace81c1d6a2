//! # DevKit Sender
//!
//! Event loop do dispositivo rodando no host: lê os sensores (simulados),
//! publica a telemetria JSON via UDP e aplica atualizações de device twin
//! recebidas em outra porta UDP.
//!
//! ## Uso
//! ```bash
//! devkit_sender                      # Intervalo e portas do config.toml
//! RUST_LOG=debug devkit_sender       # Log detalhado de cada mensagem
//! ```
//!
//! Para alterar o intervalo em execução:
//! ```bash
//! printf 'partial\n{"interval": 2000}' | nc -u -w0 127.0.0.1 5006
//! ```

mod board;
mod led;
mod publisher;
mod twin_listener;

use board::SimulatedBoard;
use devkit_core::config::AppConfig;
use devkit_core::feedback::{blink_alert, blink_send_confirmation};
use devkit_core::{DeviceState, apply_twin_update, build_telemetry};
use led::ConsoleLed;
use publisher::{Publisher, UdpPublisher};
use std::time::{Duration, Instant};
use twin_listener::TwinListener;
use tracing::{error, info, warn};

fn main() {
    // ── Logging ──
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // ── Carregar config ──
    let config_path = AppConfig::default_path();
    let config = AppConfig::load(&config_path);

    // Salva config padrão se não existir
    if !config_path.exists() {
        if let Err(e) = config.save(&config_path) {
            warn!("Não foi possível salvar config padrão: {e}");
        }
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            error!("Configuração inválida: {e}");
        }
        std::process::exit(1);
    }

    let net = &config.network;
    let dest_addr = format!("{}:{}", net.dest_ip, net.port);

    // ── Sockets UDP ──
    let mut publisher = match UdpPublisher::bind(&net.bind_ip, dest_addr) {
        Ok(p) => p,
        Err(e) => {
            error!("Falha ao criar socket UDP: {e}");
            std::process::exit(1);
        }
    };
    let mut twin = match TwinListener::bind(&net.bind_ip, net.twin_port) {
        Ok(t) => t,
        Err(e) => {
            error!("Falha ao escutar twin na porta {}: {e}", net.twin_port);
            std::process::exit(1);
        }
    };

    // ── Dispositivo ──
    let mut state = DeviceState::with_interval(config.device.interval_ms);
    let mut sensors = SimulatedBoard::new();
    let mut led = ConsoleLed::default();
    let blink = Duration::from_millis(config.feedback.blink_ms);
    let capacity = config.device.payload_max_bytes;

    // ── Banner ──
    println!();
    println!("══════════════════════════════════════════════");
    println!("   ⚡ DEVKIT SENDER – ATIVO ({})", config.device.device_id);
    println!("══════════════════════════════════════════════");
    println!("  Destino:   {}", publisher.dest_addr());
    if let Ok(addr) = twin.local_addr() {
        println!("  Twin:      {addr}");
    }
    println!("  Intervalo: {} ms", state.interval());
    println!("  Payload:   até {} bytes", capacity.saturating_sub(1));
    println!("══════════════════════════════════════════════");
    println!();

    // ── Loop principal ──
    let mut message_id: i64 = 1;
    loop {
        let cycle_start = Instant::now();

        for (kind, raw) in twin.poll() {
            apply_twin_update(&mut state, kind, &raw);
        }

        match build_telemetry(&mut state, &mut sensors, message_id, &config.alerts, capacity) {
            Ok(msg) => {
                if config.feedback.enabled && msg.alerts.any() {
                    blink_alert(&mut led, blink);
                }
                match publisher.publish(message_id, &msg.payload) {
                    Ok(sent) => {
                        info!(
                            "→ #{message_id} {sent} bytes | {:.1}°C {:.1}% | alerta temp={} mov={}",
                            msg.temperature,
                            msg.humidity,
                            msg.alerts.temperature_alert,
                            msg.alerts.motion_alert
                        );
                        if config.feedback.enabled {
                            blink_send_confirmation(&mut led, blink);
                        }
                    }
                    Err(e) => error!("Erro ao enviar UDP: {e}"),
                }
                message_id += 1;
            }
            Err(e) => error!("Erro ao serializar payload: {e}"),
        }

        // Dormir pelo tempo restante do intervalo
        let interval = Duration::from_millis(u64::from(state.interval()));
        let elapsed = cycle_start.elapsed();
        if elapsed < interval {
            std::thread::sleep(interval - elapsed);
        }
    }
}
