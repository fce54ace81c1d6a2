//! Recepção de atualizações de device twin via UDP.
//!
//! Formato do datagrama:
//!
//! ```text
//! complete\n{"desired": {"interval": 2000}, "reported": {...}}
//! partial\n{"interval": 2000}
//! ```
//!
//! A primeira linha define o [`TwinUpdateKind`] (sem diferenciar maiúsculas),
//! o restante é o documento JSON repassado sem alteração.

use devkit_core::twin::TwinUpdateKind;
use std::io::ErrorKind;
use std::net::UdpSocket;
use tracing::{debug, warn};

/// Erros de enquadramento do datagrama.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DatagramError {
    #[error("Datagrama não é UTF-8 válido")]
    NotUtf8,

    #[error("Tipo de atualização desconhecido: {0:?}")]
    UnknownKind(String),
}

/// Separa o tipo de atualização do documento JSON.
pub fn parse_datagram(data: &[u8]) -> Result<(TwinUpdateKind, &str), DatagramError> {
    let text = std::str::from_utf8(data).map_err(|_| DatagramError::NotUtf8)?;
    let (head, body) = text.split_once('\n').unwrap_or((text, ""));
    let kind = match head.trim().to_ascii_lowercase().as_str() {
        "complete" => TwinUpdateKind::Complete,
        "partial" => TwinUpdateKind::Partial,
        other => return Err(DatagramError::UnknownKind(other.to_string())),
    };
    Ok((kind, body))
}

/// Socket não-bloqueante consultado a cada ciclo do loop principal.
pub struct TwinListener {
    sock: UdpSocket,
    buf: Vec<u8>,
}

impl TwinListener {
    pub fn bind(bind_ip: &str, port: u16) -> std::io::Result<Self> {
        let ip = if bind_ip.is_empty() { "0.0.0.0" } else { bind_ip };
        let sock = UdpSocket::bind(format!("{ip}:{port}"))?;
        sock.set_nonblocking(true)?;
        Ok(Self {
            sock,
            buf: vec![0u8; 65536],
        })
    }

    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.sock.local_addr()
    }

    /// Drena os datagramas pendentes sem bloquear.
    pub fn poll(&mut self) -> Vec<(TwinUpdateKind, String)> {
        let mut updates = Vec::new();
        loop {
            match self.sock.recv_from(&mut self.buf) {
                Ok((size, addr)) => match parse_datagram(&self.buf[..size]) {
                    Ok((kind, body)) => {
                        debug!("Twin {kind:?} recebido de {addr} ({size} bytes)");
                        updates.push((kind, body.to_string()));
                    }
                    Err(e) => warn!("Descartando datagrama de {addr}: {e}"),
                },
                Err(e) if e.kind() == ErrorKind::WouldBlock => break,
                Err(e) => {
                    warn!("Erro ao receber twin: {e}");
                    break;
                }
            }
        }
        updates
    }
}
