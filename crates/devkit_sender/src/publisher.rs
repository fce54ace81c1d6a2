//! Publicação da telemetria via UDP.

use std::net::UdpSocket;

/// Destino das mensagens de telemetria.
pub trait Publisher {
    /// Envia o payload. Retorna a quantidade de bytes enviados.
    fn publish(&mut self, message_id: i64, payload: &str) -> std::io::Result<usize>;
}

/// Envia cada payload como um datagrama UDP.
pub struct UdpPublisher {
    sock: UdpSocket,
    dest_addr: String,
}

impl UdpPublisher {
    /// Cria o socket em `bind_ip` (vazio = todas as interfaces) numa porta efêmera.
    pub fn bind(bind_ip: &str, dest_addr: String) -> std::io::Result<Self> {
        let local = if bind_ip.is_empty() {
            "0.0.0.0:0".to_string()
        } else {
            format!("{bind_ip}:0")
        };
        let sock = UdpSocket::bind(local)?;
        if dest_addr.starts_with("255.255.255.255") {
            sock.set_broadcast(true)?;
        }
        Ok(Self { sock, dest_addr })
    }

    pub fn dest_addr(&self) -> &str {
        &self.dest_addr
    }
}

impl Publisher for UdpPublisher {
    fn publish(&mut self, _message_id: i64, payload: &str) -> std::io::Result<usize> {
        self.sock.send_to(payload.as_bytes(), &self.dest_addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn payload_arrives_as_single_datagram() {
        let rx = UdpSocket::bind("127.0.0.1:0").unwrap();
        rx.set_read_timeout(Some(Duration::from_secs(2))).unwrap();
        let dest = rx.local_addr().unwrap().to_string();

        let mut publisher = UdpPublisher::bind("127.0.0.1", dest).unwrap();
        let sent = publisher.publish(1, "{\n    \"messageId\": 1\n}").unwrap();

        let mut buf = [0u8; 512];
        let (size, _) = rx.recv_from(&mut buf).unwrap();
        assert_eq!(size, sent);
        assert_eq!(&buf[..size], b"{\n    \"messageId\": 1\n}");
    }
}
