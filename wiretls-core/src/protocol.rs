//! TLS protocol constants and types.

/// TLS protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum ProtocolVersion {
    /// TLS 1.0 (RFC 2246) - Legacy, not recommended
    Tls10 = 0x0301,

    /// TLS 1.1 (RFC 4346) - Legacy, not recommended
    Tls11 = 0x0302,

    /// TLS 1.2 (RFC 5246)
    Tls12 = 0x0303,
}

impl ProtocolVersion {
    /// Create from wire format (u16 big-endian).
    pub const fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0301 => Some(ProtocolVersion::Tls10),
            0x0302 => Some(ProtocolVersion::Tls11),
            0x0303 => Some(ProtocolVersion::Tls12),
            _ => None,
        }
    }

    /// Convert to wire format (u16 big-endian).
    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    /// Major version byte.
    pub const fn major(self) -> u8 {
        (self.to_u16() >> 8) as u8
    }

    /// Minor version byte.
    pub const fn minor(self) -> u8 {
        (self.to_u16() & 0xFF) as u8
    }

    /// Get the protocol name.
    pub const fn name(self) -> &'static str {
        match self {
            ProtocolVersion::Tls10 => "TLS 1.0",
            ProtocolVersion::Tls11 => "TLS 1.1",
            ProtocolVersion::Tls12 => "TLS 1.2",
        }
    }
}

/// TLS record content type (RFC 5246 Section 6.2.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ContentType {
    /// Change cipher spec (20)
    ChangeCipherSpec = 20,

    /// Alert (21)
    Alert = 21,

    /// Handshake (22)
    Handshake = 22,

    /// Application data (23)
    ApplicationData = 23,

    /// Heartbeat (24) - RFC 6520
    Heartbeat = 24,
}

impl ContentType {
    /// Create from wire format (u8).
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            20 => Some(ContentType::ChangeCipherSpec),
            21 => Some(ContentType::Alert),
            22 => Some(ContentType::Handshake),
            23 => Some(ContentType::ApplicationData),
            24 => Some(ContentType::Heartbeat),
            _ => None,
        }
    }

    /// Convert to wire format (u8).
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Get the content type name.
    pub const fn name(self) -> &'static str {
        match self {
            ContentType::ChangeCipherSpec => "ChangeCipherSpec",
            ContentType::Alert => "Alert",
            ContentType::Handshake => "Handshake",
            ContentType::ApplicationData => "ApplicationData",
            ContentType::Heartbeat => "Heartbeat",
        }
    }
}

/// Handshake message type (RFC 5246 Section 7.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HandshakeType {
    /// HelloRequest (0)
    HelloRequest = 0,

    /// ClientHello (1)
    ClientHello = 1,

    /// ServerHello (2)
    ServerHello = 2,

    /// Certificate (11)
    Certificate = 11,

    /// ServerKeyExchange (12)
    ServerKeyExchange = 12,

    /// CertificateRequest (13)
    CertificateRequest = 13,

    /// ServerHelloDone (14)
    ServerHelloDone = 14,

    /// CertificateVerify (15)
    CertificateVerify = 15,

    /// ClientKeyExchange (16)
    ClientKeyExchange = 16,

    /// Finished (20)
    Finished = 20,
}

impl HandshakeType {
    /// Create from wire format (u8).
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(HandshakeType::HelloRequest),
            1 => Some(HandshakeType::ClientHello),
            2 => Some(HandshakeType::ServerHello),
            11 => Some(HandshakeType::Certificate),
            12 => Some(HandshakeType::ServerKeyExchange),
            13 => Some(HandshakeType::CertificateRequest),
            14 => Some(HandshakeType::ServerHelloDone),
            15 => Some(HandshakeType::CertificateVerify),
            16 => Some(HandshakeType::ClientKeyExchange),
            20 => Some(HandshakeType::Finished),
            _ => None,
        }
    }

    /// Convert to wire format (u8).
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Get the message name.
    pub const fn name(self) -> &'static str {
        match self {
            HandshakeType::HelloRequest => "HelloRequest",
            HandshakeType::ClientHello => "ClientHello",
            HandshakeType::ServerHello => "ServerHello",
            HandshakeType::Certificate => "Certificate",
            HandshakeType::ServerKeyExchange => "ServerKeyExchange",
            HandshakeType::CertificateRequest => "CertificateRequest",
            HandshakeType::ServerHelloDone => "ServerHelloDone",
            HandshakeType::CertificateVerify => "CertificateVerify",
            HandshakeType::ClientKeyExchange => "ClientKeyExchange",
            HandshakeType::Finished => "Finished",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_version() {
        assert_eq!(
            ProtocolVersion::from_u16(0x0303),
            Some(ProtocolVersion::Tls12)
        );
        assert_eq!(ProtocolVersion::Tls12.to_u16(), 0x0303);
        assert_eq!(ProtocolVersion::Tls12.major(), 3);
        assert_eq!(ProtocolVersion::Tls12.minor(), 3);
        assert_eq!(ProtocolVersion::Tls12.name(), "TLS 1.2");
        assert_eq!(ProtocolVersion::from_u16(0x0304), None);
    }

    #[test]
    fn test_content_type() {
        assert_eq!(ContentType::from_u8(22), Some(ContentType::Handshake));
        assert_eq!(ContentType::Handshake.to_u8(), 22);
        assert_eq!(ContentType::from_u8(25), None);
    }

    #[test]
    fn test_handshake_type() {
        assert_eq!(HandshakeType::from_u8(1), Some(HandshakeType::ClientHello));
        assert_eq!(HandshakeType::Finished.to_u8(), 20);
        assert_eq!(HandshakeType::from_u8(99), None);
        assert_eq!(HandshakeType::ServerHelloDone.name(), "ServerHelloDone");
    }
}
