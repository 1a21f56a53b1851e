//! TLS alert protocol.
//!
//! Two-byte codec plus the fatal/warning classification. In TLS 1.2 as
//! this codec treats it, close_notify is the only warning-level
//! description; every other alert terminates the connection.

use crate::error::{Error, Result};

/// Alert level (RFC 5246 Section 7.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AlertLevel {
    /// Warning (1)
    Warning = 1,

    /// Fatal (2)
    Fatal = 2,
}

impl AlertLevel {
    /// Create from wire format (u8).
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(AlertLevel::Warning),
            2 => Some(AlertLevel::Fatal),
            _ => None,
        }
    }

    /// Convert to wire format (u8).
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

/// TLS alert descriptions (RFC 5246 Section 7.2, RFC 8446 Section 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AlertDescription {
    /// Close notify
    CloseNotify = 0,

    /// Unexpected message
    UnexpectedMessage = 10,

    /// Bad record MAC
    BadRecordMac = 20,

    /// Decryption failed (legacy, RFC 5246 reserved)
    DecryptionFailed = 21,

    /// Record overflow
    RecordOverflow = 22,

    /// Decompression failure
    DecompressionFailure = 30,

    /// Handshake failure
    HandshakeFailure = 40,

    /// Bad certificate
    BadCertificate = 42,

    /// Unsupported certificate
    UnsupportedCertificate = 43,

    /// Certificate revoked
    CertificateRevoked = 44,

    /// Certificate expired
    CertificateExpired = 45,

    /// Certificate unknown
    CertificateUnknown = 46,

    /// Illegal parameter
    IllegalParameter = 47,

    /// Unknown CA
    UnknownCa = 48,

    /// Access denied
    AccessDenied = 49,

    /// Decode error
    DecodeError = 50,

    /// Decrypt error
    DecryptError = 51,

    /// Protocol version not supported
    ProtocolVersion = 70,

    /// Insufficient security
    InsufficientSecurity = 71,

    /// Internal error
    InternalError = 80,

    /// Inappropriate fallback
    InappropriateFallback = 86,

    /// User canceled
    UserCanceled = 90,

    /// No renegotiation
    NoRenegotiation = 100,

    /// Unsupported extension
    UnsupportedExtension = 110,
}

impl AlertDescription {
    /// Convert from wire format (u8).
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(AlertDescription::CloseNotify),
            10 => Some(AlertDescription::UnexpectedMessage),
            20 => Some(AlertDescription::BadRecordMac),
            21 => Some(AlertDescription::DecryptionFailed),
            22 => Some(AlertDescription::RecordOverflow),
            30 => Some(AlertDescription::DecompressionFailure),
            40 => Some(AlertDescription::HandshakeFailure),
            42 => Some(AlertDescription::BadCertificate),
            43 => Some(AlertDescription::UnsupportedCertificate),
            44 => Some(AlertDescription::CertificateRevoked),
            45 => Some(AlertDescription::CertificateExpired),
            46 => Some(AlertDescription::CertificateUnknown),
            47 => Some(AlertDescription::IllegalParameter),
            48 => Some(AlertDescription::UnknownCa),
            49 => Some(AlertDescription::AccessDenied),
            50 => Some(AlertDescription::DecodeError),
            51 => Some(AlertDescription::DecryptError),
            70 => Some(AlertDescription::ProtocolVersion),
            71 => Some(AlertDescription::InsufficientSecurity),
            80 => Some(AlertDescription::InternalError),
            86 => Some(AlertDescription::InappropriateFallback),
            90 => Some(AlertDescription::UserCanceled),
            100 => Some(AlertDescription::NoRenegotiation),
            110 => Some(AlertDescription::UnsupportedExtension),
            _ => None,
        }
    }

    /// Convert to wire format (u8).
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Check if this alert terminates the connection.
    ///
    /// close_notify is the only warning-level description.
    pub const fn is_fatal(self) -> bool {
        !matches!(self, AlertDescription::CloseNotify)
    }

    /// The alert level implied by this description.
    pub const fn level(self) -> AlertLevel {
        if self.is_fatal() {
            AlertLevel::Fatal
        } else {
            AlertLevel::Warning
        }
    }
}

/// TLS alert message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    /// Alert level
    pub level: AlertLevel,

    /// Alert description
    pub description: AlertDescription,
}

impl Alert {
    /// Create an alert at the level its description implies.
    pub const fn new(description: AlertDescription) -> Self {
        Self {
            level: description.level(),
            description,
        }
    }

    /// Create a fatal alert.
    pub const fn fatal(description: AlertDescription) -> Self {
        Self {
            level: AlertLevel::Fatal,
            description,
        }
    }

    /// Create a close_notify alert.
    pub const fn close_notify() -> Self {
        Self {
            level: AlertLevel::Warning,
            description: AlertDescription::CloseNotify,
        }
    }

    /// Encode the alert to its 2-byte wire form.
    pub const fn encode(self) -> [u8; 2] {
        [self.level.to_u8(), self.description.to_u8()]
    }

    /// Decode an alert from bytes.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() != 2 {
            return Err(Error::DecodeError(format!(
                "alert must be 2 bytes, got {}",
                data.len()
            )));
        }

        let level = AlertLevel::from_u8(data[0])
            .ok_or_else(|| Error::DecodeError(format!("invalid alert level {}", data[0])))?;

        let description = AlertDescription::from_u8(data[1])
            .ok_or_else(|| Error::DecodeError(format!("invalid alert description {}", data[1])))?;

        Ok(Self { level, description })
    }

    /// Check if this alert terminates the connection.
    pub const fn is_fatal(self) -> bool {
        matches!(self.level, AlertLevel::Fatal) || self.description.is_fatal()
    }
}
