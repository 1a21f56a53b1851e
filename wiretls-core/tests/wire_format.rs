//! Wire format tests: exact byte layouts for records, handshake
//! messages, alerts, ChangeCipherSpec, and AEAD additional data.

use wiretls_core::handshake::{Certificate, Finished, ServerHelloDone, ServerKeyExchange};
use wiretls_core::{
    Aad, Alert, AlertDescription, AlertLevel, BulkCipher, ChangeCipherSpec, ContentType, Error,
    Handshake, HandshakeBody, HandshakeType, ProtocolVersion, Record, RecordPayload,
    MAX_FRAGMENT_SIZE,
};

#[test]
fn finished_message_exact_bytes() {
    let msg = Handshake::new(HandshakeBody::Finished(Finished::new(vec![1, 2, 3, 4, 5])));
    let wire = msg.encode().unwrap();
    assert_eq!(wire, [0x14, 0x00, 0x00, 0x05, 1, 2, 3, 4, 5]);

    let decoded = Handshake::decode(&wire).unwrap();
    assert_eq!(decoded, msg);
    assert_eq!(decoded.header.length, 5);
}

#[test]
fn record_header_exact_bytes() {
    let record = Record::new(
        ContentType::Handshake,
        ProtocolVersion::Tls12,
        vec![0xAB; 3],
    )
    .unwrap();
    let wire = record.encode();
    assert_eq!(&wire[..5], &[0x16, 0x03, 0x03, 0x00, 0x03]);
    assert_eq!(&wire[5..], &[0xAB, 0xAB, 0xAB]);
}

#[test]
fn record_length_boundary() {
    assert!(Record::new(
        ContentType::ApplicationData,
        ProtocolVersion::Tls12,
        vec![0; MAX_FRAGMENT_SIZE],
    )
    .is_ok());

    match Record::new(
        ContentType::ApplicationData,
        ProtocolVersion::Tls12,
        vec![0; MAX_FRAGMENT_SIZE + 1],
    ) {
        Err(Error::RecordOverflow { length }) => assert_eq!(length, 16385),
        other => panic!("expected RecordOverflow, got {:?}", other),
    }
}

#[test]
fn coalesced_server_flight_in_one_record() {
    let flight = [
        Handshake::new(HandshakeBody::Certificate(Certificate::new(vec![vec![
            0x30, 0x82, 0x01, 0x0A,
        ]]))),
        Handshake::new(HandshakeBody::ServerKeyExchange(ServerKeyExchange::new(
            vec![0x03, 0x00, 0x17],
        ))),
        Handshake::new(HandshakeBody::ServerHelloDone(ServerHelloDone::new())),
    ];

    let mut fragment = Vec::new();
    for msg in &flight {
        fragment.extend(msg.encode().unwrap());
    }
    let record = Record::new(ContentType::Handshake, ProtocolVersion::Tls12, fragment).unwrap();

    match record.payload().unwrap() {
        RecordPayload::Handshake(messages) => {
            assert_eq!(messages.len(), 3);
            assert_eq!(messages[0].handshake_type(), HandshakeType::Certificate);
            assert_eq!(
                messages[1].handshake_type(),
                HandshakeType::ServerKeyExchange
            );
            assert_eq!(messages[2].handshake_type(), HandshakeType::ServerHelloDone);
            assert_eq!(messages[2], flight[2]);
        }
        other => panic!("expected handshake payload, got {:?}", other),
    }
}

#[test]
fn alert_wire_form() {
    let alert = Alert::fatal(AlertDescription::HandshakeFailure);
    assert_eq!(alert.encode(), [2, 40]);

    let decoded = Alert::decode(&[1, 0]).unwrap();
    assert_eq!(decoded.level, AlertLevel::Warning);
    assert_eq!(decoded.description, AlertDescription::CloseNotify);
    assert!(!decoded.is_fatal());

    assert!(Alert::decode(&[2]).is_err());
    assert!(Alert::decode(&[2, 40, 0]).is_err());
}

#[test]
fn alert_record_round_trip() {
    let record = Record::new(
        ContentType::Alert,
        ProtocolVersion::Tls12,
        Alert::close_notify().encode().to_vec(),
    )
    .unwrap();
    match record.payload().unwrap() {
        RecordPayload::Alert(alert) => {
            assert_eq!(alert.description, AlertDescription::CloseNotify);
        }
        other => panic!("expected alert payload, got {:?}", other),
    }
}

#[test]
fn change_cipher_spec_wire_form() {
    assert_eq!(ChangeCipherSpec::new().encode(), [1]);
    assert!(ChangeCipherSpec::decode(&[1]).is_ok());
    assert!(ChangeCipherSpec::decode(&[0]).is_err());
    assert!(ChangeCipherSpec::decode(&[1, 1]).is_err());
    assert!(ChangeCipherSpec::decode(&[]).is_err());
}

#[test]
fn aad_layout_and_record_view() {
    let aad = Aad {
        sequence_number: 1,
        content_type: ContentType::ApplicationData,
        version: ProtocolVersion::Tls12,
        length: 256,
    };
    assert_eq!(
        aad.encode(),
        [0, 0, 0, 0, 0, 0, 0, 1, 23, 0x03, 0x03, 0x01, 0x00]
    );

    // Protected record view: 8-byte explicit nonce then ciphertext.
    let fragment: Vec<u8> = (0..32).collect();
    let record = Record::new(
        ContentType::ApplicationData,
        ProtocolVersion::Tls12,
        fragment.clone(),
    )
    .unwrap();
    let enc = record.encrypted();
    assert_eq!(enc.content_type(), ContentType::ApplicationData);
    assert_eq!(enc.nonce(BulkCipher::Aes128Gcm).unwrap(), &fragment[..8]);
    assert_eq!(
        enc.ciphertext(BulkCipher::Aes128Gcm).unwrap(),
        &fragment[8..]
    );
}
