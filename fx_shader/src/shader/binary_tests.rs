use super::*;

// ============================================================================
// Reader
// ============================================================================

#[test]
fn test_read_little_endian_scalars() {
    let bytes = [
        0x01, // bool
        0x34, 0x12, // i16
        0x78, 0x56, 0x34, 0x12, // i32
        0x00, 0x00, 0x80, 0x3f, // f32 1.0
    ];
    let mut reader = BinaryReader::new(&bytes);
    assert!(reader.read_bool("flag").unwrap());
    assert_eq!(reader.read_i16("short").unwrap(), 0x1234);
    assert_eq!(reader.read_i32("int").unwrap(), 0x1234_5678);
    assert_eq!(reader.read_f32("float").unwrap(), 1.0);
    assert_eq!(reader.remaining(), 0);
    assert_eq!(reader.position(), bytes.len());
}

#[test]
fn test_bool_nonzero_is_true() {
    let mut reader = BinaryReader::new(&[0x00, 0x02]);
    assert!(!reader.read_bool("a").unwrap());
    assert!(reader.read_bool("b").unwrap());
}

#[test]
fn test_short_read_names_field_and_offset() {
    let mut reader = BinaryReader::new(&[0x01, 0x02]);
    reader.read_u8("first").unwrap();
    match reader.read_i32("max anisotropy") {
        Err(Error::MalformedStream(msg)) => {
            assert!(msg.contains("max anisotropy"), "{}", msg);
            assert!(msg.contains("offset 1"), "{}", msg);
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_length_prefixed_zero_is_empty() {
    let mut reader = BinaryReader::new(&[0, 0, 0, 0]);
    assert!(reader.read_length_prefixed("payload").unwrap().is_empty());
}

#[test]
fn test_length_prefixed_rejects_negative_and_oversized() {
    let negative = (-1i32).to_le_bytes();
    assert!(matches!(
        BinaryReader::new(&negative).read_length_prefixed("payload"),
        Err(Error::MalformedStream(_))
    ));

    let mut oversized = 10i32.to_le_bytes().to_vec();
    oversized.extend_from_slice(b"short");
    assert!(matches!(
        BinaryReader::new(&oversized).read_length_prefixed("payload"),
        Err(Error::MalformedStream(_))
    ));
}

#[test]
fn test_read_string_multi_byte_prefix() {
    let name = "u".repeat(200);
    let mut bytes = vec![0xc8, 0x01]; // 200 as varint
    bytes.extend_from_slice(name.as_bytes());
    let mut reader = BinaryReader::new(&bytes);
    assert_eq!(reader.read_string("name").unwrap(), name);
}

#[test]
fn test_read_string_rejects_bad_prefix_and_utf8() {
    let overlong = [0xff, 0xff, 0xff, 0xff, 0xff, 0x01];
    assert!(matches!(
        BinaryReader::new(&overlong).read_string("name"),
        Err(Error::MalformedStream(_))
    ));

    let invalid = [0x02, 0xc3, 0x28];
    assert!(matches!(
        BinaryReader::new(&invalid).read_string("name"),
        Err(Error::MalformedStream(_))
    ));
}

// ============================================================================
// Writer
// ============================================================================

#[test]
fn test_writer_matches_reader_layout() {
    let mut writer = BinaryWriter::new();
    assert!(writer.is_empty());
    writer.write_bool(true);
    writer.write_i16(-2);
    writer.write_i32(-70000);
    writer.write_f32(-0.5);
    writer.write_string("Texture");
    writer.write_length_prefixed(b"ABC").unwrap();
    writer.write_u8(9);
    let bytes = writer.into_bytes();

    let mut reader = BinaryReader::new(&bytes);
    assert!(reader.read_bool("flag").unwrap());
    assert_eq!(reader.read_i16("short").unwrap(), -2);
    assert_eq!(reader.read_i32("int").unwrap(), -70000);
    assert_eq!(reader.read_f32("float").unwrap(), -0.5);
    assert_eq!(reader.read_string("name").unwrap(), "Texture");
    assert_eq!(reader.read_length_prefixed("payload").unwrap(), b"ABC");
    assert_eq!(reader.read_u8("byte").unwrap(), 9);
    assert_eq!(reader.remaining(), 0);
}

#[test]
fn test_writer_varint_encoding() {
    let mut writer = BinaryWriter::new();
    writer.write_string(&"x".repeat(128));
    let bytes = writer.into_bytes();
    assert_eq!(&bytes[..2], &[0x80, 0x01]);
    assert_eq!(bytes.len(), 130);
}
