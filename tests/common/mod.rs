//! Reference encoder producing SafeInCloud containers from fixed salts and IVs
#![allow(dead_code)]

use aes::Aes256;
use cipher::block_padding::NoPadding;
use cipher::{BlockEncryptMut, KeyIvInit};
use hmac::Hmac;
use sha1::Sha1;
use std::io::Write;

pub const PASSWORD: &str = "correct horse battery staple";

pub const SAMPLE_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    "\n<database>\n",
    "\t<label name=\"Banking\" id=\"1\" type=\"10\"/>\n",
    "\t<card title=\"Bank\" id=\"2\" symbol=\"bank\" color=\"blue\">\n",
    "\t\t<field name=\"Login\" type=\"login\">alice</field>\n",
    "\t\t<field name=\"Password\" type=\"password\">s3cr&amp;t</field>\n",
    "\t\t<label_id>1</label_id>\n",
    "\t\t<notes>line one</notes>\n",
    "\t</card>\n",
    "</database>\n"
);

pub const SAMPLE_CANONICAL_BODY: &str = concat!(
    "<database>\n",
    "  <label name=\"Banking\" id=\"1\" type=\"10\"></label>\n",
    "  <card title=\"Bank\" id=\"2\" symbol=\"bank\" color=\"blue\">\n",
    "    <field name=\"Login\" type=\"login\">alice</field>\n",
    "    <field name=\"Password\" type=\"password\">s3cr&amp;t</field>\n",
    "    <label_id>1</label_id>\n",
    "    <notes>line one</notes>\n",
    "  </card>\n",
    "</database>"
);

pub struct Fixture {
    pub salt: Vec<u8>,
    pub iv: Vec<u8>,
    pub secret_salt: Vec<u8>,
    pub secret_iv: Vec<u8>,
    pub secret_key: Vec<u8>,
}

impl Default for Fixture {
    fn default() -> Fixture {
        Fixture {
            salt: (0u8..16).collect(),
            iv: (16u8..32).collect(),
            secret_salt: (32u8..48).collect(),
            secret_iv: (48u8..64).collect(),
            secret_key: (64u8..96).collect(),
        }
    }
}

pub fn pbkdf2_sha1(secret: &[u8], salt: &[u8], rounds: u32) -> [u8; 32] {
    let mut key = [0u8; 32];
    pbkdf2::pbkdf2::<Hmac<Sha1>>(secret, salt, rounds, &mut key).unwrap();
    key
}

/// Zero fill to a whole number of blocks, then AES-256-CBC encrypt
pub fn encrypt(mut data: Vec<u8>, key: &[u8], iv: &[u8]) -> Vec<u8> {
    let padded_len = (data.len() + 15) / 16 * 16;
    data.resize(padded_len, 0);
    cbc::Encryptor::<Aes256>::new_from_slices(key, iv)
        .unwrap()
        .encrypt_padded_mut::<NoPadding>(&mut data, padded_len)
        .unwrap();
    data
}

pub fn zlib(data: &[u8]) -> Vec<u8> {
    let mut encoder = libflate::zlib::Encoder::new(Vec::new()).unwrap();
    encoder.write_all(data).unwrap();
    encoder.finish().into_result().unwrap()
}

pub fn push_block(out: &mut Vec<u8>, block: &[u8]) {
    out.push(u8::try_from(block.len()).unwrap());
    out.extend_from_slice(block);
}

/// Encrypted secrets blob for the given fixture and password
pub fn encrypted_secrets(fixture: &Fixture, password: &str) -> Vec<u8> {
    let checksum = pbkdf2_sha1(&fixture.secret_key, &fixture.secret_salt, 1000);
    let mut blob = Vec::new();
    push_block(&mut blob, &fixture.secret_iv);
    push_block(&mut blob, &fixture.secret_key);
    push_block(&mut blob, &checksum);
    let outer_key = pbkdf2_sha1(password.as_bytes(), &fixture.salt, 10000);
    encrypt(blob, &outer_key, &fixture.iv)
}

/// Container header up to and including the encrypted secrets
pub fn header_bytes(fixture: &Fixture, encrypted_secrets: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&1285i16.to_le_bytes());
    out.push(1);
    push_block(&mut out, &fixture.salt);
    push_block(&mut out, &fixture.iv);
    push_block(&mut out, &fixture.secret_salt);
    push_block(&mut out, encrypted_secrets);
    out
}

/// Build a container whose payload plaintext is `payload`, which should be zlib data
pub fn encode_payload(fixture: &Fixture, password: &str, payload: &[u8]) -> Vec<u8> {
    let secrets = encrypted_secrets(fixture, password);
    let mut out = header_bytes(fixture, &secrets);
    out.extend(encrypt(
        payload.to_vec(),
        &fixture.secret_key,
        &fixture.secret_iv,
    ));
    out
}

pub fn encode(document: &[u8], password: &str) -> Vec<u8> {
    encode_payload(&Fixture::default(), password, &zlib(document))
}

/// Strip the XML declaration from canonical output
pub fn body(output: &[u8]) -> String {
    let text = String::from_utf8(output.to_vec()).unwrap();
    let after_decl = match text.find("?>") {
        Some(idx) if text.starts_with("<?xml") => &text[idx + 2..],
        _ => &text[..],
    };
    after_decl.trim_start_matches('\n').to_string()
}
