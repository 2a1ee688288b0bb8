// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Send-message normalization.
//!
//! A message pulled out of a transaction body can arrive in one of two
//! incompatible encodings: the typed protobuf `Any` envelope used natively
//! by the chain, or the legacy string-keyed amino envelope. This module
//! probes the encodings in order and produces one normalized
//! [`MsgSend`]-shaped result.
//!
//! Decode failures never surface to callers. The fallback chain degrades
//! to an empty message, so downstream receipt assembly must tolerate empty
//! addresses and a missing amount entry.

use serde::Deserialize;
use serde_json::Value;

use cosmrs::proto::cosmos::bank::v1beta1::MsgSend;
use cosmrs::proto::cosmos::base::v1beta1::Coin;
use cosmrs::proto::traits::Message;
use cosmrs::Any;

use crate::config::Network;

/// Protobuf type URL identifying a bank send message.
pub const MSG_SEND_TYPE_URL: &str = "/cosmos.bank.v1beta1.MsgSend";

/// Amino type string identifying a bank send message.
pub const MSG_SEND_AMINO_TYPE: &str = "cosmos-sdk/MsgSend";

/// The first message entry of a decoded transaction body, before its
/// encoding is known.
#[derive(Debug, Clone)]
pub enum RawMessage {
    /// Typed protobuf envelope (type URL + binary payload).
    Proto(Any),
    /// Legacy amino envelope (`{"type": ..., "value": ...}` document).
    Amino(Value),
}

/// Outcome of one probe: either the message matched the probed encoding
/// and decoded, or it is not a send message in that encoding.
enum Probe {
    Matched(MsgSend),
    Unmatched,
}

/// Failures inside a probe. Callers of [`normalize_send`] never see these;
/// they are logged and swallowed by the fallback chain.
#[derive(Debug, thiserror::Error)]
enum MsgDecodeError {
    #[error("protobuf payload: {0}")]
    Payload(String),

    #[error("amino document: {0}")]
    Amino(String),

    #[error("address {0:?} does not carry prefix {1:?}")]
    Prefix(String, &'static str),
}

/// Amino envelope: a type tag plus an untyped value document.
#[derive(Debug, Deserialize)]
struct AminoMsg {
    #[serde(rename = "type")]
    type_tag: String,
    value: Value,
}

#[derive(Debug, Deserialize)]
struct AminoMsgSend {
    from_address: String,
    to_address: String,
    #[serde(default)]
    amount: Vec<AminoCoin>,
}

#[derive(Debug, Deserialize)]
struct AminoCoin {
    denom: String,
    amount: String,
}

/// Amino to protobuf translation scoped to a bech32 prefix.
///
/// Documents whose addresses do not carry the configured prefix are
/// rejected.
pub struct AminoTypes {
    prefix: &'static str,
}

impl AminoTypes {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    /// Translate an amino send document into a protobuf `Any` envelope.
    fn from_amino(&self, doc: &Value) -> Result<Any, MsgDecodeError> {
        let msg: AminoMsg = serde_json::from_value(doc.clone())
            .map_err(|e| MsgDecodeError::Amino(e.to_string()))?;
        if msg.type_tag != MSG_SEND_AMINO_TYPE {
            return Err(MsgDecodeError::Amino(format!(
                "unsupported amino type {:?}",
                msg.type_tag
            )));
        }

        let send: AminoMsgSend = serde_json::from_value(msg.value)
            .map_err(|e| MsgDecodeError::Amino(e.to_string()))?;
        for address in [&send.from_address, &send.to_address] {
            if !address.starts_with(self.prefix) {
                return Err(MsgDecodeError::Prefix(address.clone(), self.prefix));
            }
        }

        let translated = MsgSend {
            from_address: send.from_address,
            to_address: send.to_address,
            amount: send
                .amount
                .into_iter()
                .map(|c| Coin {
                    denom: c.denom,
                    amount: c.amount,
                })
                .collect(),
        };

        Ok(Any {
            type_url: MSG_SEND_TYPE_URL.to_string(),
            value: translated.encode_to_vec(),
        })
    }
}

/// Probe the protobuf shape: envelope must be `Proto` and its type URL
/// must identify a send message.
fn probe_proto(raw: &RawMessage) -> Result<Probe, MsgDecodeError> {
    let RawMessage::Proto(any) = raw else {
        return Ok(Probe::Unmatched);
    };
    if any.type_url != MSG_SEND_TYPE_URL {
        return Ok(Probe::Unmatched);
    }
    let msg = MsgSend::decode(any.value.as_slice())
        .map_err(|e| MsgDecodeError::Payload(e.to_string()))?;
    Ok(Probe::Matched(msg))
}

/// Probe the amino shape: envelope must be `Amino` and its type tag must
/// identify a send message. The document is translated to a protobuf
/// envelope, which is then re-checked and decoded the same way as a
/// native one.
fn probe_amino(raw: &RawMessage, prefix: &'static str) -> Result<Probe, MsgDecodeError> {
    let RawMessage::Amino(doc) = raw else {
        return Ok(Probe::Unmatched);
    };
    match doc.get("type").and_then(Value::as_str) {
        Some(tag) if tag == MSG_SEND_AMINO_TYPE => {}
        _ => return Ok(Probe::Unmatched),
    }
    let translated = AminoTypes::new(prefix).from_amino(doc)?;
    probe_proto(&RawMessage::Proto(translated))
}

/// Normalize a raw transaction message into a send message.
///
/// Probes the protobuf shape first, then the amino shape with the
/// network's prefix-scoped translation. If
/// neither matches, or a probe fails to decode, the failure is logged and
/// the empty message is returned: all fields empty, no amount entry.
pub fn normalize_send(raw: &RawMessage, network: &Network) -> MsgSend {
    match probe_proto(raw) {
        Ok(Probe::Matched(msg)) => return msg,
        Ok(Probe::Unmatched) => {}
        Err(err) => tracing::debug!(%err, "message is not a protobuf send"),
    }

    match probe_amino(raw, network.bech32_prefix) {
        Ok(Probe::Matched(msg)) => return msg,
        Ok(Probe::Unmatched) => {}
        Err(err) => tracing::warn!(%err, "failed to decode transaction message"),
    }

    MsgSend::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TESTNET;
    use serde_json::json;

    const FROM: &str = "osmo1hsk6jryyqjfhp5dhc55tc9jtckygx0eph6dd02";
    const TO: &str = "osmo1aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    fn sample_send() -> MsgSend {
        MsgSend {
            from_address: FROM.to_string(),
            to_address: TO.to_string(),
            amount: vec![Coin {
                denom: "uosmo".to_string(),
                amount: "5".to_string(),
            }],
        }
    }

    fn proto_envelope(msg: &MsgSend) -> RawMessage {
        RawMessage::Proto(Any {
            type_url: MSG_SEND_TYPE_URL.to_string(),
            value: msg.encode_to_vec(),
        })
    }

    fn amino_envelope() -> RawMessage {
        RawMessage::Amino(json!({
            "type": MSG_SEND_AMINO_TYPE,
            "value": {
                "from_address": FROM,
                "to_address": TO,
                "amount": [{"denom": "uosmo", "amount": "5"}],
            }
        }))
    }

    #[test]
    fn proto_send_normalizes() {
        let expected = sample_send();
        let got = normalize_send(&proto_envelope(&expected), &TESTNET);
        assert_eq!(got, expected);
    }

    #[test]
    fn amino_send_matches_proto_equivalent() {
        let via_proto = normalize_send(&proto_envelope(&sample_send()), &TESTNET);
        let via_amino = normalize_send(&amino_envelope(), &TESTNET);
        assert_eq!(via_amino, via_proto);
    }

    #[test]
    fn foreign_type_urls_degrade_to_empty() {
        let raw = RawMessage::Proto(Any {
            type_url: "/cosmos.staking.v1beta1.MsgDelegate".to_string(),
            value: sample_send().encode_to_vec(),
        });
        assert_eq!(normalize_send(&raw, &TESTNET), MsgSend::default());
    }

    #[test]
    fn corrupt_proto_payload_degrades_to_empty() {
        let raw = RawMessage::Proto(Any {
            type_url: MSG_SEND_TYPE_URL.to_string(),
            value: vec![0xff, 0xff, 0xff, 0xff],
        });
        assert_eq!(normalize_send(&raw, &TESTNET), MsgSend::default());
    }

    #[test]
    fn foreign_amino_type_degrades_to_empty() {
        let raw = RawMessage::Amino(json!({
            "type": "cosmos-sdk/MsgDelegate",
            "value": {}
        }));
        assert_eq!(normalize_send(&raw, &TESTNET), MsgSend::default());
    }

    #[test]
    fn amino_with_foreign_prefix_degrades_to_empty() {
        let raw = RawMessage::Amino(json!({
            "type": MSG_SEND_AMINO_TYPE,
            "value": {
                "from_address": "cosmos1hsk6jryyqjfhp5dhc55tc9jtckygx0evm",
                "to_address": TO,
                "amount": [{"denom": "uosmo", "amount": "5"}],
            }
        }));
        assert_eq!(normalize_send(&raw, &TESTNET), MsgSend::default());
    }

    #[test]
    fn amino_without_amount_list_still_normalizes() {
        let raw = RawMessage::Amino(json!({
            "type": MSG_SEND_AMINO_TYPE,
            "value": {
                "from_address": FROM,
                "to_address": TO,
            }
        }));
        let got = normalize_send(&raw, &TESTNET);
        assert_eq!(got.from_address, FROM);
        assert!(got.amount.is_empty());
    }

    #[test]
    fn structureless_document_degrades_to_empty() {
        let raw = RawMessage::Amino(json!("not an envelope"));
        assert_eq!(normalize_send(&raw, &TESTNET), MsgSend::default());
    }
}
