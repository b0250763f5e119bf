use std::collections::HashSet;
use std::fmt;

use num_bigint::BigInt;
use num_traits::Num;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{radix_in_range, KEYS_FIELD};
use crate::error::DecodeError;
use crate::interpolate::reconstruct;
use crate::point::Point;
use crate::secret::Secret;

/// A decoded share document: the threshold and the points, in document order.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ShareSet {
    pub threshold: usize,
    // `keys.n`, when the document states it
    pub declared_count: Option<usize>,
    pub points: Vec<Point>,
}

impl ShareSet {
    pub fn reconstruct(&self) -> crate::error::Result<Secret> {
        reconstruct(&self.points, self.threshold)
    }
}

#[derive(Debug, Deserialize)]
struct Keys {
    n: Option<usize>,
    k: usize,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBase {
    Text(String),
    Number(u64),
}

#[derive(Debug, Deserialize)]
struct EncodedShare {
    base: RawBase,
    value: String,
}

// Top-level members exactly as written, repeated keys included.
struct Members(Vec<(String, Value)>);

struct MembersVisitor;

impl<'de> Visitor<'de> for MembersVisitor {
    type Value = Members;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a share document object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Members, A::Error> {
        let mut members = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry::<String, serde_json::Value>()? {
            members.push(entry);
        }
        Ok(Members(members))
    }
}

impl<'de> Deserialize<'de> for Members {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MembersVisitor)
    }
}

/*
    Expected layout:
    {
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        ...
    }
    Every member except "keys" is a share keyed by its x-coordinate.
    A key that appears twice makes the whole document invalid.
*/
pub fn decode_document(json: &str) -> Result<ShareSet, DecodeError> {
    let Members(members) = serde_json::from_str::<Members>(json)?;
    decode_members(members)
}

fn decode_members(members: Vec<(String, Value)>) -> Result<ShareSet, DecodeError> {
    let mut seen = HashSet::with_capacity(members.len());
    let mut keys = None;
    let mut points = Vec::with_capacity(members.len());

    for (key, value) in members {
        if !seen.insert(key.clone()) {
            return Err(DecodeError::DuplicateShare { key });
        }
        if key == KEYS_FIELD {
            keys = Some(value);
        } else {
            points.push(decode_share(&key, value)?);
        }
    }

    let keys = keys.ok_or_else(|| DecodeError::MissingField {
        field: KEYS_FIELD.to_string(),
    })?;
    let keys: Keys = serde_json::from_value(keys).map_err(|source| DecodeError::InvalidField {
        field: KEYS_FIELD.to_string(),
        expected: "object with an integer `k`",
        source,
    })?;

    if let Some(n) = keys.n {
        if n != points.len() {
            warn!(declared = n, found = points.len(), "share count differs from keys.n");
        }
    }

    Ok(ShareSet {
        threshold: keys.k,
        declared_count: keys.n,
        points,
    })
}

fn decode_share(key: &str, value: Value) -> Result<Point, DecodeError> {
    // plain decimal digits only, so "+1" or "01" cannot alias share 1
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    let x: u64 = key
        .parse()
        .ok()
        .filter(|_| canonical)
        .ok_or_else(|| DecodeError::InvalidShareIndex {
            key: key.to_string(),
        })?;

    let share: EncodedShare =
        serde_json::from_value(value).map_err(|source| DecodeError::InvalidField {
            field: key.to_string(),
            expected: "share object with `base` and `value`",
            source,
        })?;

    let radix = match &share.base {
        RawBase::Text(text) => text.trim().parse::<u32>().ok(),
        RawBase::Number(number) => u32::try_from(*number).ok(),
    }
    .filter(|radix| radix_in_range(*radix))
    .ok_or_else(|| DecodeError::InvalidRadix {
        x,
        base: match &share.base {
            RawBase::Text(text) => text.clone(),
            RawBase::Number(number) => number.to_string(),
        },
    })?;

    let y = parse_radix(&share.value, radix).ok_or_else(|| DecodeError::InvalidDigits {
        x,
        value: share.value.clone(),
        radix,
    })?;

    debug!(x, radix, value = %share.value, y = %y, "decoded share");
    Ok(Point { x, y })
}

/// Parses `digits` in base `radix` (2..=36). Letters are case-insensitive and
/// a single leading sign is allowed. Returns `None` for anything else.
pub fn parse_radix(digits: &str, radix: u32) -> Option<BigInt> {
    if !radix_in_range(radix) || digits.is_empty() || digits.contains('_') {
        return None;
    }
    BigInt::from_str_radix(digits, radix).ok()
}
