//! Property maps <-> `google.protobuf.Struct`.
//!
//! `Struct` carries every JSON number as a double, so the wire cannot tell
//! `1` from `1.0`. On decode, every whole-number double within 2^53 comes back
//! as a JSON integer: integers up to 53 bits round-trip exactly, while
//! whole-number floats such as `1.0` come back as `1`. `-0.0` stays a float.
//! Other finite doubles come back as floats. Non-finite doubles have no JSON
//! form and decode to `null`.

use azclient_sdk::Properties;
use prost_types::value::Kind;
use prost_types::{ListValue, NullValue, Struct, Value};
use serde_json::Value as Json;

/// Largest magnitude below which every integer is exactly representable as `f64` (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[must_use]
pub fn properties_to_struct(properties: &Properties) -> Struct {
    Struct {
        fields: properties
            .iter()
            .map(|(key, value)| (key.clone(), json_to_value(value)))
            .collect(),
    }
}

#[must_use]
pub fn struct_to_properties(wire: &Struct) -> Properties {
    wire.fields
        .iter()
        .map(|(key, value)| (key.clone(), value_to_json(value)))
        .collect()
}

#[must_use]
pub fn json_to_value(json: &Json) -> Value {
    let kind = match json {
        Json::Null => Kind::NullValue(NullValue::NullValue.into()),
        Json::Bool(b) => Kind::BoolValue(*b),
        Json::Number(n) => n
            .as_f64()
            .map_or(Kind::NullValue(NullValue::NullValue.into()), Kind::NumberValue),
        Json::String(s) => Kind::StringValue(s.clone()),
        Json::Array(items) => Kind::ListValue(ListValue {
            values: items.iter().map(json_to_value).collect(),
        }),
        Json::Object(map) => Kind::StructValue(Struct {
            fields: map
                .iter()
                .map(|(key, value)| (key.clone(), json_to_value(value)))
                .collect(),
        }),
    };
    Value { kind: Some(kind) }
}

#[must_use]
pub fn value_to_json(value: &Value) -> Json {
    match &value.kind {
        None | Some(Kind::NullValue(_)) => Json::Null,
        Some(Kind::BoolValue(b)) => Json::Bool(*b),
        Some(Kind::NumberValue(n)) => number_to_json(*n),
        Some(Kind::StringValue(s)) => Json::String(s.clone()),
        Some(Kind::ListValue(list)) => Json::Array(list.values.iter().map(value_to_json).collect()),
        Some(Kind::StructValue(wire)) => Json::Object(
            wire.fields
                .iter()
                .map(|(key, value)| (key.clone(), value_to_json(value)))
                .collect(),
        ),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn number_to_json(n: f64) -> Json {
    if n.is_finite()
        && n.fract() == 0.0
        && n.abs() <= MAX_EXACT_INTEGER
        && !(n == 0.0 && n.is_sign_negative())
    {
        return Json::from(n as i64);
    }
    serde_json::Number::from_f64(n).map_or(Json::Null, Json::Number)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    fn properties(value: Json) -> Properties {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn nested_property_map_round_trips() {
        let original = properties(json!({
            "name": "amy",
            "active": true,
            "age": 42,
            "negative": -7,
            "score": 0.75,
            "nothing": null,
            "tags": ["a", 1, false, null, { "deep": [[]] }],
            "address": {
                "city": "Milano",
                "geo": { "lat": 45.4642, "lon": 9.19 },
                "empty": {}
            }
        }));

        let wire = properties_to_struct(&original);
        assert_eq!(struct_to_properties(&wire), original);
    }

    #[test]
    fn whole_number_floats_decode_as_integers() {
        let original = properties(json!({ "ratio": 1.0, "neg": -0.0, "half": 0.5 }));

        let decoded = struct_to_properties(&properties_to_struct(&original));

        assert_eq!(decoded["ratio"], json!(1));
        assert!(decoded["ratio"].is_i64());
        assert!(decoded["neg"].is_f64());
        assert!(decoded["neg"].as_f64().unwrap().is_sign_negative());
        assert_eq!(decoded["half"], json!(0.5));
    }

    #[test]
    fn empty_map_round_trips_to_empty_map() {
        let wire = properties_to_struct(&Properties::new());

        assert!(wire.fields.is_empty());
        assert!(struct_to_properties(&wire).is_empty());
    }

    #[test]
    fn numbers_travel_as_doubles() {
        let wire = json_to_value(&json!(3));
        assert_eq!(wire.kind, Some(Kind::NumberValue(3.0)));

        assert_eq!(value_to_json(&wire), json!(3));
        assert_eq!(
            value_to_json(&Value {
                kind: Some(Kind::NumberValue(2.5))
            }),
            json!(2.5)
        );
    }

    #[test]
    fn integers_beyond_53_bits_stay_floats() {
        let decoded = value_to_json(&Value {
            kind: Some(Kind::NumberValue(1.0e20)),
        });

        assert!(decoded.is_f64());
    }

    #[test]
    fn kindless_and_non_finite_values_decode_to_null() {
        assert_eq!(value_to_json(&Value { kind: None }), Json::Null);
        assert_eq!(
            value_to_json(&Value {
                kind: Some(Kind::NumberValue(f64::NAN))
            }),
            Json::Null
        );
        assert_eq!(
            value_to_json(&Value {
                kind: Some(Kind::NumberValue(f64::INFINITY))
            }),
            Json::Null
        );
    }

    #[test]
    fn null_encodes_as_null_kind() {
        assert_eq!(
            json_to_value(&Json::Null).kind,
            Some(Kind::NullValue(NullValue::NullValue.into()))
        );
    }
}
