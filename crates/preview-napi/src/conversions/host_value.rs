//! Raw JS value → `serde_json::Value`.
//!
//! napi's serde conversion rejects a whole argument when any nested value is
//! a function, symbol or BigInt, and drops properties set to `undefined`.
//! This decoder maps all of those to `null` instead, so the tree builder
//! skips only that entry and a parameter set to `undefined` renders as `""`.

use napi::bindgen_prelude::{JsObjectValue, Object, Unknown};
use napi::{JsValue, ValueType};
use serde_json::{Map, Number, Value};

/// Largest integer a JS number holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Walks a host value down to `max_depth` levels of nesting.
///
/// Objects nested deeper than that decode as empty containers: the tree
/// builder skips them by depth without reading their contents.
#[derive(Debug, Clone, Copy)]
pub struct HostDecoder {
    max_depth: usize,
}

impl HostDecoder {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn decode(&self, value: &Unknown<'_>) -> napi::Result<Value> {
        self.decode_at(value, 0)
    }

    /// Decode a trailing optional argument. `undefined` (including an
    /// omitted argument) is absent; `null` is present.
    pub fn decode_optional(&self, value: &Unknown<'_>) -> napi::Result<Option<Value>> {
        if value.get_type()? == ValueType::Undefined {
            return Ok(None);
        }
        self.decode(value).map(Some)
    }

    fn decode_at(&self, value: &Unknown<'_>, depth: usize) -> napi::Result<Value> {
        let ty = value.get_type()?;
        // SAFETY: each cast below matches the type reported by `get_type`.
        let decoded = match ty {
            ValueType::String => Value::String(unsafe { value.cast::<String>() }?),
            ValueType::Number => number_value(unsafe { value.cast::<f64>() }?),
            ValueType::Boolean => Value::Bool(unsafe { value.cast::<bool>() }?),
            ValueType::Object => {
                let object: Object<'_> = unsafe { value.cast() }?;
                let is_array = object.is_array()?;
                if depth > self.max_depth {
                    empty_container(is_array)
                } else if is_array {
                    self.decode_array(&object, depth)?
                } else {
                    self.decode_object(&object, depth)?
                }
            }
            other => opaque_value(other),
        };
        Ok(decoded)
    }

    fn decode_array(&self, array: &Object<'_>, depth: usize) -> napi::Result<Value> {
        let len = array.get_array_length_unchecked()?;
        let mut items = Vec::with_capacity(len as usize);
        for index in 0..len {
            let item: Unknown<'_> = array.get_element(index)?;
            items.push(self.decode_at(&item, depth + 1)?);
        }
        Ok(Value::Array(items))
    }

    fn decode_object(&self, object: &Object<'_>, depth: usize) -> napi::Result<Value> {
        let names = object.get_property_names()?;
        let len = names.get_array_length_unchecked()?;
        let mut map = Map::new();
        for index in 0..len {
            let key: Unknown<'_> = names.get_element(index)?;
            // SAFETY: property names come back as strings.
            let name: String = unsafe { key.cast() }?;
            let child: Unknown<'_> = object.get_property(key)?;
            map.insert(name, self.decode_at(&child, depth + 1)?);
        }
        Ok(Value::Object(map))
    }
}

/// JS number → JSON number.
///
/// Integral values within the safe range become integers, which also folds
/// `-0` into `0`. `NaN` and the infinities become `null`.
pub fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Value::from(n as i64);
    }
    Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
}

/// Host values with no JSON form.
fn opaque_value(ty: ValueType) -> Value {
    tracing::trace!(value_type = %ty, "host value has no JSON form, decoding as null");
    Value::Null
}

fn empty_container(is_array: bool) -> Value {
    if is_array {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}
