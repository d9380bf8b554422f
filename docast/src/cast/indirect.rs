use crate::common::Value;

static NULL: Value = Value::Null;

/// Follows reference chains down to the underlying value.
/// A null reference resolves to [Value::Null].
#[inline]
pub(crate) fn indirect(value: &Value) -> &Value {
    indirect_until(value, |_| false)
}

/// Like [indirect], but stops at the first value that renders itself.
#[inline]
pub(crate) fn indirect_to_self_describing(value: &Value) -> &Value {
    indirect_until(value, Value::is_self_describing)
}

fn indirect_until(mut value: &Value, stop: impl Fn(&Value) -> bool) -> &Value {
    loop {
        if stop(value) {
            return value;
        }
        match value {
            Value::Ref(Some(target)) => value = target,
            Value::Ref(None) => return &NULL,
            _ => return value,
        }
    }
}
