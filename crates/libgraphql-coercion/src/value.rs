use indexmap::IndexMap;

const MAX_INSPECT_LIST_LENGTH: usize = 10;
const MAX_INSPECT_DEPTH: usize = 2;

/// A dynamically-typed input value, either as received from outside (e.g.
/// decoded from a JSON variables payload) or as produced by coercion.
///
/// [`Value::Undefined`] represents the *absence* of a value and is distinct
/// from [`Value::Null`]. Coercion returns [`Value::Undefined`] wherever a
/// reported error prevented a result from being produced, so a coerced
/// [`Value::List`] may contain `Undefined` holes when errors were collected
/// rather than raised.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    Undefined,
}
impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        if let Self::List(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Self::Object(fields) = self {
            Some(fields)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// Indicates if this value is either [`Value::Null`] or
    /// [`Value::Undefined`].
    pub fn is_null_or_undefined(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Build an object value from `(key, value)` pairs, preserving their
    /// order.
    pub fn object<K: Into<String>>(
        entries: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        Self::Object(
            entries.into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect()
        )
    }

    /// Convert into a [`serde_json::Value`].
    ///
    /// [`Value::Undefined`] has no JSON counterpart: it becomes `null` inside
    /// lists and is dropped from objects. Non-finite floats become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Bool(value) => serde_json::Value::Bool(*value),
            Self::Float(value) =>
                serde_json::Number::from_f64(*value)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
            Self::Int(value) => serde_json::Value::Number((*value).into()),
            Self::List(items) => serde_json::Value::Array(
                items.iter().map(Value::to_json).collect(),
            ),
            Self::Null | Self::Undefined => serde_json::Value::Null,
            Self::Object(fields) => serde_json::Value::Object(
                fields.iter()
                    .filter(|(_, value)| !value.is_undefined())
                    .map(|(key, value)| (key.to_owned(), value.to_json()))
                    .collect(),
            ),
            Self::String(value) => serde_json::Value::String(value.to_owned()),
        }
    }

    fn fmt_inspect(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        depth: usize,
    ) -> std::fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Float(value) => fmt_float(f, *value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::String(value) => write!(f, "{}", quote_str(value)),
            Self::Undefined => write!(f, "undefined"),

            Self::List(items) if items.is_empty() => write!(f, "[]"),
            Self::List(_) if depth >= MAX_INSPECT_DEPTH => write!(f, "[Array]"),
            Self::List(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().take(MAX_INSPECT_LIST_LENGTH).enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    item.fmt_inspect(f, depth + 1)?;
                }
                let remaining = items.len().saturating_sub(MAX_INSPECT_LIST_LENGTH);
                match remaining {
                    0 => (),
                    1 => write!(f, ", ... 1 more item")?,
                    _ => write!(f, ", ... {remaining} more items")?,
                }
                write!(f, "]")
            },

            Self::Object(fields) if fields.is_empty() => write!(f, "{{}}"),
            Self::Object(_) if depth >= MAX_INSPECT_DEPTH => write!(f, "[Object]"),
            Self::Object(fields) => {
                write!(f, "{{ ")?;
                for (idx, (key, value)) in fields.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: ")?;
                    value.fmt_inspect(f, depth + 1)?;
                }
                write!(f, " }}")
            },
        }
    }
}

/// Renders the value the way it is quoted in coercion error messages, e.g.
/// `{ id: "5", tags: [1, 2] }`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_inspect(f, 0)
    }
}

impl std::convert::From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Array(items) =>
                Self::List(items.into_iter().map(Value::from).collect()),
            serde_json::Value::Bool(value) => Self::Bool(value),
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Self::Int(int)
                } else {
                    Self::Float(number.as_f64().unwrap_or(f64::NAN))
                }
            },
            serde_json::Value::Object(fields) => Self::Object(
                fields.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
            serde_json::Value::String(value) => Self::String(value),
        }
    }
}

impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

fn fmt_float(f: &mut std::fmt::Formatter<'_>, value: f64) -> std::fmt::Result {
    if value.is_nan() {
        write!(f, "NaN")
    } else if value.is_infinite() {
        write!(f, "{}Infinity", if value < 0.0 { "-" } else { "" })
    } else {
        write!(f, "{value}")
    }
}

fn quote_str(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| format!("\"{value}\""))
}
