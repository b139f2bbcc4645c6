use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Properties requested from and written to the remote store.
pub const RECORD_PROPERTIES: [&str; 3] = ["name", "bio", "category"];

/// One object instance as held by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub category: String,
}

/// Caller-supplied data for a new record.
///
/// Values are forwarded verbatim, whatever their JSON type, and an explicit
/// `null` stays `null`. A field that was not supplied is left out of the
/// create payload. Anything besides the three known fields is dropped when
/// the input is deserialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    #[serde(default, deserialize_with = "supplied", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "supplied", skip_serializing_if = "Option::is_none")]
    pub bio: Option<Value>,
    #[serde(default, deserialize_with = "supplied", skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,
}

impl NewRecord {
    pub fn new(
        name: impl Into<String>,
        bio: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            bio: Some(Value::String(bio.into())),
            category: Some(Value::String(category.into())),
        }
    }
}

/// Wire shape of an object returned by the CRM objects API.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteObject {
    pub id: String,
    #[serde(default)]
    pub properties: RemoteProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteProperties {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bio: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
}

/// A page of objects; `results` may be absent on an empty collection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemotePage {
    #[serde(default)]
    pub results: Vec<RemoteObject>,
}

/// Body of a create call: only the known properties.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePayload<'a> {
    pub properties: &'a NewRecord,
}

impl From<RemoteObject> for Record {
    fn from(object: RemoteObject) -> Self {
        Record {
            id: object.id,
            name: object.properties.name,
            bio: object.properties.bio,
            category: object.properties.category,
        }
    }
}

// Present keys always map to `Some`, so `null` survives as `Some(Value::Null)`.
fn supplied<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
