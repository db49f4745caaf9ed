use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A ticketed event. Fields other than the id and creator are kept as the
/// backend sent them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Event {
    pub id_event: i64,
    #[serde(default)]
    pub creator_user_id: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Event {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.details.get(name)
    }
}

/// Fields sent when creating or partially updating an event. Only the
/// fields set here are sent, so an update leaves the rest untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EventPayload {
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl EventPayload {
    pub fn builder() -> EventPayloadBuilder {
        EventPayloadBuilder::default()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

#[derive(Default)]
pub struct EventPayloadBuilder {
    fields: Map<String, Value>,
}

impl EventPayloadBuilder {
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> EventPayload {
        EventPayload {
            fields: self.fields,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DeleteEventResponse {
    pub message: String,
    pub deleted_event_id: i64,
}
