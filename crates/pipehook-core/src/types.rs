//! Shared wire types: hook metadata and the build result envelope.

use serde::{Deserialize, Serialize};

use crate::schema::VariableSchema;

/// Capability record for one hook, returned by discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookMetadata {
    /// Unique hook name.
    pub name: String,
    /// Whether the hook's task may be inserted before the pipeline's main
    /// stage.
    pub is_pre_hook: bool,
    /// Whether the hook's task may be inserted after the pipeline's main
    /// stage.
    pub is_post_hook: bool,
    /// Upstream event source kinds the hook supports.
    pub supported_event_source_types: Vec<String>,
    /// Accepted user variables.
    pub variable_schema: VariableSchema,
}

/// Reference to a host-side resource the plugin asks the orchestrator to
/// provide before the task is finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequest {
    /// Resource kind understood by the host.
    pub kind: String,
    /// Resource name.
    pub name: String,
}

/// Result envelope for one build: the serialized task plus any follow-up
/// requests the plugin wants the host to satisfy. The built-in hook never
/// fills the follow-up fields, but the envelope shape carries them for
/// hooks that do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hook {
    /// Variable names the plugin still needs values for.
    pub request_vars: Option<Vec<String>>,
    /// Host-side resources the plugin needs before finalization.
    pub request_resources: Option<Vec<ResourceRequest>>,
    /// Serialized engine-native task document. Base64 on the JSON wire.
    #[serde(with = "base64_bytes")]
    pub resource: Vec<u8>,
}

impl Hook {
    /// Wrap serialized task bytes with no follow-up requests.
    pub fn from_resource(resource: Vec<u8>) -> Self {
        Self {
            request_vars: None,
            request_resources: None,
            resource,
        }
    }
}

/// Serde adapter encoding `Vec<u8>` as standard base64 on the wire.
mod base64_bytes {
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(de)?;
        STANDARD.decode(s).map_err(serde::de::Error::custom)
    }
}
