use serde::{Deserialize, Serialize};

// =============================================================================
// Records
// =============================================================================

/// One row of the disease dataset.
///
/// Field names follow the CSV header. Values are kept exactly as read,
/// without trimming. Records are immutable once loaded and are identified
/// by their row position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    #[serde(rename = "Disease")]
    pub disease: String,
    /// Free text, keywords separated by commas and/or whitespace.
    #[serde(rename = "Symptoms")]
    pub symptoms: String,
    #[serde(rename = "Medications")]
    pub medications: String,
    #[serde(rename = "Precautions")]
    pub precautions: String,
    #[serde(rename = "Doctor_Specialist")]
    pub doctor_specialist: String,
}

impl DiseaseRecord {
    pub fn new(
        disease: impl Into<String>,
        symptoms: impl Into<String>,
        medications: impl Into<String>,
        precautions: impl Into<String>,
        doctor_specialist: impl Into<String>,
    ) -> Self {
        Self {
            disease: disease.into(),
            symptoms: symptoms.into(),
            medications: medications.into(),
            precautions: precautions.into(),
            doctor_specialist: doctor_specialist.into(),
        }
    }
}

/// The display projection of a [`DiseaseRecord`] returned for a query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "Disease")]
    pub disease: String,
    #[serde(rename = "Medications")]
    pub medications: String,
    #[serde(rename = "Precautions")]
    pub precautions: String,
    #[serde(rename = "Doctor_Specialist")]
    pub doctor_specialist: String,
}

impl From<&DiseaseRecord> for MatchResult {
    fn from(record: &DiseaseRecord) -> Self {
        Self {
            disease: record.disease.clone(),
            medications: record.medications.clone(),
            precautions: record.precautions.clone(),
            doctor_specialist: record.doctor_specialist.clone(),
        }
    }
}

// =============================================================================
// Conversation
// =============================================================================

/// Who authored a conversation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry of a session transcript. Never mutated after append.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
}

impl ConversationMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
