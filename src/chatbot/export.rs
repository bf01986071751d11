//! JSON export of a chat session

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::Serialize;
use tracing::info;

use crate::chatbot::conversation::{ConversationReport, Message};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub bot_name: String,
    pub export_time: DateTime<Utc>,
}

/// Full session dump: raw history, analysis report and metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationExport {
    pub conversation: Vec<Message>,
    pub summary: ConversationReport,
    pub metadata: ExportMetadata,
}

impl ConversationExport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty-printed JSON to `path`, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        info!(
            "Exported {} messages to {}",
            self.conversation.len(),
            path.display()
        );
        Ok(())
    }
}
