use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateShareLinkCommand {
    pub event_id: String,
}
