use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchEventsQuery {
    #[serde(default)]
    pub query: String,
}

impl SearchEventsQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}
