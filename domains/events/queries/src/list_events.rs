use events_models::{Category, Event};
use serde::Deserialize;

/// Catalog listing. Filters combine with AND; an empty query lists every
/// event in catalog order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEventsQuery {
    pub category: Option<Category>,
    pub featured: Option<bool>,
    pub hot: Option<bool>,
}

impl ListEventsQuery {
    pub fn by_category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Default::default()
        }
    }

    pub fn featured() -> Self {
        Self {
            featured: Some(true),
            ..Default::default()
        }
    }

    pub fn hot() -> Self {
        Self {
            hot: Some(true),
            ..Default::default()
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none() && self.featured.is_none() && self.hot.is_none()
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.category.is_none_or(|category| event.category == category)
            && self.featured.is_none_or(|featured| event.is_featured == featured)
            && self.hot.is_none_or(|hot| event.is_hot == hot)
    }
}
