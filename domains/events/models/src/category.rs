use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
)]
pub enum Category {
    Music,
    #[serde(rename = "Food & Drink")]
    FoodAndDrink,
    Business,
    Sports,
    #[serde(rename = "Arts & Culture")]
    ArtsAndCulture,
    Charity,
    Technology,
    Education,
    #[serde(rename = "Health & Wellness")]
    HealthAndWellness,
    Fashion,
    Community,
    Nightlife,
    #[serde(rename = "Travel & Outdoor")]
    TravelAndOutdoor,
    #[serde(rename = "Family & Kids")]
    FamilyAndKids,
}

impl Category {
    pub const ALL: [Category; 14] = [
        Category::Music,
        Category::FoodAndDrink,
        Category::Business,
        Category::Sports,
        Category::ArtsAndCulture,
        Category::Charity,
        Category::Technology,
        Category::Education,
        Category::HealthAndWellness,
        Category::Fashion,
        Category::Community,
        Category::Nightlife,
        Category::TravelAndOutdoor,
        Category::FamilyAndKids,
    ];

    /// Display name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Music => "Music",
            Category::FoodAndDrink => "Food & Drink",
            Category::Business => "Business",
            Category::Sports => "Sports",
            Category::ArtsAndCulture => "Arts & Culture",
            Category::Charity => "Charity",
            Category::Technology => "Technology",
            Category::Education => "Education",
            Category::HealthAndWellness => "Health & Wellness",
            Category::Fashion => "Fashion",
            Category::Community => "Community",
            Category::Nightlife => "Nightlife",
            Category::TravelAndOutdoor => "Travel & Outdoor",
            Category::FamilyAndKids => "Family & Kids",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
