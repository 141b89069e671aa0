//! Frontend Models
//!
//! Data structures matching the catalog service's JSON records.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Category data structure (`GET /types`, also embedded in items)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub image: String,
}

/// Item record as returned by the paginated list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub id: u32,
    /// Display index shown as `#n`
    pub pokedex_id: u32,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub sprite: Option<String>,
    #[serde(rename = "types", default)]
    pub categories: Vec<Category>,
}

/// Reference from one item to another, by display index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedItem {
    pub name: String,
    pub pokedex_id: u32,
}

/// Full item record (`GET /items/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u32,
    pub pokedex_id: u32,
    pub name: String,
    pub image: String,
    #[serde(rename = "types", default)]
    pub categories: Vec<Category>,
    #[serde(rename = "stats", default)]
    pub attributes: Attributes,
    #[serde(rename = "evolutions", default, deserialize_with = "null_as_empty")]
    pub related: Vec<RelatedItem>,
}

/// Numeric attributes in the order the service sent them
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attributes(pub Vec<(String, f64)>);

impl Attributes {
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = Attributes;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of attribute names to numbers, or null")
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Attributes, E> {
                Ok(Attributes::default())
            }

            fn visit_none<E: serde::de::Error>(self) -> Result<Attributes, E> {
                Ok(Attributes::default())
            }

            fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Attributes, D::Error> {
                deserializer.deserialize_map(self)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Attributes, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, value)) = access.next_entry::<String, f64>()? {
                    entries.push((name, value));
                }
                Ok(Attributes(entries))
            }
        }

        deserializer.deserialize_option(AttributesVisitor)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_json() {
        let json = r#"{
            "id": 1,
            "pokedexId": 1,
            "name": "bulbasaur",
            "image": "https://img.test/1.png",
            "sprite": "https://img.test/1s.png",
            "types": [{"id": 4, "name": "grass", "image": "https://img.test/grass.png"}]
        }"#;
        let summary: ItemSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.pokedex_id, 1);
        assert_eq!(summary.categories.len(), 1);
        assert_eq!(summary.categories[0].name, "grass");
        assert_eq!(summary.sprite.as_deref(), Some("https://img.test/1s.png"));
    }

    #[test]
    fn test_summary_without_optional_fields() {
        let json = r#"{"id": 7, "pokedexId": 7, "name": "squirtle", "image": "x"}"#;
        let summary: ItemSummary = serde_json::from_str(json).unwrap();
        assert!(summary.sprite.is_none());
        assert!(summary.categories.is_empty());
    }

    #[test]
    fn test_item_attributes_keep_order() {
        let json = r#"{
            "id": 25, "pokedexId": 25, "name": "pikachu", "image": "x", "types": [],
            "stats": {"HP": 35, "attack": 55, "defense": 40, "special_attack": 50, "special_defense": 50, "speed": 90},
            "evolutions": [{"name": "raichu", "pokedexId": 26}]
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = item.attributes.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["HP", "attack", "defense", "special_attack", "special_defense", "speed"]);
        assert_eq!(item.attributes.iter().last(), Some(("speed", 90.0)));
        assert_eq!(item.related, vec![RelatedItem { name: "raichu".to_string(), pokedex_id: 26 }]);
    }

    #[test]
    fn test_item_missing_or_null_optionals() {
        let json = r#"{"id": 3, "pokedexId": 3, "name": "venusaur", "image": "x", "stats": null, "evolutions": null}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(item.attributes.is_empty());
        assert!(item.related.is_empty());

        let json = r#"{"id": 3, "pokedexId": 3, "name": "venusaur", "image": "x"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(item.attributes.is_empty());
        assert!(item.categories.is_empty());
    }

    #[test]
    fn test_attributes_reject_non_numeric() {
        let json = r#"{"id": 3, "pokedexId": 3, "name": "v", "image": "x", "stats": {"HP": "high"}}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }
}
