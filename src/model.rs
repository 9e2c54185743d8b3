use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Activity {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default, deserialize_with = "roster")]
    pub participants: Vec<String>,
}

impl Activity {
    /// Not clamped: an over-full roster upstream shows up as a negative number.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

// Anything that isn't an array is treated as an empty roster.
fn roster<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => s,
            other => other.to_string(),
        })
        .collect())
}

/// Every activity the server knows about, in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<(String, Activity)>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    fn insert(&mut self, name: String, activity: Activity) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = activity,
            None => self.entries.push((name, activity)),
        }
    }
}

impl FromIterator<(String, Activity)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut catalog = Catalog::default();
        for (name, activity) in iter {
            catalog.insert(name, activity);
        }
        catalog
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object keyed by activity name")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Catalog, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut catalog = Catalog::default();
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    catalog.insert(name, activity);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// Body of the signup endpoint, success or failure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SignupReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    detail: Option<Value>,
}

impl SignupReply {
    /// Validation errors carry a structured `detail`; only plain text is shown.
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_keeps_server_order() {
        let raw = r#"{
            "Programming Class": {"description": "p", "schedule": "Tue", "max_participants": 20, "participants": []},
            "Chess Club": {"description": "c", "schedule": "Fri", "max_participants": 12, "participants": ["michael@mergington.edu"]},
            "Art Studio": {"description": "a", "schedule": "Wed", "max_participants": 15, "participants": []}
        }"#;
        let catalog: Catalog = serde_json::from_str(raw).unwrap();
        let names: Vec<&str> = catalog.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Programming Class", "Chess Club", "Art Studio"]);
        assert_eq!(catalog.get("Chess Club").unwrap().participants.len(), 1);
    }

    #[test]
    fn non_array_roster_is_empty() {
        let raw = r#"{"Drama": {"description": "d", "schedule": "s", "max_participants": 5, "participants": null},
                      "Debate": {"description": "d", "schedule": "s", "max_participants": 5}}"#;
        let catalog: Catalog = serde_json::from_str(raw).unwrap();
        assert!(catalog.get("Drama").unwrap().participants.is_empty());
        assert!(catalog.get("Debate").unwrap().participants.is_empty());
    }

    #[test]
    fn spots_left_can_go_negative() {
        let activity = Activity {
            description: String::new(),
            schedule: String::new(),
            max_participants: 1,
            participants: vec!["a@x.com".into(), "b@x.com".into(), "c@x.com".into()],
        };
        assert_eq!(activity.spots_left(), -2);
    }

    #[test]
    fn catalog_must_be_an_object() {
        assert!(serde_json::from_str::<Catalog>("[]").is_err());
        assert!(serde_json::from_str::<Catalog>(r#"{"x": {"description": "d"}}"#).is_err());
    }

    #[test]
    fn duplicate_names_keep_first_position_last_value() {
        let catalog: Catalog = [
            ("Chess Club".to_string(), activity(2)),
            ("Drama".to_string(), activity(3)),
            ("Chess Club".to_string(), activity(9)),
        ]
        .into_iter()
        .collect();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.iter().next().unwrap().1.max_participants, 9);
    }

    #[test]
    fn signup_detail_text_only_for_strings() {
        let reply: SignupReply =
            serde_json::from_str(r#"{"detail": "Activity not found"}"#).unwrap();
        assert_eq!(reply.detail_text().as_deref(), Some("Activity not found"));
        assert_eq!(reply.message, None);

        let reply: SignupReply =
            serde_json::from_str(r#"{"detail": [{"loc": ["query", "email"], "msg": "field required"}]}"#)
                .unwrap();
        assert_eq!(reply.detail_text(), None);
    }

    fn activity(max: i64) -> Activity {
        Activity {
            description: "d".into(),
            schedule: "s".into(),
            max_participants: max,
            participants: Vec::new(),
        }
    }
}
