use std::collections::HashMap;
use std::fmt;

use log::warn;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::Mood;

/// Read-only mapping from mood to candidate responses.
///
/// Every mood in the table has at least one response. Moods keep the order in
/// which they were given, so the mood selector shows them the way the
/// resource file lists them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseTable {
    order: Vec<Mood>,
    responses: HashMap<Mood, Vec<String>>,
}

impl ResponseTable {
    /// Builds a table, rejecting moods without responses.
    ///
    /// Returns the table and the rejected moods. A mood given twice keeps its
    /// first position and its last non-empty list of responses.
    pub fn validated<I>(entries: I) -> (Self, Vec<Mood>)
    where
        I: IntoIterator<Item = (Mood, Vec<String>)>,
    {
        let mut table = ResponseTable::default();
        let mut rejected = Vec::new();
        for (mood, responses) in entries {
            if responses.is_empty() {
                warn!("Mood '{mood}' has no responses, skipping");
                rejected.push(mood);
                continue;
            }
            if table.responses.insert(mood.clone(), responses).is_none() {
                table.order.push(mood);
            }
        }
        rejected.retain(|mood| !table.contains(mood.as_str()));
        (table, rejected)
    }

    /// Parses a JSON object of `mood -> [response, ...]`.
    pub fn from_json_str(json: &str) -> Result<(Self, Vec<Mood>), serde_json::Error> {
        Self::from_json_slice(json.as_bytes())
    }

    pub fn from_json_slice(json: &[u8]) -> Result<(Self, Vec<Mood>), serde_json::Error> {
        let entries: MoodEntries = serde_json::from_slice(json)?;
        Ok(Self::validated(entries.0))
    }

    pub fn responses(&self, mood: &str) -> Option<&[String]> {
        self.responses.get(mood).map(Vec::as_slice)
    }

    pub fn contains(&self, mood: &str) -> bool {
        self.responses.contains_key(mood)
    }

    pub fn moods(&self) -> impl Iterator<Item = &Mood> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Raw resource entries in file order.
struct MoodEntries(Vec<(Mood, Vec<String>)>);

impl<'de> Deserialize<'de> for MoodEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = MoodEntries;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping moods to lists of responses")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or_default());
                while let Some((mood, responses)) = map.next_entry::<Mood, Vec<String>>()? {
                    entries.push((mood, responses));
                }
                Ok(MoodEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moods(table: &ResponseTable) -> Vec<&str> {
        table.moods().map(Mood::as_str).collect()
    }

    #[test]
    fn parse_keeps_file_order() {
        let (table, rejected) = ResponseTable::from_json_str(
            r#"{
                "sad": ["Big oof energy"],
                "happy": ["Yas queen!", "Vibing so hard rn"],
                "chill": ["it's all good"]
            }"#,
        )
        .unwrap();
        assert!(rejected.is_empty());
        assert_eq!(moods(&table), vec!["sad", "happy", "chill"]);
        assert_eq!(
            table.responses("happy"),
            Some(&["Yas queen!".to_string(), "Vibing so hard rn".to_string()][..])
        );
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn moods_without_responses_are_rejected() {
        let (table, rejected) =
            ResponseTable::from_json_str(r#"{"hype": [], "chill": ["no stress"]}"#).unwrap();
        assert_eq!(moods(&table), vec!["chill"]);
        assert_eq!(rejected, vec![Mood::from("hype")]);
        assert!(!table.contains("hype"));
        assert_eq!(table.responses("hype"), None);
    }

    #[test]
    fn duplicated_mood_keeps_first_position_and_last_responses() {
        let (table, rejected) = ResponseTable::validated([
            (Mood::from("sad"), vec!["a".to_string()]),
            (Mood::from("happy"), vec!["b".to_string()]),
            (Mood::from("sad"), vec!["c".to_string()]),
        ]);
        assert!(rejected.is_empty());
        assert_eq!(moods(&table), vec!["sad", "happy"]);
        assert_eq!(table.responses("sad"), Some(&["c".to_string()][..]));
    }

    #[test]
    fn wrong_shape_is_an_error() {
        assert!(ResponseTable::from_json_str(r#"["happy"]"#).is_err());
        assert!(ResponseTable::from_json_str(r#"{"happy": "Yas queen!"}"#).is_err());
        assert!(ResponseTable::from_json_str(r#"{"happy": [1, 2]}"#).is_err());
        assert!(ResponseTable::from_json_str("{not json").is_err());
        assert!(ResponseTable::from_json_slice(b"{\"happy\": [\"\xff\"]}").is_err());
    }

    #[test]
    fn empty_table() {
        let table = ResponseTable::default();
        assert!(table.is_empty());
        assert_eq!(table.responses("happy"), None);
        assert_eq!(table.moods().count(), 0);
    }
}
