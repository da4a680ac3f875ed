use serde::{Deserialize, Deserializer};

use crate::LookupError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct WordEntry {
    #[serde(deserialize_with = "nullable")]
    pub word: String,
    #[serde(deserialize_with = "nullable")]
    pub phonetic: String,
    #[serde(deserialize_with = "nullable_list")]
    pub phonetics: Vec<Phonetic>,
    #[serde(deserialize_with = "nullable")]
    pub origin: String,
    #[serde(deserialize_with = "nullable_list")]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Phonetic {
    #[serde(deserialize_with = "nullable")]
    pub text: String,
    #[serde(deserialize_with = "nullable")]
    pub audio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meaning {
    #[serde(deserialize_with = "nullable")]
    pub part_of_speech: String,
    #[serde(deserialize_with = "nullable_list")]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Definition {
    #[serde(deserialize_with = "nullable")]
    pub definition: String,
    #[serde(deserialize_with = "nullable")]
    pub example: String,
    #[serde(deserialize_with = "nullable_list")]
    pub synonyms: Vec<String>,
    #[serde(deserialize_with = "nullable_list")]
    pub antonyms: Vec<String>,
}

impl WordEntry {
    /// Non-empty phonetic spellings, in the order the service listed them.
    pub fn phonetic_texts(&self) -> Vec<&str> {
        self.phonetics
            .iter()
            .map(|phonetic| &phonetic.text[..])
            .filter(|text| !text.is_empty())
            .collect()
    }
}

impl Definition {
    pub fn present_synonyms(&self) -> Vec<&str> {
        present(&self.synonyms)
    }

    pub fn present_antonyms(&self) -> Vec<&str> {
        present(&self.antonyms)
    }
}

fn present(words: &[String]) -> Vec<&str> {
    words
        .iter()
        .map(|word| &word[..])
        .filter(|word| !word.is_empty())
        .collect()
}

// the service omits some fields and sends `null` for others
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// a `null` list is empty and a `null` element is the element's empty value
fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Decodes a response body into the list of entries it describes.
pub fn decode_entries(body: &[u8]) -> Result<Vec<WordEntry>, LookupError> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let entries = nullable_list(&mut deserializer).map_err(LookupError::Decode)?;
    deserializer.end().map_err(LookupError::Decode)?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &str = r#"[{
        "word": "hello",
        "phonetic": "həˈləʊ",
        "phonetics": [
            {"text": "həˈləʊ", "audio": "//ssl.gstatic.com/dictionary/static/sounds/20200429/hello--_gb_1.mp3"},
            {"text": "hɛˈləʊ"}
        ],
        "origin": "early 19th century: variant of earlier hollo.",
        "meanings": [{
            "partOfSpeech": "exclamation",
            "definitions": [{
                "definition": "used as a greeting or to begin a phone conversation.",
                "example": "hello there, Katie!",
                "synonyms": [],
                "antonyms": []
            }]
        }]
    }]"#;

    #[test]
    fn decodes_service_response() {
        let entries = decode_entries(HELLO.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.word, "hello");
        assert_eq!(entry.phonetics.len(), 2);
        assert_eq!(entry.phonetics[1].audio, "");
        assert_eq!(entry.meanings[0].part_of_speech, "exclamation");
        assert_eq!(entry.meanings[0].definitions[0].example, "hello there, Katie!");
    }

    #[test]
    fn missing_and_null_fields_are_empty() {
        let body = r#"[{"word": "x", "phonetic": null, "meanings": [{"definitions": [{"definition": "d", "synonyms": null}]}]}]"#;
        let entries = decode_entries(body.as_bytes()).unwrap();
        let entry = &entries[0];
        assert_eq!(entry.phonetic, "");
        assert!(entry.phonetics.is_empty());
        assert_eq!(entry.origin, "");
        assert_eq!(entry.meanings[0].part_of_speech, "");
        let definition = &entry.meanings[0].definitions[0];
        assert_eq!(definition.example, "");
        assert!(definition.synonyms.is_empty());
        assert!(definition.antonyms.is_empty());
    }

    #[test]
    fn null_body_and_null_elements_are_empty() {
        assert!(decode_entries(b"null").unwrap().is_empty());

        let entries = decode_entries(b"[null]").unwrap();
        assert_eq!(entries, vec![WordEntry::default()]);

        let body = r#"[{"word": "x", "phonetics": [null], "meanings": [{"definitions": [null, {"definition": "d", "synonyms": [null, "y"], "antonyms": [null]}]}]}]"#;
        let entries = decode_entries(body.as_bytes()).unwrap();
        assert_eq!(entries[0].phonetics, vec![Phonetic::default()]);
        let definitions = &entries[0].meanings[0].definitions;
        assert_eq!(definitions[0], Definition::default());
        assert_eq!(definitions[1].synonyms, vec!["", "y"]);
        assert_eq!(definitions[1].present_synonyms(), vec!["y"]);
        assert!(definitions[1].present_antonyms().is_empty());
    }

    #[test]
    fn trailing_garbage_is_a_decode_error() {
        let error = decode_entries(b"[] x").unwrap_err();
        assert!(matches!(error, LookupError::Decode(_)));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let error = decode_entries(b"{\"title\": ").unwrap_err();
        assert!(matches!(error, LookupError::Decode(_)));
    }

    #[test]
    fn object_body_is_a_decode_error() {
        let error = decode_entries(br#"{"title": "No Definitions Found"}"#).unwrap_err();
        assert!(matches!(error, LookupError::Decode(_)));
    }

    #[test]
    fn empty_strings_are_filtered_without_touching_data() {
        let definition = Definition {
            definition: "d".to_string(),
            synonyms: vec!["".to_string(), "hi".to_string(), "".to_string(), "hey".to_string()],
            antonyms: vec!["".to_string()],
            ..Default::default()
        };
        assert_eq!(definition.present_synonyms(), vec!["hi", "hey"]);
        assert!(definition.present_antonyms().is_empty());
        assert_eq!(definition.synonyms.len(), 4);
    }

    #[test]
    fn phonetic_texts_skip_blank_text() {
        let entry = WordEntry {
            phonetics: vec![
                Phonetic { text: "".to_string(), audio: "a.mp3".to_string() },
                Phonetic { text: "/wɜːd/".to_string(), audio: "".to_string() },
            ],
            ..Default::default()
        };
        assert_eq!(entry.phonetic_texts(), vec!["/wɜːd/"]);
    }
}
