use serde::{Deserialize, Serialize};

/// One joke as the API returns it. Responses also carry a numeric `id`
/// per joke; it is only ever used as a lookup key, so it is not kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Joke {
    pub text: String,
    pub language: String,
    pub category: String,
}

impl Joke {
    /// The bracketed attribution line shown under the joke text,
    /// e.g. `[EN | pun]`.
    pub fn tag(&self) -> String {
        format!("[{} | {}]", self.language.to_uppercase(), self.category)
    }
}

/// Body of `GET /{language}/{category}[/{count}|/all]`.
///
/// A missing `jokes` field decodes the same as an empty list; callers
/// treat both as "nothing matched".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JokesResponse {
    #[serde(default)]
    pub jokes: Vec<Joke>,
}

/// Body of `GET /id/{id}`. The joke is `null` or absent when the id
/// does not exist.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JokeResponse {
    #[serde(default)]
    pub joke: Option<Joke>,
}

/// A language or category selector. An empty selection and the literal
/// "any" both mean unfiltered; the server expects the `any` segment
/// either way.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Any,
    Named(String),
}

impl Filter {
    pub fn from_selection(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("any") {
            Filter::Any
        } else {
            Filter::Named(raw.to_owned())
        }
    }

    fn segment(&self) -> &str {
        match self {
            Filter::Any => "any",
            Filter::Named(name) => name,
        }
    }
}

/// How many jokes to ask for: the server's default, everything, or an
/// exact number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Count {
    Default,
    All,
    Exactly(u32),
}

impl Count {
    /// The count select only offers integers and "all", so anything
    /// unparseable falls back to the default.
    pub fn from_selection(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            Count::Default
        } else if raw.eq_ignore_ascii_case("all") {
            Count::All
        } else {
            raw.parse().map(Count::Exactly).unwrap_or(Count::Default)
        }
    }
}

/// Selectors for the multi-joke route. All of them travel as path
/// segments; the API takes no query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct JokeQuery {
    pub language: Filter,
    pub category: Filter,
    pub count: Count,
}

impl JokeQuery {
    pub fn path(&self) -> String {
        let mut path = format!("/{}/{}", self.language.segment(), self.category.segment());
        match self.count {
            Count::Default => {}
            Count::All => path.push_str("/all"),
            Count::Exactly(n) => {
                path.push('/');
                path.push_str(&n.to_string());
            }
        }
        path
    }
}

pub fn lookup_path(id: u32) -> String {
    format!("/id/{id}")
}

/// A usable joke id is a non-empty string of digits. Anything else is
/// rejected before a request is made.
pub fn parse_joke_id(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(language: &str, category: &str, count: &str) -> JokeQuery {
        JokeQuery {
            language: Filter::from_selection(language),
            category: Filter::from_selection(category),
            count: Count::from_selection(count),
        }
    }

    #[test]
    fn path_defaults_to_any_segments() {
        assert_eq!(query("", "", "").path(), "/any/any");
        assert_eq!(query("any", "any", "").path(), "/any/any");
    }

    #[test]
    fn path_includes_count_segment() {
        assert_eq!(query("en", "any", "3").path(), "/en/any/3");
        assert_eq!(query("de", "chuck", "10").path(), "/de/chuck/10");
    }

    #[test]
    fn path_includes_all_literal() {
        assert_eq!(query("any", "neutral", "all").path(), "/any/neutral/all");
    }

    #[test]
    fn unparseable_count_falls_back_to_default() {
        assert_eq!(Count::from_selection("lots"), Count::Default);
        assert_eq!(query("en", "any", "lots").path(), "/en/any");
    }

    #[test]
    fn lookup_path_uses_id_route() {
        assert_eq!(lookup_path(42), "/id/42");
        assert_eq!(lookup_path(0), "/id/0");
    }

    #[test]
    fn joke_id_must_be_a_number() {
        assert_eq!(parse_joke_id("42"), Some(42));
        assert_eq!(parse_joke_id(" 7 "), Some(7));
        assert_eq!(parse_joke_id(""), None);
        assert_eq!(parse_joke_id("   "), None);
        assert_eq!(parse_joke_id("abc"), None);
        assert_eq!(parse_joke_id("1.5"), None);
        assert_eq!(parse_joke_id("-3"), None);
    }

    #[test]
    fn tag_uppercases_language_only() {
        let joke = Joke {
            text: "Why did...".to_owned(),
            language: "en".to_owned(),
            category: "pun".to_owned(),
        };
        assert_eq!(joke.tag(), "[EN | pun]");
    }

    #[test]
    fn decodes_joke_list_ignoring_extra_fields() {
        let body = r#"{"jokes":[
            {"id":0,"text":"first","language":"en","category":"neutral"},
            {"id":1,"text":"second","language":"de","category":"chuck"}
        ]}"#;
        let response: JokesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.jokes.len(), 2);
        assert_eq!(response.jokes[0].text, "first");
        assert_eq!(response.jokes[1].language, "de");
    }

    #[test]
    fn missing_jokes_field_decodes_as_empty() {
        let response: JokesResponse = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert!(response.jokes.is_empty());

        let response: JokesResponse = serde_json::from_str(r#"{"jokes":[]}"#).unwrap();
        assert!(response.jokes.is_empty());
    }

    #[test]
    fn single_joke_may_be_null_or_absent() {
        let response: JokeResponse = serde_json::from_str(r#"{"joke":null}"#).unwrap();
        assert!(response.joke.is_none());

        let response: JokeResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(response.joke.is_none());

        let response: JokeResponse = serde_json::from_str(
            r#"{"joke":{"id":3,"text":"hi","language":"es","category":"neutral"}}"#,
        )
        .unwrap();
        assert_eq!(response.joke.unwrap().language, "es");
    }
}
