use serde::{Deserialize, Serialize};

/// Languages the solver ships lexicons for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(format!("unknown language: '{other}'")),
        }
    }
}

fn default_min_len() -> i64 {
    2
}

/// Payload of the find-words-from-letters task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindWordsPayload {
    pub letters: Vec<String>,
    pub lang: Language,
    pub category: String,
    #[serde(rename = "minLen", default = "default_min_len")]
    pub min_len: i64,
}

/// Tasks the solver service accepts, tagged the way they travel on
/// the wire: `{ "task": "...", "payload": { ... } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "task", content = "payload", rename_all = "kebab-case")]
pub enum Task {
    FindWordsFromLetters(FindWordsPayload),
}

/// Caller -> service message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerRequest {
    pub id: u64,
    #[serde(flatten)]
    pub task: Task,
}

/// Service -> caller message; exactly one per request id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerResponse {
    pub id: u64,
    #[serde(flatten)]
    pub body: ResponseBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum ResponseBody {
    Result(Vec<String>),
    Error(ErrorDescriptor),
}

/// Wire form of a per-call failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    DictionaryUnavailable,
    InvalidRequest,
    ServiceUnavailable,
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_wire_shape() {
        let request = WorkerRequest {
            id: 7,
            task: Task::FindWordsFromLetters(FindWordsPayload {
                letters: vec!["l".into(), "e".into(), "t".into()],
                lang: Language::En,
                category: "general".into(),
                min_len: 3,
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["task"], "find-words-from-letters");
        assert_eq!(json["payload"]["lang"], "en");
        assert_eq!(json["payload"]["minLen"], 3);
    }

    #[test]
    fn min_len_defaults_to_two() {
        let json = r#"{
            "id": 1,
            "task": "find-words-from-letters",
            "payload": { "letters": ["a"], "lang": "ar", "category": "animals" }
        }"#;

        let request: WorkerRequest = serde_json::from_str(json).unwrap();
        let Task::FindWordsFromLetters(payload) = request.task;
        assert_eq!(payload.min_len, 2);
        assert_eq!(payload.lang, Language::Ar);
    }

    #[test]
    fn unknown_task_is_rejected() {
        let json = r#"{ "id": 1, "task": "reverse-words", "payload": {} }"#;
        assert!(serde_json::from_str::<WorkerRequest>(json).is_err());
    }

    #[test]
    fn response_round_trips() {
        let response = WorkerResponse {
            id: 3,
            body: ResponseBody::Error(ErrorDescriptor {
                kind: ErrorKind::DictionaryUnavailable,
                message: "no word list".into(),
            }),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["payload"]["kind"], "dictionary-unavailable");

        let back: WorkerResponse = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, 3);
    }
}
