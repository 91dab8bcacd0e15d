use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    Azure,
    Google,
    Yandex,
    Deepl,
    ChatGpt,
    MyMemory,
}

impl EngineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Azure => "azure",
            Self::Google => "google",
            Self::Yandex => "yandex",
            Self::Deepl => "deepl",
            Self::ChatGpt => "chat_gpt",
            Self::MyMemory => "my_memory",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "azure" => Some(Self::Azure),
            "google" => Some(Self::Google),
            "yandex" => Some(Self::Yandex),
            "deepl" => Some(Self::Deepl),
            "chat_gpt" => Some(Self::ChatGpt),
            "my_memory" => Some(Self::MyMemory),
            _ => None,
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslationCandidate {
    pub engine: EngineKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineCapabilities {
    pub languages_at_call_time: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatModel {
    #[serde(rename = "gpt-3.5-turbo-instruct")]
    Gpt35TurboInstruct,
}

impl ChatModel {
    pub fn from_identifier(value: &str) -> Option<Self> {
        match value {
            "gpt-3.5-turbo-instruct" => Some(Self::Gpt35TurboInstruct),
            _ => None,
        }
    }

    pub fn identifier(self) -> &'static str {
        match self {
            Self::Gpt35TurboInstruct => "gpt-3.5-turbo-instruct",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureSettings {
    pub api_key: String,
    pub languages: LanguagePair,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleSettings {
    pub api_key: String,
    pub languages: LanguagePair,
    pub neural: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YandexSettings {
    pub api_key: String,
    pub languages: LanguagePair,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeeplSettings {
    pub api_key: String,
    pub languages: LanguagePair,
    pub pro_plan: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatGptSettings {
    pub api_key: String,
    pub model: ChatModel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MyMemorySettings {
    pub api_key: String,
    pub languages: LanguagePair,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineSettings {
    Azure(AzureSettings),
    Google(GoogleSettings),
    Yandex(YandexSettings),
    Deepl(DeeplSettings),
    ChatGpt(ChatGptSettings),
    MyMemory(MyMemorySettings),
}

impl EngineSettings {
    pub fn kind(&self) -> EngineKind {
        match self {
            Self::Azure(_) => EngineKind::Azure,
            Self::Google(_) => EngineKind::Google,
            Self::Yandex(_) => EngineKind::Yandex,
            Self::Deepl(_) => EngineKind::Deepl,
            Self::ChatGpt(_) => EngineKind::ChatGpt,
            Self::MyMemory(_) => EngineKind::MyMemory,
        }
    }
}

#[cfg(test)]
mod tests;
