use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::core::types::{
    AzureSettings, ChatGptSettings, ChatModel, DeeplSettings, EngineSettings, GoogleSettings,
    LanguagePair, MyMemorySettings, YandexSettings,
};

/// Configuration document shape supplied by the surrounding preferences
/// store. Fields are optional on the wire so validation can name the exact
/// missing key instead of surfacing a generic deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MtConfig {
    pub google: Option<GoogleSection>,
    pub azure: Option<ProviderSection>,
    pub yandex: Option<ProviderSection>,
    pub deepl: Option<DeeplSection>,
    #[serde(rename = "chatGpt")]
    pub chat_gpt: Option<ChatGptSection>,
    #[serde(rename = "myMemory")]
    pub my_memory: Option<ProviderSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ProviderSection {
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tgt_lang: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GoogleSection {
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tgt_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neural: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DeeplSection {
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tgt_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pro_plan: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ChatGptSection {
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl MtConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|error| ConfigError::MalformedDocument {
            message: error.to_string(),
        })
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|error| ConfigError::MalformedDocument {
            message: error.to_string(),
        })
    }

    pub fn validate(&self) -> Result<EnginePlan, ConfigError> {
        Ok(EnginePlan {
            azure: validate_azure(require_section(self.azure.as_ref(), "azure")?)?,
            google: validate_google(require_section(self.google.as_ref(), "google")?)?,
            yandex: validate_yandex(require_section(self.yandex.as_ref(), "yandex")?)?,
            deepl: validate_deepl(require_section(self.deepl.as_ref(), "deepl")?)?,
            chat_gpt: match self.chat_gpt.as_ref() {
                Some(section) => validate_chat_gpt(section)?,
                None => None,
            },
            my_memory: validate_my_memory(require_section(self.my_memory.as_ref(), "myMemory")?)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnginePlan {
    pub azure: Option<AzureSettings>,
    pub google: Option<GoogleSettings>,
    pub yandex: Option<YandexSettings>,
    pub deepl: Option<DeeplSettings>,
    pub chat_gpt: Option<ChatGptSettings>,
    pub my_memory: Option<MyMemorySettings>,
}

impl EnginePlan {
    /// Settings for every enabled engine, in the fixed registration order
    /// Azure, Google, Yandex, DeepL, chat completion, MyMemory.
    pub fn enabled_engines(&self) -> Vec<EngineSettings> {
        let mut engines = Vec::new();

        if let Some(settings) = &self.azure {
            engines.push(EngineSettings::Azure(settings.clone()));
        }
        if let Some(settings) = &self.google {
            engines.push(EngineSettings::Google(settings.clone()));
        }
        if let Some(settings) = &self.yandex {
            engines.push(EngineSettings::Yandex(settings.clone()));
        }
        if let Some(settings) = &self.deepl {
            engines.push(EngineSettings::Deepl(settings.clone()));
        }
        if let Some(settings) = &self.chat_gpt {
            engines.push(EngineSettings::ChatGpt(settings.clone()));
        }
        if let Some(settings) = &self.my_memory {
            engines.push(EngineSettings::MyMemory(settings.clone()));
        }

        engines
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled_engines().len()
    }
}

fn require_section<'a, T>(section: Option<&'a T>, name: &str) -> Result<&'a T, ConfigError> {
    section.ok_or_else(|| ConfigError::MissingSection {
        section: name.to_string(),
    })
}

fn require_bool(value: Option<bool>, section: &str, field: &str) -> Result<bool, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingField {
        section: section.to_string(),
        field: field.to_string(),
    })
}

fn require_str(
    value: Option<&String>,
    section: &str,
    field: &str,
) -> Result<String, ConfigError> {
    value.cloned().ok_or_else(|| ConfigError::MissingField {
        section: section.to_string(),
        field: field.to_string(),
    })
}

fn require_languages(
    src_lang: Option<&String>,
    tgt_lang: Option<&String>,
    section: &str,
) -> Result<LanguagePair, ConfigError> {
    let source = require_str(src_lang, section, "srcLang")?;
    let target = require_str(tgt_lang, section, "tgtLang")?;
    Ok(LanguagePair { source, target })
}

fn validate_azure(section: &ProviderSection) -> Result<Option<AzureSettings>, ConfigError> {
    if !require_bool(section.enabled, "azure", "enabled")? {
        return Ok(None);
    }

    Ok(Some(AzureSettings {
        api_key: require_str(section.api_key.as_ref(), "azure", "apiKey")?,
        languages: require_languages(
            section.src_lang.as_ref(),
            section.tgt_lang.as_ref(),
            "azure",
        )?,
    }))
}

fn validate_google(section: &GoogleSection) -> Result<Option<GoogleSettings>, ConfigError> {
    if !require_bool(section.enabled, "google", "enabled")? {
        return Ok(None);
    }

    Ok(Some(GoogleSettings {
        api_key: require_str(section.api_key.as_ref(), "google", "apiKey")?,
        languages: require_languages(
            section.src_lang.as_ref(),
            section.tgt_lang.as_ref(),
            "google",
        )?,
        neural: require_bool(section.neural, "google", "neural")?,
    }))
}

fn validate_yandex(section: &ProviderSection) -> Result<Option<YandexSettings>, ConfigError> {
    if !require_bool(section.enabled, "yandex", "enabled")? {
        return Ok(None);
    }

    Ok(Some(YandexSettings {
        api_key: require_str(section.api_key.as_ref(), "yandex", "apiKey")?,
        languages: require_languages(
            section.src_lang.as_ref(),
            section.tgt_lang.as_ref(),
            "yandex",
        )?,
    }))
}

fn validate_deepl(section: &DeeplSection) -> Result<Option<DeeplSettings>, ConfigError> {
    if !require_bool(section.enabled, "deepl", "enabled")? {
        return Ok(None);
    }

    Ok(Some(DeeplSettings {
        api_key: require_str(section.api_key.as_ref(), "deepl", "apiKey")?,
        languages: require_languages(
            section.src_lang.as_ref(),
            section.tgt_lang.as_ref(),
            "deepl",
        )?,
        pro_plan: require_bool(section.pro_plan, "deepl", "proPlan")?,
    }))
}

fn validate_chat_gpt(section: &ChatGptSection) -> Result<Option<ChatGptSettings>, ConfigError> {
    if !require_bool(section.enabled, "chatGpt", "enabled")? {
        return Ok(None);
    }

    let api_key = require_str(section.api_key.as_ref(), "chatGpt", "apiKey")?;
    let model = require_str(section.model.as_ref(), "chatGpt", "model")?;
    let model =
        ChatModel::from_identifier(&model).ok_or(ConfigError::UnsupportedChatModel { model })?;

    Ok(Some(ChatGptSettings { api_key, model }))
}

fn validate_my_memory(section: &ProviderSection) -> Result<Option<MyMemorySettings>, ConfigError> {
    if !require_bool(section.enabled, "myMemory", "enabled")? {
        return Ok(None);
    }

    Ok(Some(MyMemorySettings {
        api_key: require_str(section.api_key.as_ref(), "myMemory", "apiKey")?,
        languages: require_languages(
            section.src_lang.as_ref(),
            section.tgt_lang.as_ref(),
            "myMemory",
        )?,
    }))
}
