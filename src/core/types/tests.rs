use super::*;
use serde_json::json;

#[test]
fn test_engine_kind_str_roundtrip() {
    let kinds = [
        EngineKind::Azure,
        EngineKind::Google,
        EngineKind::Yandex,
        EngineKind::Deepl,
        EngineKind::ChatGpt,
        EngineKind::MyMemory,
    ];

    for kind in kinds {
        assert_eq!(EngineKind::from_str(kind.as_str()), Some(kind));
    }

    assert_eq!(EngineKind::from_str(" Google "), Some(EngineKind::Google));
    assert_eq!(EngineKind::from_str("bing"), None);
}

#[test]
fn test_engine_kind_serde_tags() {
    assert_eq!(
        serde_json::to_value(EngineKind::ChatGpt).expect("kind should serialize"),
        json!("chat_gpt")
    );
    assert_eq!(
        serde_json::to_value(EngineKind::MyMemory).expect("kind should serialize"),
        json!("my_memory")
    );

    let parsed: EngineKind =
        serde_json::from_value(json!("deepl")).expect("kind should deserialize");
    assert_eq!(parsed, EngineKind::Deepl);
}

#[test]
fn test_translation_candidate_serde_roundtrip() {
    let candidate = TranslationCandidate {
        engine: EngineKind::Azure,
        text: "hola".to_string(),
    };

    let value = serde_json::to_value(&candidate).expect("candidate should serialize");
    assert_eq!(value, json!({ "engine": "azure", "text": "hola" }));

    let roundtrip: TranslationCandidate =
        serde_json::from_value(value).expect("candidate should deserialize");
    assert_eq!(roundtrip, candidate);
}

#[test]
fn test_chat_model_identifier_roundtrip() {
    let model = ChatModel::from_identifier("gpt-3.5-turbo-instruct")
        .expect("known identifier should parse");
    assert_eq!(model, ChatModel::Gpt35TurboInstruct);
    assert_eq!(model.identifier(), "gpt-3.5-turbo-instruct");

    assert_eq!(ChatModel::from_identifier("gpt-4o"), None);
    assert_eq!(ChatModel::from_identifier(""), None);
}

#[test]
fn test_engine_settings_kind_mapping() {
    let languages = LanguagePair::new("en", "es");

    let settings = [
        (
            EngineSettings::Azure(AzureSettings {
                api_key: "key".to_string(),
                languages: languages.clone(),
            }),
            EngineKind::Azure,
        ),
        (
            EngineSettings::Google(GoogleSettings {
                api_key: "key".to_string(),
                languages: languages.clone(),
                neural: true,
            }),
            EngineKind::Google,
        ),
        (
            EngineSettings::Yandex(YandexSettings {
                api_key: "key".to_string(),
                languages: languages.clone(),
            }),
            EngineKind::Yandex,
        ),
        (
            EngineSettings::Deepl(DeeplSettings {
                api_key: "key".to_string(),
                languages: languages.clone(),
                pro_plan: false,
            }),
            EngineKind::Deepl,
        ),
        (
            EngineSettings::ChatGpt(ChatGptSettings {
                api_key: "key".to_string(),
                model: ChatModel::Gpt35TurboInstruct,
            }),
            EngineKind::ChatGpt,
        ),
        (
            EngineSettings::MyMemory(MyMemorySettings {
                api_key: "key".to_string(),
                languages,
            }),
            EngineKind::MyMemory,
        ),
    ];

    for (settings, expected) in settings {
        assert_eq!(settings.kind(), expected);
    }
}

#[test]
fn test_language_pair_serde_rejects_unknown_fields() {
    let parsed: LanguagePair =
        serde_json::from_value(json!({ "source": "en", "target": "fr" }))
            .expect("pair should deserialize");
    assert_eq!(parsed, LanguagePair::new("en", "fr"));

    let rejected = serde_json::from_value::<LanguagePair>(json!({
        "source": "en",
        "target": "fr",
        "variant": "formal",
    }));
    assert!(rejected.is_err());
}
