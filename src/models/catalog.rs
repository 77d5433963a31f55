//! The fixed default catalog of known models.
//!
//! Authored by hand from the Ollama library listings. Nothing here is
//! validated or mutated at runtime; the catalog exists to seed the shared
//! [`models` store](crate::state::ModelStores) on startup.

use std::sync::OnceLock;

use super::types::{InputModality, ModelDescriptor, ModelVariant};
use crate::error::{Error, Result};

static INITIAL_MODELS: OnceLock<Vec<ModelDescriptor>> = OnceLock::new();

/// The default list of known models, in display order.
pub fn initial_models() -> &'static [ModelDescriptor] {
    INITIAL_MODELS.get_or_init(build_catalog).as_slice()
}

/// Exact lookup by pull reference, e.g. `"llama3.2:latest"`.
pub fn find_model(image: &str) -> Result<&'static ModelDescriptor> {
    initial_models()
        .iter()
        .find(|m| m.image == image)
        .ok_or_else(|| Error::ModelNotFound(image.to_string()))
}

fn variant(parameters: &str, size: u64, context: u64, input: &[InputModality]) -> ModelVariant {
    ModelVariant {
        parameters: parameters.to_string(),
        size,
        context,
        input: input.to_vec(),
        is_latest: false,
    }
}

fn tags(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| (*label).to_string()).collect()
}

fn build_catalog() -> Vec<ModelDescriptor> {
    use InputModality::{Image, Text};

    vec![
        ModelDescriptor {
            name: "GPT-OSS".to_string(),
            image: "gpt-oss:latest".to_string(),
            context: 128_000,
            parameters: "20b".to_string(),
            versions: vec![
                ModelVariant {
                    is_latest: true,
                    ..variant("20b", 14_000, 128_000, &[Text])
                },
                variant("120b", 65_000, 128_000, &[Text]),
            ],
            icon: "openai.svg".to_string(),
            size: 4.9,
            tags: tags(&["tools", "thinking"]),
            description: "OpenAI's open-weight models designed for powerful reasoning, agentic tasks, and versatile developer use cases.".to_string(),
            installed: false,
            popularity: 135_200,
            fav: false,
            class_name: "openai".to_string(),
        },
        ModelDescriptor {
            name: "DeepSeek-R1".to_string(),
            image: "deepseek-r1:latest".to_string(),
            context: 128_000,
            parameters: "8b".to_string(),
            versions: vec![
                variant("1.5b", 1_150, 128_000, &[Text]),
                variant("7b", 4_700, 128_000, &[Text]),
                ModelVariant {
                    is_latest: true,
                    ..variant("8b", 5_200, 128_000, &[Text])
                },
                variant("14b", 9_000, 128_000, &[Text]),
                variant("32b", 20_000, 128_000, &[Text]),
                variant("70b", 43_000, 128_000, &[Text]),
                variant("671b", 404_000, 128_000, &[Text]),
            ],
            icon: "deepseek.svg".to_string(),
            size: 5.2,
            tags: tags(&["tools", "thinking"]),
            description: "DeepSeek-R1 is a family of open reasoning models with performance approaching that of leading models, such as O3 and Gemini 2.5 Pro. Significantly improved reasoning and inference capabilities.".to_string(),
            installed: false,
            popularity: 56_100,
            fav: false,
            class_name: "deepseek".to_string(),
        },
        ModelDescriptor {
            name: "Llama3.1".to_string(),
            image: "llama3.1:latest".to_string(),
            context: 128_000,
            parameters: "8B".to_string(),
            versions: vec![
                ModelVariant {
                    is_latest: true,
                    ..variant("8b", 4_900, 128_000, &[Text])
                },
                variant("70b", 43_000, 128_000, &[Text]),
                variant("405b", 243_000, 128_000, &[Text]),
            ],
            icon: "llama.svg".to_string(),
            size: 4.9,
            tags: tags(&["chat", "text", "reasoning", "tools"]),
            description: "Llama 3.1 is a new state-of-the-art model from Meta available in 8B, 70B and 405B parameter sizes. The upgraded versions are multilingual and have a significantly longer context length of 128K, state-of-the-art tool use, and overall stronger reasoning capabilities.".to_string(),
            installed: false,
            popularity: 99_400,
            fav: false,
            class_name: "llama".to_string(),
        },
        ModelDescriptor {
            name: "Gemma3".to_string(),
            image: "gemma3:latest".to_string(),
            context: 128_000,
            parameters: "4B".to_string(),
            versions: vec![
                variant("1b", 815, 32_000, &[Text]),
                ModelVariant {
                    is_latest: true,
                    ..variant("4b", 3_300, 128_000, &[Text, Image])
                },
                variant("12b", 8_100, 128_000, &[Text, Image]),
                variant("27b", 17_000, 128_000, &[Text, Image]),
            ],
            icon: "gemma.svg".to_string(),
            size: 3.3,
            tags: tags(&["chat", "text", "vision", "multimodal"]),
            description: "The current, most capable model that runs on a single GPU. Gemma 3 models are multimodal—processing text and images—and feature a 128K context window with support for over 140 languages.".to_string(),
            installed: false,
            popularity: 10_800,
            fav: false,
            class_name: "gemma".to_string(),
        },
        ModelDescriptor {
            name: "Qwen3".to_string(),
            image: "qwen3:latest".to_string(),
            context: 40_000,
            parameters: "0.6B-235B".to_string(),
            versions: vec![
                variant("0.6b", 500, 40_000, &[Text]),
                variant("1.7b", 1_400, 40_000, &[Text]),
                variant("4b", 2_600, 40_000, &[Text]),
                ModelVariant {
                    is_latest: true,
                    ..variant("8b", 5_200, 40_000, &[Text])
                },
                variant("14b", 9_300, 40_000, &[Text]),
                variant("30b", 19_000, 256_000, &[Text]),
                variant("32b", 20_000, 40_000, &[Text]),
                variant("235b", 142_000, 256_000, &[Text]),
            ],
            icon: "qwen.svg".to_string(),
            size: 5.2,
            tags: tags(&["chat", "text", "reasoning", "tools", "thinking", "multilingual"]),
            description: "Qwen3 is the latest generation of large language models in Qwen series, offering a comprehensive suite of dense and mixture-of-experts (MoE) models. It supports 100+ languages and excels in reasoning, coding, math, and agent capabilities.".to_string(),
            installed: false,
            popularity: 4_600,
            fav: false,
            class_name: "qwen".to_string(),
        },
        ModelDescriptor {
            name: "Llama3.2".to_string(),
            image: "llama3.2:latest".to_string(),
            context: 32_000,
            parameters: "3B".to_string(),
            versions: vec![
                ModelVariant {
                    is_latest: true,
                    ..variant("1b", 1_300, 128_000, &[Text])
                },
                variant("3b", 2_000, 128_000, &[Text]),
            ],
            icon: "llama.svg".to_string(),
            size: 2.0,
            tags: tags(&["chat", "text", "reasoning", "tools"]),
            description: "Meta's Llama 3.2 goes small with 1B and 3B models. The Llama 3.2 instruction-tuned text only models are optimized for multilingual dialogue use cases, including agentic retrieval and summarization tasks.".to_string(),
            installed: false,
            popularity: 28_400,
            fav: true,
            class_name: "llama".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_six_families_in_display_order() {
        let names: Vec<&str> = initial_models().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            ["GPT-OSS", "DeepSeek-R1", "Llama3.1", "Gemma3", "Qwen3", "Llama3.2"]
        );
    }

    #[test]
    fn every_entry_has_versions_and_at_most_one_latest() {
        for model in initial_models() {
            assert!(!model.versions.is_empty(), "{} has no versions", model.name);
            let marked = model.versions.iter().filter(|v| v.is_latest).count();
            assert!(marked <= 1, "{} marks {} variants latest", model.name, marked);
        }
    }

    #[test]
    fn names_and_pull_references_are_unique() {
        let models = initial_models();
        for (i, a) in models.iter().enumerate() {
            for b in &models[i + 1..] {
                assert_ne!(a.name, b.name);
                assert_ne!(a.image, b.image);
            }
        }
    }

    #[test]
    fn find_model_resolves_by_pull_reference() {
        let model = find_model("llama3.2:latest").unwrap();
        assert_eq!(model.name, "Llama3.2");
        assert!(model.fav);

        let err = find_model("nomic-embed-text:latest").unwrap_err();
        assert_eq!(err.to_string(), "model not found: nomic-embed-text:latest");
    }

    #[test]
    fn latest_resolves_the_marked_variant() {
        // Llama3.2 headlines 3B but defaults to the 1b download.
        let model = find_model("llama3.2:latest").unwrap();
        assert_eq!(model.latest().unwrap().parameters, "1b");

        let qwen = find_model("qwen3:latest").unwrap();
        assert_eq!(qwen.parameters, "0.6B-235B");
        assert_eq!(qwen.latest().unwrap().parameters, "8b");
    }

    #[test]
    fn entries_keep_their_authored_labels() {
        // Label casing is free-form in the authored table and must survive.
        let llama31 = find_model("llama3.1:latest").unwrap();
        assert_eq!(llama31.parameters, "8B");
        assert_eq!(llama31.versions[0].parameters, "8b");

        let gemma = find_model("gemma3:latest").unwrap();
        assert!(gemma.versions[1].supports(InputModality::Image));
        assert_eq!(gemma.versions[0].context, 32_000);
    }

    #[test]
    fn wire_format_uses_camel_case() {
        let json = serde_json::to_value(&initial_models()[0]).unwrap();
        assert_eq!(json["className"], "openai");
        assert_eq!(json["image"], "gpt-oss:latest");
        assert_eq!(json["versions"][0]["isLatest"], true);
        assert_eq!(json["versions"][0]["input"][0], "text");
        // Unmarked variants omit the flag entirely.
        assert!(json["versions"][1].get("isLatest").is_none());
    }
}
