use rand::{Rng, RngCore};
use serde_json::Value;

use idforge_core::record::EMOTION_FIELDS;
use idforge_core::{EmotionCategory, EmotionRecord, Identifier};

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry, str_param};

const HAPPY_WORDS: &[&str] = &[
    "Happy", "Joyful", "Cheerful", "Delighted", "Ecstatic", "Content", "Elated", "Gleeful",
    "Grateful", "Optimistic", "Proud", "Radiant", "Thrilled", "Upbeat", "Blissful", "Jubilant",
];

const SAD_WORDS: &[&str] = &[
    "Sad",
    "Gloomy",
    "Heartbroken",
    "Melancholy",
    "Mournful",
    "Downcast",
    "Despondent",
    "Dejected",
    "Somber",
    "Tearful",
    "Wistful",
    "Forlorn",
    "Crestfallen",
];

const ANGRY_WORDS: &[&str] = &[
    "Angry",
    "Furious",
    "Irritated",
    "Enraged",
    "Annoyed",
    "Resentful",
    "Outraged",
    "Livid",
    "Indignant",
    "Exasperated",
    "Bitter",
    "Seething",
    "Irate",
];

const SCARED_WORDS: &[&str] = &[
    "Scared",
    "Afraid",
    "Terrified",
    "Anxious",
    "Nervous",
    "Panicked",
    "Alarmed",
    "Uneasy",
    "Frightened",
    "Startled",
    "Apprehensive",
    "Petrified",
];

const CONFUSED_WORDS: &[&str] = &[
    "Confused",
    "Puzzled",
    "Perplexed",
    "Bewildered",
    "Baffled",
    "Disoriented",
    "Uncertain",
    "Dazed",
    "Flustered",
    "Mystified",
    "Stumped",
    "Befuddled",
];

/// Word list for one category.
pub fn words_for(category: EmotionCategory) -> &'static [&'static str] {
    match category {
        EmotionCategory::Happy => HAPPY_WORDS,
        EmotionCategory::Sad => SAD_WORDS,
        EmotionCategory::Angry => ANGRY_WORDS,
        EmotionCategory::Scared => SCARED_WORDS,
        EmotionCategory::Confused => CONFUSED_WORDS,
    }
}

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(EmotionGenerator));
}

struct EmotionGenerator;

impl Generator for EmotionGenerator {
    fn id(&self) -> &'static str {
        "emotion"
    }

    fn field_names(&self) -> &'static [&'static str] {
        EMOTION_FIELDS
    }

    fn generate(
        &self,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<Identifier, GenerationError> {
        let filter = str_param(params, "category", "emotion")?.unwrap_or("all");

        let pool: Vec<(&'static str, EmotionCategory)> = if filter == "all" {
            EmotionCategory::ALL
                .into_iter()
                .flat_map(|category| {
                    words_for(category)
                        .iter()
                        .map(move |word| (*word, category))
                })
                .collect()
        } else {
            EmotionCategory::from_tag(filter)
                .map(|category| {
                    words_for(category)
                        .iter()
                        .map(|word| (*word, category))
                        .collect()
                })
                .unwrap_or_default()
        };

        // An unrecognized category leaves the pool empty; fall back to a
        // fixed record rather than failing.
        let (emotion, category) = if pool.is_empty() {
            ("Happy", EmotionCategory::Happy)
        } else {
            pool[rng.random_range(0..pool.len())]
        };

        Ok(Identifier::Emotion(EmotionRecord {
            emotion: emotion.to_string(),
            category,
        }))
    }
}
