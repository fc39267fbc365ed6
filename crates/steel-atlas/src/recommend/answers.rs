use serde::{Deserialize, Deserializer, Serialize};

/// A closed set of questionnaire options with a fallback for anything else.
pub trait QuestionOption: Sized + Copy + Default + 'static {
    /// Key of the question this option answers.
    const QUESTION: &'static str;

    fn options() -> &'static [Self];

    fn key(self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::options()
            .iter()
            .copied()
            .find(|option| option.key().eq_ignore_ascii_case(raw))
    }

    fn from_option(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UseCase {
    #[default]
    Edc,
    Kitchen,
    Outdoor,
    HardUse,
}

impl QuestionOption for UseCase {
    const QUESTION: &'static str = "useCase";

    fn options() -> &'static [Self] {
        &[Self::Edc, Self::Kitchen, Self::Outdoor, Self::HardUse]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Edc => "edc",
            Self::Kitchen => "kitchen",
            Self::Outdoor => "outdoor",
            Self::HardUse => "hard-use",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Edge,
    Toughness,
    #[default]
    Balanced,
}

impl QuestionOption for Priority {
    const QUESTION: &'static str = "priority";

    fn options() -> &'static [Self] {
        &[Self::Edge, Self::Toughness, Self::Balanced]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Edge => "edge",
            Self::Toughness => "toughness",
            Self::Balanced => "balanced",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Maintenance {
    #[default]
    Low,
    DontMind,
}

impl QuestionOption for Maintenance {
    const QUESTION: &'static str = "maintenance";

    fn options() -> &'static [Self] {
        &[Self::Low, Self::DontMind]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::DontMind => "dont-mind",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sharpenability {
    #[default]
    Easy,
    MaximumEdge,
}

impl QuestionOption for Sharpenability {
    const QUESTION: &'static str = "sharpenability";

    fn options() -> &'static [Self] {
        &[Self::Easy, Self::MaximumEdge]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::MaximumEdge => "maximum-edge",
        }
    }
}

/// Questionnaire answers. Unknown or missing values resolve to each
/// question's default rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answers {
    #[serde(default, alias = "use_case", deserialize_with = "lenient_option")]
    pub use_case: UseCase,
    #[serde(default, deserialize_with = "lenient_option")]
    pub priority: Priority,
    #[serde(default, deserialize_with = "lenient_option")]
    pub maintenance: Maintenance,
    #[serde(default, deserialize_with = "lenient_option")]
    pub sharpenability: Sharpenability,
}

impl Answers {
    /// Builds answers from raw `question -> option` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut answers = Self::default();
        for (question, option) in pairs {
            let option = option.as_ref();
            let question = question.as_ref().trim();
            if question == UseCase::QUESTION || question == "use_case" {
                answers.use_case = UseCase::from_option(option);
            } else if question == Priority::QUESTION {
                answers.priority = Priority::from_option(option);
            } else if question == Maintenance::QUESTION {
                answers.maintenance = Maintenance::from_option(option);
            } else if question == Sharpenability::QUESTION {
                answers.sharpenability = Sharpenability::from_option(option);
            }
        }
        answers
    }
}

fn lenient_option<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: QuestionOption,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .map(T::from_option)
        .unwrap_or_default())
}
