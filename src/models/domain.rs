use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::{Validate, ValidationError};

/// Event category, a closed set shared by events and sponsor preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    CollegeFest,
    Competition,
    Sports,
    Hackathon,
    Cultural,
    Workshop,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::CollegeFest,
        Category::Competition,
        Category::Sports,
        Category::Hackathon,
        Category::Cultural,
        Category::Workshop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CollegeFest => "college-fest",
            Category::Competition => "competition",
            Category::Sports => "sports",
            Category::Hackathon => "hackathon",
            Category::Cultural => "cultural",
            Category::Workshop => "workshop",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Event attributes relevant to sponsor matching
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub category: Category,
    pub location: String,
    #[validate(range(min = 1))]
    #[serde(rename = "audienceSize")]
    pub audience_size: u32,
}

/// Sponsor attributes relevant to event matching
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Sponsor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(nested)]
    #[serde(rename = "budgetRange")]
    pub budget_range: BudgetRange,
    pub location: String,
    #[validate(nested)]
    pub preferences: SponsorPreferences,
}

/// Total sponsorship budget envelope
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_budget_range"))]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

impl BudgetRange {
    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.min && amount <= self.max
    }
}

fn validate_budget_range(range: &BudgetRange) -> Result<(), ValidationError> {
    if !range.min.is_finite() || !range.max.is_finite() || range.min < 0.0 {
        return Err(range_error("budget_range", "budget bounds must be finite and non-negative"));
    }
    if range.min > range.max {
        return Err(range_error("budget_range", "budget min must not exceed max"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SponsorPreferences {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[validate(nested)]
    #[serde(rename = "audienceSize")]
    pub audience_size: AudienceRange,
}

/// Preferred attendee-count band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_audience_range"))]
pub struct AudienceRange {
    pub min: u32,
    pub max: u32,
}

impl AudienceRange {
    pub fn contains(&self, audience: u32) -> bool {
        audience >= self.min && audience <= self.max
    }
}

fn validate_audience_range(range: &AudienceRange) -> Result<(), ValidationError> {
    if range.min > range.max {
        return Err(range_error("audience_range", "audience min must not exceed max"));
    }
    Ok(())
}

fn range_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Per-factor scores, each rounded independently to 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub category: u8,
    pub budget: u8,
    pub audience: u8,
    pub location: u8,
}

/// Compatibility of one event with one sponsor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u8,
    pub breakdown: MatchBreakdown,
}

/// Categorical label for a match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl MatchQuality {
    /// Bands are inclusive on their lower edge: 80, 65, 50
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => MatchQuality::Excellent,
            65..=79 => MatchQuality::Good,
            50..=64 => MatchQuality::Fair,
            _ => MatchQuality::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchQuality::Excellent => "excellent",
            MatchQuality::Good => "good",
            MatchQuality::Fair => "fair",
            MatchQuality::Poor => "poor",
        }
    }
}

impl fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sponsor paired with its score against a fixed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsorMatch {
    pub sponsor: Sponsor,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

/// Event paired with its score against a fixed sponsor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMatch {
    pub event: Event,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightsError {
    #[error("weight for {factor} is negative: {value}")]
    Negative { factor: &'static str, value: f64 },

    #[error("weights must sum to 1.0, got {0}")]
    BadSum(f64),
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub category: f64,
    pub budget: f64,
    pub audience: f64,
    pub location: f64,
}

impl ScoringWeights {
    const SUM_TOLERANCE: f64 = 1e-6;

    pub fn sum(&self) -> f64 {
        self.category + self.budget + self.audience + self.location
    }

    pub fn validate(&self) -> Result<(), WeightsError> {
        for (factor, value) in [
            ("category", self.category),
            ("budget", self.budget),
            ("audience", self.audience),
            ("location", self.location),
        ] {
            if value < 0.0 {
                return Err(WeightsError::Negative { factor, value });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(WeightsError::BadSum(sum));
        }

        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            category: 0.35,
            budget: 0.30,
            audience: 0.20,
            location: 0.15,
        }
    }
}
