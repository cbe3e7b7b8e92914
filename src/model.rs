use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// One of the three planner features. Each owns a tab, a form and a result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Plan,
    Tips,
    Suggest,
}

impl Feature {
    pub const ALL: [Feature; 3] = [Feature::Plan, Feature::Tips, Feature::Suggest];

    /// Value of the `data-tab` attribute and prefix of the DOM ids.
    pub fn key(self) -> &'static str {
        match self {
            Feature::Plan => "plan",
            Feature::Tips => "tips",
            Feature::Suggest => "suggest",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            Feature::Plan => "✈️ Plan a Trip",
            Feature::Tips => "💡 Travel Tips",
            Feature::Suggest => "🌍 Get Suggestions",
        }
    }

    pub fn panel_title(self) -> &'static str {
        match self {
            Feature::Plan => "Your Travel Plan",
            Feature::Tips => "Travel Tips",
            Feature::Suggest => "Destination Suggestions",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Feature::Plan => "Travel plan generated successfully!",
            Feature::Tips => "Travel tips loaded successfully!",
            Feature::Suggest => "Destination suggestions loaded!",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Feature::Plan => "Failed to generate travel plan. Please try again.",
            Feature::Tips => "Failed to get travel tips. Please try again.",
            Feature::Suggest => "Failed to get suggestions. Please try again.",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Feature::Plan => 0,
            Feature::Tips => 1,
            Feature::Suggest => 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub destination: String,
    pub number_of_days: u32,
    pub interests: Option<String>,
    pub budget: Option<String>,
    pub travel_style: Option<String>,
}

/// Raw field values of the plan form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanForm {
    pub destination: String,
    pub number_of_days: String,
    pub interests: String,
    pub budget: String,
    pub travel_style: String,
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

pub fn require_destination(s: &str) -> Result<&str, FormError> {
    if s.is_empty() {
        Err(FormError::MissingDestination)
    } else {
        Ok(s)
    }
}

impl PlanForm {
    /// Values are used as typed; only empty optional fields become null.
    pub fn to_request(&self) -> Result<PlanRequest, FormError> {
        let destination = require_destination(&self.destination)?.to_string();
        let number_of_days = match self.number_of_days.trim().parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => return Err(FormError::InvalidDays(self.number_of_days.clone())),
        };

        Ok(PlanRequest {
            destination,
            number_of_days,
            interests: non_empty(&self.interests),
            budget: non_empty(&self.budget),
            travel_style: non_empty(&self.travel_style),
        })
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    pub destination: String,
    pub number_of_days: u32,
    pub overview: String,
    #[serde(default)]
    pub recommendations: Option<Vec<String>>,
    #[serde(default)]
    pub budget_estimate: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TipsResult {
    pub destination: String,
    pub tips: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SuggestRequest {
    pub preferences: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SuggestResult {
    pub suggestions: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
}
