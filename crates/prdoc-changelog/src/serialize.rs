use crate::aggregate::ReleasePlan;

/// JSON layout for a serialized plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Single line, no whitespace. Stable for diffing in CI.
    #[default]
    Minified,
    Pretty,
}

pub fn plan_to_json(plan: &ReleasePlan, style: JsonStyle) -> Result<String, serde_json::Error> {
    match style {
        JsonStyle::Minified => serde_json::to_string(plan),
        JsonStyle::Pretty => serde_json::to_string_pretty(plan),
    }
}
