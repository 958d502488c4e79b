//! Solver configuration.
//!
//! `strictness` scales every soft penalty and reward; hard-conflict terms
//! are unaffected by it. The user-authored scheduling rules and most
//! settings flags are carried through for the surrounding application but
//! are not consulted by the cost function.

use serde::{Deserialize, Serialize};

/// Knobs controlling how the solver weighs soft preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Soft-penalty strictness, 0–10. The effective multiplier on every
    /// soft term is `strictness / 5`, so 5 is the neutral setting and 0
    /// disables soft scoring entirely.
    pub strictness: u32,
    /// Feature flags.
    pub settings: Settings,
    /// User-authored scheduling rules. Parsed and carried, not yet
    /// consulted at scoring time.
    pub scheduling_rules: Vec<SchedulingRule>,
}

impl SolverConfig {
    /// Creates a config with the given strictness.
    pub fn new(strictness: u32) -> Self {
        Self {
            strictness,
            ..Self::default()
        }
    }

    /// Sets the settings flags.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Adds a scheduling rule.
    pub fn with_rule(mut self, rule: SchedulingRule) -> Self {
        self.scheduling_rules.push(rule);
        self
    }

    /// Multiplier applied to every soft penalty and reward.
    #[inline]
    pub fn penalty_multiplier(&self) -> f64 {
        f64::from(self.strictness) / 5.0
    }
}

/// Application-level feature flags.
///
/// Only `enforce_standard_rules` affects scoring (daily-load limits); the
/// other flags belong to the surrounding application.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Allow gaps ("windows") in a day's schedule.
    pub allow_windows: bool,
    /// Apply the standard daily-load limits during scoring.
    pub enforce_standard_rules: bool,
    /// Respect the production calendar (holidays, transferred work days).
    pub respect_production_calendar: bool,
    /// Use the shortened slot grid before holidays.
    pub use_shortened_pre_holiday_schedule: bool,
}

/// How strongly a scheduling rule binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleSeverity {
    Strict,
    Strong,
    Medium,
    Weak,
}

/// What a scheduling rule asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleAction {
    AvoidTime,
    PreferTime,
    MaxPerDay,
    MinPerDay,
    AvoidRoom,
    PreferRoom,
}

/// Which entities a scheduling rule applies to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleCondition {
    /// Entity kind: "teacher", "group", "subject", or "classType".
    pub entity_type: String,
    /// Matching entity ids.
    pub entity_ids: Vec<String>,
    /// Restricts the rule to one class type, if set.
    pub class_type: Option<String>,
}

/// A user-authored scheduling rule.
///
/// Reserved input: rules are round-tripped through the config so the
/// application can manage them, but the cost function does not evaluate
/// them yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingRule {
    /// Unique rule identifier.
    pub id: String,
    /// Entities the rule applies to.
    pub conditions: Vec<RuleCondition>,
    /// Requested behavior.
    pub action: RuleAction,
    /// Binding strength.
    pub severity: RuleSeverity,
    /// Day the rule targets, if any.
    pub day: Option<String>,
    /// Time slot the rule targets, if any.
    pub time_slot_id: Option<String>,
    /// Numeric parameter (e.g. the N of MaxPerDay), if any.
    pub param: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penalty_multiplier() {
        assert_eq!(SolverConfig::new(5).penalty_multiplier(), 1.0);
        assert_eq!(SolverConfig::new(10).penalty_multiplier(), 2.0);
        assert_eq!(SolverConfig::new(0).penalty_multiplier(), 0.0);
    }

    #[test]
    fn test_rules_round_trip() {
        let config = SolverConfig::new(7).with_rule(SchedulingRule {
            id: "r1".into(),
            conditions: vec![RuleCondition {
                entity_type: "teacher".into(),
                entity_ids: vec!["t1".into()],
                class_type: None,
            }],
            action: RuleAction::AvoidTime,
            severity: RuleSeverity::Strong,
            day: Some("Saturday".into()),
            time_slot_id: None,
            param: None,
        });

        let json = serde_json::to_string(&config).unwrap();
        let back: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.strictness, 7);
        assert_eq!(back.scheduling_rules.len(), 1);
        assert_eq!(back.scheduling_rules[0].action, RuleAction::AvoidTime);
    }
}
