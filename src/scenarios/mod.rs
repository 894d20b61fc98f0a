//! One module per principle or pattern. Each exposes `run_violation` and
//! `run_obeying`, writing to whatever sink the caller hands in.

pub mod builder;
pub mod dip;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod srp;

use std::fmt;
use std::io::Write;

use clap::ValueEnum;
use serde::Deserialize;

use crate::{DemoConfig, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Srp,
    Ocp,
    Lsp,
    Isp,
    Dip,
    Builder,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::Srp,
        Scenario::Ocp,
        Scenario::Lsp,
        Scenario::Isp,
        Scenario::Dip,
        Scenario::Builder,
    ];

    /// Short label used in the demo headers.
    pub fn title(self) -> &'static str {
        match self {
            Scenario::Srp => "SRP",
            Scenario::Ocp => "OCP",
            Scenario::Lsp => "LSP",
            Scenario::Isp => "ISP",
            Scenario::Dip => "DIP",
            Scenario::Builder => "Builder",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scenario::Srp => "Single Responsibility: split persistence and reporting out of the product manager",
            Scenario::Ocp => "Open/Closed: add shapes without editing the area calculator",
            Scenario::Lsp => "Liskov Substitution: an SMS sender must not reject what email accepts",
            Scenario::Isp => "Interface Segregation: robots should not have to eat or sleep",
            Scenario::Dip => "Dependency Inversion: notification service depends on a sender trait",
            Scenario::Builder => "Builder: named, validated construction instead of positional arguments",
        }
    }

    pub fn run_violation(self, out: &mut dyn Write, config: &DemoConfig) -> Result<()> {
        match self {
            Scenario::Srp => srp::run_violation(out),
            Scenario::Ocp => ocp::run_violation(out),
            Scenario::Lsp => lsp::run_violation(out, config.sms_limit),
            Scenario::Isp => isp::run_violation(out),
            Scenario::Dip => dip::run_violation(out),
            Scenario::Builder => builder::run_violation(out),
        }
    }

    pub fn run_obeying(self, out: &mut dyn Write, config: &DemoConfig) -> Result<()> {
        match self {
            Scenario::Srp => srp::run_obeying(out),
            Scenario::Ocp => ocp::run_obeying(out),
            Scenario::Lsp => lsp::run_obeying(out, config.sms_limit),
            Scenario::Isp => isp::run_obeying(out),
            Scenario::Dip => dip::run_obeying(out),
            Scenario::Builder => builder::run_obeying(out),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_canonical_order() {
        let titles: Vec<&str> = Scenario::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec!["SRP", "OCP", "LSP", "ISP", "DIP", "Builder"]);
    }

    #[test]
    fn test_every_obeying_half_succeeds() {
        let config = DemoConfig::default();
        for scenario in Scenario::ALL {
            let mut out = Vec::new();
            scenario
                .run_obeying(&mut out, &config)
                .unwrap_or_else(|e| panic!("{scenario} obeying failed: {e}"));
            assert!(!out.is_empty(), "{scenario} printed nothing");
        }
    }

    #[test]
    fn test_only_lsp_violation_escapes() {
        let config = DemoConfig::default();
        for scenario in Scenario::ALL {
            let mut out = Vec::new();
            let result = scenario.run_violation(&mut out, &config);
            assert_eq!(result.is_err(), scenario == Scenario::Lsp, "{scenario}");
        }
    }

    #[test]
    fn test_value_enum_parses_lowercase_names() {
        assert_eq!(Scenario::from_str("builder", true).unwrap(), Scenario::Builder);
        assert_eq!(Scenario::from_str("LSP", true).unwrap(), Scenario::Lsp);
        assert!(Scenario::from_str("kiss", true).is_err());
    }
}
