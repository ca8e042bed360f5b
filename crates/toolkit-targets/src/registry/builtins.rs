//! Built-in target catalogue
//!
//! All listing, lookup, and fan-out derive from [`builtin_targets`].

use super::{FrontmatterStyle, TargetDefinition};

/// Number of built-in targets.
pub const BUILTIN_COUNT: usize = 20;

const SKILL_FILE: &str = "SKILL.md";

/// Returns all built-in target definitions in catalogue order.
pub fn builtin_targets() -> Vec<TargetDefinition> {
    vec![
        // IDEs
        TargetDefinition::new("cursor", "Cursor")
            .with_rules(".cursor/rules")
            .with_skills(".cursor/commands"),
        TargetDefinition::new("windsurf", "Windsurf")
            .with_rules(".windsurf/rules")
            .with_skills(".windsurf/workflows")
            .with_workflows(".windsurf/workflows")
            .with_frontmatter(FrontmatterStyle::Static(
                "description: Auto-synced by ai-toolkit".into(),
            )),
        TargetDefinition::new("kiro", "Kiro")
            .with_rules(".kiro/steering")
            .with_skills(".kiro/specs/workflows")
            .with_workflows(".kiro/specs/workflows"),
        TargetDefinition::new("trae", "Trae").with_rules(".trae/rules"),
        TargetDefinition::new("zed", "Zed").with_rules(".zed/rules"),
        TargetDefinition::new("antigravity", "Antigravity")
            .with_rules(".agent/rules")
            .with_workflows(".agent/workflows"),
        TargetDefinition::new("qoder", "Qoder").with_rules(".qoder/rules"),
        // CLI agents
        TargetDefinition::new("claude", "Claude Code")
            .with_rules(".claude/rules")
            .with_skills(".claude/skills")
            .with_frontmatter(FrontmatterStyle::SkillName),
        TargetDefinition::new("gemini", "Gemini CLI")
            .with_rules(".gemini/rules")
            .with_skills(".gemini/skills"),
        TargetDefinition::new("codex", "Codex")
            .with_skills(".codex/skills")
            .with_fixed_filename(SKILL_FILE)
            .with_frontmatter(FrontmatterStyle::SkillName),
        TargetDefinition::new("opencode", "OpenCode")
            .with_skills(".opencode/skill")
            .with_fixed_filename(SKILL_FILE)
            .with_frontmatter(FrontmatterStyle::SkillName),
        TargetDefinition::new("junie", "Junie").with_rules(".junie"),
        // Autonomous agents
        TargetDefinition::new("cline", "Cline")
            .with_rules(".clinerules")
            .with_workflows(".clinerules/workflows"),
        TargetDefinition::new("roo", "Roo")
            .with_rules(".roo/rules")
            .with_skills(".roo/commands"),
        TargetDefinition::new("continue", "Continue")
            .with_rules(".continue/rules")
            .with_skills(".continue/prompts"),
        TargetDefinition::new("augment", "Augment").with_rules(".augment/rules"),
        // Copilots
        TargetDefinition::new("copilot", "GitHub Copilot")
            .with_rules(".github/instructions")
            .with_skills(".github/prompts"),
        TargetDefinition::new("amazonq", "Amazon Q").with_rules(".amazonq/rules"),
        // Hosted builders
        TargetDefinition::new("replit", "Replit").with_rules(".replit"),
        TargetDefinition::new("bolt", "Bolt").with_rules(".bolt"),
    ]
}
