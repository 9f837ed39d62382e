//! The prompt library entries.
//!
//! A single canonical list. The original authoring had a second, slightly
//! narrower copy of this catalog inline on another page; that duplication
//! was content debt, not a contract, and is not reproduced here.

use crate::prompt::{Category, PromptEntry};

/// All library prompts, in authored order.
pub fn all() -> Vec<PromptEntry> {
    vec![
        PromptEntry {
            id: 1,
            title: "Hidden Asset Discovery Audit".to_string(),
            category: Category::Diagnosis,
            principle: "PERCEPTUAL ASYMMETRY".to_string(),
            template: HIDDEN_ASSET_TEMPLATE.to_string(),
            description: "Uncover the assets hiding in plain sight. Based on Jay's methodology \
                          of finding value others miss."
                .to_string(),
            tags: tags(&["assets", "leverage", "opportunity"]),
            flagship: true,
            external_tool_url: Some("https://jayi.app/prompt/hidden-asset".to_string()),
        },
        PromptEntry {
            id: 2,
            title: "Three Ways Growth Calculator".to_string(),
            category: Category::Strategy,
            principle: "VALUE MULTIPLICATION".to_string(),
            template: THREE_WAYS_TEMPLATE.to_string(),
            description: "The compound math that turned this simple framework into $75B in \
                          client results."
                .to_string(),
            tags: tags(&["growth", "math", "leverage"]),
            flagship: false,
            external_tool_url: None,
        },
        PromptEntry {
            id: 3,
            title: "Partnership Preeminence Script".to_string(),
            category: Category::Execution,
            principle: "INFINITE LEVERAGE".to_string(),
            template: PARTNERSHIP_TEMPLATE.to_string(),
            description: "The approach that turns cold outreach into warm welcomes. Lead with \
                          their success."
                .to_string(),
            tags: tags(&["partnerships", "preeminence", "outreach"]),
            flagship: true,
            external_tool_url: Some("https://jayi.app/prompt/partnership".to_string()),
        },
        PromptEntry {
            id: 4,
            title: "Constraint Inversion Matrix".to_string(),
            category: Category::Reframe,
            principle: "CONSTRAINT INVERSION".to_string(),
            template: CONSTRAINT_TEMPLATE.to_string(),
            description: "The seventh principle: Learn to love what you've been trained to hate."
                .to_string(),
            tags: tags(&["constraints", "reframe", "innovation"]),
            flagship: true,
            external_tool_url: None,
        },
        PromptEntry {
            id: 5,
            title: "Super-Synthesis Question Generator".to_string(),
            category: Category::Thinking,
            principle: "SUPER-SYNTHESIS".to_string(),
            template: SYNTHESIS_TEMPLATE.to_string(),
            description: "See patterns across 1,000+ industries. Find answers where no one else \
                          is looking."
                .to_string(),
            tags: tags(&["synthesis", "innovation", "questions"]),
            flagship: false,
            external_tool_url: None,
        },
        PromptEntry {
            id: 6,
            title: "Irreplaceability Audit".to_string(),
            category: Category::Positioning,
            principle: "IRREPLACEABILITY".to_string(),
            template: IRREPLACEABILITY_TEMPLATE.to_string(),
            description: "Move from commodity to category of one. Create the moat that can't be \
                          crossed."
                .to_string(),
            tags: tags(&["positioning", "differentiation", "moat"]),
            flagship: false,
            external_tool_url: None,
        },
    ]
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|t| t.to_string()).collect()
}

// ============================================================================
// Template copy
// ============================================================================

const HIDDEN_ASSET_TEMPLATE: &str = r#"Analyze my business through Jay Abraham's "Hidden Asset" lens. I'll describe my business, and you'll identify at least 5 overlooked assets I'm not leveraging.

For each hidden asset, tell me:
1. What it is and why it qualifies as an asset
2. The current "leak" - how value is being lost
3. One specific monetization strategy with a 90-day action plan
4. The potential revenue impact (conservative estimate)

My business: [DESCRIBE YOUR BUSINESS]"#;

const THREE_WAYS_TEMPLATE: &str = r#"Using Jay Abraham's "Three Ways to Grow a Business" framework, calculate my growth potential.

Current metrics:
- Number of customers: [X]
- Average transaction value: $[Y]
- Purchase frequency per year: [Z]

Show me:
1. If I increase each by just 10%, what's my total revenue growth?
2. Which of the three levers has the biggest opportunity in my business?
3. Three specific tactics for the highest-potential lever
4. A 90-day implementation roadmap"#;

const PARTNERSHIP_TEMPLATE: &str = r#"Write a partnership proposal using Jay Abraham's "Preeminence" philosophy.

I want to approach [COMPANY/PERSON] for a strategic partnership.

My offer: [WHAT I BRING]
What I want: [DESIRED OUTCOME]

Create:
1. An opening that demonstrates I've done my homework on THEIR business
2. A value proposition framed around THEIR success (not mine)
3. A risk-reversal that makes saying "yes" the obvious choice
4. A specific next step that's low-commitment but high-momentum"#;

const CONSTRAINT_TEMPLATE: &str = r#"Apply Jay Abraham's Constraint Inversion principle to my biggest limitation.

My constraint: [DESCRIBE THE LIMITATION]

Walk me through:
1. What assumptions am I making about this constraint?
2. Who has turned a similar constraint into an advantage?
3. What would my business look like if this constraint was actually my greatest asset?
4. Three unconventional strategies to leverage this "weakness"
5. The first counterintuitive move I should make tomorrow"#;

const SYNTHESIS_TEMPLATE: &str = r#"Generate breakthrough questions using Jay Abraham's cross-industry synthesis method.

My industry: [YOUR INDUSTRY]
My specific challenge: [THE PROBLEM]

Do this:
1. Identify 3 unrelated industries that have solved a similar fundamental problem
2. For each industry, extract the underlying principle (not the tactic)
3. Show me how to adapt each principle to my specific context
4. Create a synthesis that combines elements from all three
5. Give me the one question I should be asking that no one in my industry is asking"#;

const IRREPLACEABILITY_TEMPLATE: &str = r#"Evaluate and strengthen my market position using Jay's Irreplaceability framework.

My business: [DESCRIBE BRIEFLY]
My main competitors: [LIST 2-3]

Analyze:
1. On what dimensions am I currently replaceable?
2. What would need to be true for a customer to have NO alternative to me?
3. The "only I can" statement I could truthfully make
4. Three investments I could make to widen the irreplaceability moat
5. The risk if I stay replaceable vs. the opportunity if I become irreplaceable"#;

// ============================================================================
// Tests
// ============================================================================
