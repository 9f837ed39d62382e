//! The authored workflows.

use crate::workflow::{Workflow, WorkflowStep};

/// All authored workflows.
pub fn all() -> Vec<Workflow> {
    vec![strategic_stacking(), partnership_accelerator()]
}

fn strategic_stacking() -> Workflow {
    Workflow {
        id: "strategic-stacking".to_string(),
        title: "Strategic Stacking".to_string(),
        subtitle: "THE COMPOUND GROWTH PATH".to_string(),
        description: "Layer Jay's seven principles to create exponential leverage. Each step \
                      builds on the previous, creating a compound effect that multiplies your \
                      results."
            .to_string(),
        principle: "ALL SEVEN PRINCIPLES".to_string(),
        estimated_time: "2-3 hours".to_string(),
        steps: vec![
            WorkflowStep {
                number: 1,
                title: "Perception Audit".to_string(),
                description: "Identify the opportunities you're missing because of how you've \
                              been trained to see your business."
                    .to_string(),
                prompt: PERCEPTION_AUDIT.to_string(),
                duration: "15 min".to_string(),
            },
            WorkflowStep {
                number: 2,
                title: "Hidden Asset Discovery".to_string(),
                description: "Map the untapped assets, relationships, and opportunities hiding \
                              in plain sight."
                    .to_string(),
                prompt: HIDDEN_ASSET_DISCOVERY.to_string(),
                duration: "20 min".to_string(),
            },
            WorkflowStep {
                number: 3,
                title: "Irreplaceability Gap Analysis".to_string(),
                description: "Find where you're replaceable and design your path to category of \
                              one."
                    .to_string(),
                prompt: IRREPLACEABILITY_GAP.to_string(),
                duration: "25 min".to_string(),
            },
            WorkflowStep {
                number: 4,
                title: "Leverage Architecture".to_string(),
                description: "Design systems that multiply every unit of effort into multiple \
                              units of result."
                    .to_string(),
                prompt: LEVERAGE_ARCHITECTURE.to_string(),
                duration: "30 min".to_string(),
            },
            WorkflowStep {
                number: 5,
                title: "Implementation Blueprint".to_string(),
                description: "Turn insights into a 90-day action plan with specific next steps."
                    .to_string(),
                prompt: IMPLEMENTATION_BLUEPRINT.to_string(),
                duration: "20 min".to_string(),
            },
        ],
    }
}

fn partnership_accelerator() -> Workflow {
    Workflow {
        id: "partnership-accelerator".to_string(),
        title: "Partnership Accelerator".to_string(),
        subtitle: "THE PREEMINENCE PATH".to_string(),
        description: "Craft irresistible partnership proposals using Jay's Preeminence \
                      philosophy. Lead with their success, not yours."
            .to_string(),
        principle: "INFINITE LEVERAGE + PREEMINENCE".to_string(),
        estimated_time: "45 minutes".to_string(),
        steps: vec![
            WorkflowStep {
                number: 1,
                title: "Partner Research".to_string(),
                description: "Deep-dive into your target partner's business, challenges, and \
                              goals."
                    .to_string(),
                prompt: PARTNER_RESEARCH.to_string(),
                duration: "10 min".to_string(),
            },
            WorkflowStep {
                number: 2,
                title: "Value Mapping".to_string(),
                description: "Identify exactly how you can contribute to THEIR success."
                    .to_string(),
                prompt: VALUE_MAPPING.to_string(),
                duration: "15 min".to_string(),
            },
            WorkflowStep {
                number: 3,
                title: "Proposal Craft".to_string(),
                description: "Write the outreach that makes saying 'yes' the obvious choice."
                    .to_string(),
                prompt: PROPOSAL_CRAFT.to_string(),
                duration: "20 min".to_string(),
            },
        ],
    }
}

// ============================================================================
// Step prompts
// ============================================================================

const PERCEPTION_AUDIT: &str = r#"Let's start with Perceptual Asymmetry. Describe your business in 2-3 sentences, then answer:

1. What do you believe is your main product/service?
2. Who do you think your competition is?
3. What do you consider your biggest limitation?

I'll show you what Jay Abraham might see differently."#;

const HIDDEN_ASSET_DISCOVERY: &str = r#"Based on your Perception Audit, let's find your hidden assets.

List everything your business has access to:
- Customer relationships
- Supplier relationships
- Skills and knowledge
- Physical assets
- Data and information
- Brand equity
- Distribution channels

I'll identify which ones are underlevered and how to monetize them."#;

const IRREPLACEABILITY_GAP: &str = r#"Now let's examine your Irreplaceability.

1. If you disappeared tomorrow, what would your customers do?
2. What alternatives exist for what you offer?
3. What could you do that NO ONE else could truthfully claim?

I'll help you design your irreplaceability strategy."#;

const LEVERAGE_ARCHITECTURE: &str = r#"Let's architect your leverage.

From your hidden assets and irreplaceability work:
1. What can be systematized and repeated?
2. What partnerships could multiply your reach?
3. What one-time efforts could produce ongoing returns?

I'll help you design your infinite leverage system."#;

const IMPLEMENTATION_BLUEPRINT: &str = r#"Final step: Your Strategic Stack Blueprint.

Based on everything we've uncovered, I'll create:
1. Your top 3 leverage opportunities ranked by impact
2. A 90-day implementation roadmap
3. The ONE thing to do tomorrow that starts the domino effect
4. Metrics to track your progress

Let's make this actionable."#;

const PARTNER_RESEARCH: &str = r#"Who do you want to partner with? Tell me:

1. Company/Person name
2. What they're known for
3. Their current challenges (if known)
4. What you think they want to achieve

I'll help you see their world through their eyes."#;

const VALUE_MAPPING: &str = r#"Based on your partner research, let's map your value to their goals.

1. What unique asset/capability do you have?
2. How does this directly advance THEIR objectives?
3. What would they gain that they can't easily get elsewhere?

I'll help you frame this in Preeminence terms."#;

const PROPOSAL_CRAFT: &str = r#"Now let's craft your Preeminence-based proposal.

I'll generate:
1. An opening that proves you understand their world
2. A value proposition framed around their success
3. A risk-reversal that removes their downside
4. A low-friction next step

This will feel different from anything else in their inbox."#;
