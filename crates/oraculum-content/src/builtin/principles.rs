//! The seven strategic principles.

use crate::placeholder::{PLACEHOLDER, authored};
use crate::principle::{ExtractionPrompt, Principle, ReflectionPrompt, Story};

/// All seven principles, in number order.
pub fn all() -> Vec<Principle> {
    vec![
        perceptual_asymmetry(),
        irreplaceability(),
        super_synthesis(),
        infinite_leverage(),
        value_multiplication(),
        guaranteed_upside(),
        constraint_inversion(),
    ]
}

fn perceptual_asymmetry() -> Principle {
    Principle {
        slug: "perceptual-asymmetry".to_string(),
        number: 1,
        title: "Perceptual Asymmetry".to_string(),
        subtitle: "THE ROOT OF BREAKTHROUGH THINKING".to_string(),
        quote: "You can't see what you're standing too close to.".to_string(),
        core_principle:
            "The owner is always too close to see the real problem—and the real opportunity."
                .to_string(),
        narrative: authored(PERCEPTUAL_ASYMMETRY_NARRATIVE),
        key_insight: authored(
            "Your greatest assets fade into the background. Your biggest opportunities become \
             'just the way things are.' The thing you know best becomes the thing you can't see \
             clearly.",
        ),
        stories: vec![
            Story {
                title: "The $1 Million Truck".to_string(),
                hook: "One truck. One restaurant. One million dollar contract.".to_string(),
                narrative: MILLION_DOLLAR_TRUCK.to_string(),
                lesson: "Thirty years in business. Ten thousand times walking past those trucks \
                         without seeing them. The million-dollar contract was always there—she \
                         just couldn't see it until someone else did."
                    .to_string(),
            },
            Story {
                title: "The $500 Million Reframe".to_string(),
                hook: "They thought they had a marketing problem. Jay saw a completely different \
                       business."
                    .to_string(),
                narrative: FIVE_HUNDRED_MILLION_REFRAME.to_string(),
                lesson: "They knew they needed marketing help. They had no idea they were sitting \
                         on a completely different business entirely."
                    .to_string(),
            },
        ],
        reflection_prompts: vec![
            ReflectionPrompt {
                area: "Your Calendar".to_string(),
                question: "What are you spending time on that's worth $50/hour when you're \
                           capable of $1,000/hour work? What tasks have you kept because they've \
                           always been yours?"
                    .to_string(),
            },
            ReflectionPrompt {
                area: "Your Assets".to_string(),
                question: "What do you own, control, or have access to that sits idle? Equipment. \
                           Lists. Relationships. Knowledge. Expertise you stopped charging for \
                           years ago."
                    .to_string(),
            },
            ReflectionPrompt {
                area: "Your Constraints".to_string(),
                question: "What have you accepted as permanent that might just be habit? 'Our \
                           margins are too thin.' 'That's not how our customers buy.' 'We tried \
                           that.' Jay leans in when he hears these."
                    .to_string(),
            },
        ],
        ai_rationale: authored(PERCEPTUAL_ASYMMETRY_AI),
        extraction_prompt: ExtractionPrompt {
            title: "The Perceptual Asymmetry Audit".to_string(),
            description: "See your business the way Jay would see it—spotting the hidden assets \
                          and blind spots that proximity has made invisible."
                .to_string(),
            template: PERCEPTUAL_ASYMMETRY_TEMPLATE.to_string(),
            flagship: true,
        },
    }
}

fn irreplaceability() -> Principle {
    Principle {
        slug: "irreplaceability".to_string(),
        number: 2,
        title: "Irreplaceability".to_string(),
        subtitle: "BECOME THE ONLY LOGICAL CHOICE".to_string(),
        quote: "It's not about being louder. It's about being indispensable. It's about becoming \
                the only logical choice in your market."
            .to_string(),
        core_principle: "Position your business so they can only choose you.".to_string(),
        narrative: authored(PLACEHOLDER),
        key_insight: authored(PLACEHOLDER),
        stories: Vec::new(),
        reflection_prompts: Vec::new(),
        ai_rationale: authored(PLACEHOLDER),
        extraction_prompt: ExtractionPrompt {
            title: "The Irreplaceability Audit".to_string(),
            description: "Evaluate and strengthen your market position using Jay's \
                          Irreplaceability framework."
                .to_string(),
            template: IRREPLACEABILITY_TEMPLATE.to_string(),
            flagship: true,
        },
    }
}

fn super_synthesis() -> Principle {
    Principle {
        slug: "super-synthesis".to_string(),
        number: 3,
        title: "Super-Synthesis".to_string(),
        subtitle: "CROSS-INDUSTRY PATTERN RECOGNITION".to_string(),
        quote: "The answer to your problem has already been solved—in an industry you've never \
                looked at."
            .to_string(),
        core_principle: "Find solutions by synthesizing patterns across unrelated industries."
            .to_string(),
        narrative: authored(PLACEHOLDER),
        key_insight: authored(PLACEHOLDER),
        stories: Vec::new(),
        reflection_prompts: Vec::new(),
        ai_rationale: authored(PLACEHOLDER),
        extraction_prompt: ExtractionPrompt {
            title: "The Super-Synthesis Question Generator".to_string(),
            description: "Generate breakthrough questions using Jay's cross-industry synthesis \
                          method."
                .to_string(),
            template: SUPER_SYNTHESIS_TEMPLATE.to_string(),
            flagship: true,
        },
    }
}

fn infinite_leverage() -> Principle {
    Principle {
        slug: "infinite-leverage".to_string(),
        number: 4,
        title: "Infinite Leverage".to_string(),
        subtitle: "MULTIPLY EVERY UNIT OF EFFORT".to_string(),
        quote: "Why do something once when you can do it once and benefit forever?".to_string(),
        core_principle:
            "Design systems that multiply every unit of effort into multiple units of result."
                .to_string(),
        narrative: authored(PLACEHOLDER),
        key_insight: authored(PLACEHOLDER),
        stories: Vec::new(),
        reflection_prompts: Vec::new(),
        ai_rationale: authored(PLACEHOLDER),
        extraction_prompt: ExtractionPrompt {
            title: "The Infinite Leverage Audit".to_string(),
            description: "Identify and architect leverage points that multiply your results."
                .to_string(),
            template: INFINITE_LEVERAGE_TEMPLATE.to_string(),
            flagship: true,
        },
    }
}

fn value_multiplication() -> Principle {
    Principle {
        slug: "value-multiplication".to_string(),
        number: 5,
        title: "Value Multiplication".to_string(),
        subtitle: "THE THREE WAYS COMPOUND EFFECT".to_string(),
        quote: "There are only three ways to grow a business: more customers, higher transaction \
                value, more frequent purchases. Master all three and the math becomes exponential."
            .to_string(),
        core_principle: "Stack the three growth levers for compound results.".to_string(),
        narrative: authored(PLACEHOLDER),
        key_insight: authored(PLACEHOLDER),
        stories: Vec::new(),
        reflection_prompts: Vec::new(),
        ai_rationale: authored(PLACEHOLDER),
        extraction_prompt: ExtractionPrompt {
            title: "The Three Ways Growth Calculator".to_string(),
            description: "Calculate your compound growth potential using Jay's Three Ways \
                          framework."
                .to_string(),
            template: VALUE_MULTIPLICATION_TEMPLATE.to_string(),
            flagship: false,
        },
    }
}

fn guaranteed_upside() -> Principle {
    Principle {
        slug: "guaranteed-upside".to_string(),
        number: 6,
        title: "Guaranteed Upside".to_string(),
        subtitle: "RISK REVERSAL & PREEMINENCE".to_string(),
        quote: "When you take away the risk, you take away the reason to say no.".to_string(),
        core_principle:
            "Structure offers so the customer has nothing to lose and everything to gain."
                .to_string(),
        narrative: authored(PLACEHOLDER),
        key_insight: authored(PLACEHOLDER),
        stories: Vec::new(),
        reflection_prompts: Vec::new(),
        ai_rationale: authored(PLACEHOLDER),
        extraction_prompt: ExtractionPrompt {
            title: "The Risk Reversal Architect".to_string(),
            description: "Design irresistible offers using Jay's risk reversal methodology."
                .to_string(),
            template: GUARANTEED_UPSIDE_TEMPLATE.to_string(),
            flagship: true,
        },
    }
}

fn constraint_inversion() -> Principle {
    Principle {
        slug: "constraint-inversion".to_string(),
        number: 7,
        title: "Constraint Inversion".to_string(),
        subtitle: "LOVE WHAT YOU'VE BEEN TRAINED TO HATE".to_string(),
        quote: "Your biggest constraint isn't holding you back. Your perception of it is."
            .to_string(),
        core_principle: "Transform limitations into your greatest competitive advantages."
            .to_string(),
        narrative: authored(PLACEHOLDER),
        key_insight: authored(PLACEHOLDER),
        stories: Vec::new(),
        reflection_prompts: Vec::new(),
        ai_rationale: authored(PLACEHOLDER),
        extraction_prompt: ExtractionPrompt {
            title: "The Constraint Inversion Matrix".to_string(),
            description: "Transform your biggest limitation into your greatest advantage."
                .to_string(),
            template: CONSTRAINT_INVERSION_TEMPLATE.to_string(),
            flagship: true,
        },
    }
}

// ============================================================================
// Long-form copy
// ============================================================================

const PERCEPTUAL_ASYMMETRY_NARRATIVE: &str = r#"When Jay walks into a business, he does something most consultants don't. He ignores the problem.

The owner spends twenty minutes unloading everything that's broken—leads dried up, cash flow's a mess, some competitor eating their lunch.

Instead of immediately shouting out an answer, he gets curious. He collects context. He asks questions they probably haven't been asked before.

Jay assumes the stated problem is never the real problem, because in almost every situation, the owner is too close to see it."#;

const MILLION_DOLLAR_TRUCK: &str = r#"A roofing company with thirty years of solid reputation had a dozen trucks sitting behind a chain-link fence every weekend. Nicely decaled, company logo, phone number in big graphics. They just sat there. Invisible.

Jay asked one question: "What happens to your trucks on weekends?"

His solution was simple. Hire two kids to drive the trucks on weekends to shopping centers, beaches—anywhere with high foot traffic. Cost: $1,200 for a weekend. Profit on one roofing job: $15,000.

Before they even implemented the full strategy, a single truck parked at a restaurant caught an HOA board member's eye.

He called that afternoon. One million dollar HOA contract."#;

const FIVE_HUNDRED_MILLION_REFRAME: &str = r#"A small gold brokerage in Minneapolis was doing about $300,000 in revenue. Gold newsletters were exploding, and they had no idea how to reach buyers.

But Jay didn't see a brokerage with a marketing problem.

He saw a media company that didn't know it was a media company.

A subscriber base that could be monetized multiple ways. Inserts. Renewals. Backend offers. The brokerage was the least interesting thing they owned.

Within a couple of years, that $300,000 company grew to $500 million."#;

const PERCEPTUAL_ASYMMETRY_AI: &str = r#"Most people use AI backwards. They ask for answers and get generic responses. Surface-level advice and the same stuff sitting on business bookshelves since 2003.

The value isn't in answers. The value is in questions.

Jay doesn't tell clients what to do. He asks questions that make invisible opportunities visible. He forces them to see what they'd stopped seeing.

AI hasn't gotten used to your business. It doesn't know "that's how we've always done it." It has no emotional attachment to your current way of operating. It can look at your situation the way you'd look at someone else's."#;

const PERCEPTUAL_ASYMMETRY_TEMPLATE: &str = r#"You are a strategic advisor trained in Jay Abraham's methodology of Perceptual Asymmetry—the principle that business owners are always too close to their own operations to see their biggest opportunities.

I'm going to describe my business. Your job is NOT to solve my stated problems. Your job is to:

1. **Question my assumptions** - What am I treating as fixed that might be flexible?
2. **Find my hidden assets** - What do I own, control, or have access to that I'm not leveraging?
3. **Identify my blind spots** - What have I stopped seeing because it's "just how we do things"?

Ask me the questions Jay would ask. The ones that make me pause. The ones I haven't been asked before.

After I describe my business, start with ONE powerful question—the kind that makes the room go quiet.

---

**My Business:**
[Describe your business in 2-3 paragraphs. Include: what you sell, who you serve, your main challenges, and what you believe is holding you back.]"#;

const IRREPLACEABILITY_TEMPLATE: &str = r#"Evaluate and strengthen my market position using Jay Abraham's Irreplaceability framework.

My business: [DESCRIBE BRIEFLY]
My main competitors: [LIST 2-3]

Analyze:
1. On what dimensions am I currently replaceable?
2. What would need to be true for a customer to have NO alternative to me?
3. The "only I can" statement I could truthfully make
4. Three investments I could make to widen the irreplaceability moat
5. The risk if I stay replaceable vs. the opportunity if I become irreplaceable"#;

const SUPER_SYNTHESIS_TEMPLATE: &str = r#"Generate breakthrough questions using Jay Abraham's cross-industry synthesis method.

My industry: [YOUR INDUSTRY]
My specific challenge: [THE PROBLEM]

Do this:
1. Identify 3 unrelated industries that have solved a similar fundamental problem
2. For each industry, extract the underlying principle (not the tactic)
3. Show me how to adapt each principle to my specific context
4. Create a synthesis that combines elements from all three
5. Give me the one question I should be asking that no one in my industry is asking"#;

const INFINITE_LEVERAGE_TEMPLATE: &str = r#"Help me architect infinite leverage using Jay Abraham's methodology.

My business: [DESCRIBE]

Analyze:
1. What am I doing repeatedly that could be systematized once?
2. What partnerships could multiply my reach without multiplying my effort?
3. What one-time efforts could produce ongoing returns?
4. Where am I trading time for money when I could be trading systems for money?
5. Design my infinite leverage system—the structure that works while I sleep."#;

const VALUE_MULTIPLICATION_TEMPLATE: &str = r#"Using Jay Abraham's "Three Ways to Grow a Business" framework, calculate my growth potential.

Current metrics:
- Number of customers: [X]
- Average transaction value: $[Y]
- Purchase frequency per year: [Z]

Show me:
1. If I increase each by just 10%, what's my total revenue growth?
2. Which of the three levers has the biggest opportunity in my business?
3. Three specific tactics for the highest-potential lever
4. A 90-day implementation roadmap"#;

const GUARANTEED_UPSIDE_TEMPLATE: &str = r#"Help me design a risk reversal strategy using Jay Abraham's methodology.

My offer: [DESCRIBE WHAT YOU SELL]
Current objections I hear: [LIST 2-3]

Create:
1. What specific risks does my customer perceive (real or imagined)?
2. How can I absorb or eliminate each risk?
3. A guarantee structure that makes saying "yes" the obvious choice
4. The psychological shift this creates in the buyer's mind
5. How to communicate this without sounding desperate"#;

const CONSTRAINT_INVERSION_TEMPLATE: &str = r#"Apply Jay Abraham's Constraint Inversion principle to my biggest limitation.

My constraint: [DESCRIBE THE LIMITATION]

Walk me through:
1. What assumptions am I making about this constraint?
2. Who has turned a similar constraint into an advantage?
3. What would my business look like if this constraint was actually my greatest asset?
4. Three unconventional strategies to leverage this "weakness"
5. The first counterintuitive move I should make tomorrow"#;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_principles_in_number_order() {
        let principles = all();
        assert_eq!(principles.len(), 7);
        for (index, principle) in principles.iter().enumerate() {
            assert_eq!(principle.number, index as u32 + 1);
        }
    }

    #[test]
    fn test_first_principle_is_fully_written() {
        let principles = all();
        let first = &principles[0];
        assert_eq!(first.slug, "perceptual-asymmetry");
        assert!(first.narrative.is_some());
        assert!(first.key_insight.is_some());
        assert_eq!(first.stories.len(), 2);
        assert_eq!(first.reflection_prompts.len(), 3);
        assert!(first.has_written_sections());
    }

    #[test]
    fn test_unwritten_principles_carry_no_placeholder_text() {
        for principle in all() {
            for section in [
                principle.narrative.as_deref(),
                principle.key_insight.as_deref(),
                principle.ai_rationale.as_deref(),
            ]
            .into_iter()
            .flatten()
            {
                assert_ne!(section.trim(), PLACEHOLDER, "slug {}", principle.slug);
            }
        }
    }

    #[test]
    fn test_every_principle_has_an_extraction_template() {
        for principle in all() {
            assert!(!principle.extraction_prompt.template.is_empty());
            assert!(!principle.extraction_prompt.title.is_empty());
        }
    }

    #[test]
    fn test_flagship_split() {
        // Six flagship extractions; the Three Ways calculator is the exception.
        let principles = all();
        let flagship_count = principles
            .iter()
            .filter(|p| p.extraction_prompt.flagship)
            .count();
        assert_eq!(flagship_count, 6);
        let calculator = &principles[4];
        assert_eq!(calculator.slug, "value-multiplication");
        assert!(!calculator.extraction_prompt.flagship);
    }
}
