//! Built-in founder journey content.

use super::{Choice, Scenario, Stage};
use crate::guidance::FundingGuidance;
use crate::{ChoiceKey, Impact, ScenarioKey, StageId};

fn choice(
    key: &str,
    title: &str,
    description: &str,
    immediate: &str,
    long_term: &str,
    impact: Impact,
) -> Choice {
    Choice {
        key: ChoiceKey::new(key),
        title: title.to_string(),
        description: description.to_string(),
        immediate_implication: immediate.to_string(),
        long_term_implication: long_term.to_string(),
        impact,
        guidance: None,
    }
}

fn guided(choice: Choice, guidance: FundingGuidance) -> Choice {
    Choice {
        guidance: Some(guidance),
        ..choice
    }
}

pub(super) fn stages() -> Vec<Stage> {
    vec![seed(), early_fundraising(), growth_scaling()]
}

fn seed() -> Stage {
    Stage {
        id: StageId::new("seed"),
        title: "Seed Stage".to_string(),
        description: "You're at the beginning of your venture journey. Critical decisions about \
                      funding and resource allocation will shape your company's future."
            .to_string(),
        overview: "Make foundational decisions about bootstrapping vs. external capital, \
                   setting the stage for your venture's financial future."
            .to_string(),
        focus: "Foundation Building".to_string(),
        scenarios: vec![Scenario {
            key: ScenarioKey::new("funding-source"),
            title: "Initial Funding Decision".to_string(),
            description: "Based on your business parameters below, you need funding to develop \
                          your MVP and validate your business model. Choose your funding approach:"
                .to_string(),
            hosts_estimator: true,
            choices: vec![
                guided(
                    choice(
                        "bootstrap",
                        "Bootstrap with Personal Savings",
                        "Use your own savings and revenue to fund growth organically.",
                        "You maintain 100% equity and full control over business decisions. \
                         May need to reduce scope or extend timeline due to limited capital.",
                        "Slower initial growth but stronger financial discipline. You retain \
                         full ownership for future fundraising rounds.",
                        Impact::Neutral,
                    ),
                    FundingGuidance::SelfFunded,
                ),
                guided(
                    choice(
                        "friends-family",
                        "Friends & Family Round",
                        "Raise money from people who know and trust you personally.",
                        "Quick access to capital with flexible terms. Can typically raise \
                         25-50% of calculated need. Personal relationships become business \
                         relationships.",
                        "Good launching pad for future institutional investors. Risk of \
                         straining personal relationships if business struggles.",
                        Impact::Positive,
                    ),
                    FundingGuidance::PartialRaise,
                ),
                guided(
                    choice(
                        "angel-investor",
                        "Angel Investor",
                        "Seek investment from experienced entrepreneurs who can provide \
                         mentorship.",
                        "Can typically cover your full calculated funding need plus valuable \
                         industry expertise and network access. Give up 15-25% equity.",
                        "Strong foundation for scaling with experienced guidance. Angel may \
                         help attract future VC funding.",
                        Impact::Positive,
                    ),
                    FundingGuidance::FullCoverage,
                ),
            ],
        }],
    }
}

fn early_fundraising() -> Stage {
    Stage {
        id: StageId::new("early-fundraising"),
        title: "Early-Stage Fundraising".to_string(),
        description: "Your MVP is gaining traction. It's time to scale, but you need to choose \
                      the right type of investor and funding structure."
            .to_string(),
        overview: "Navigate investor relationships and funding structures while maintaining \
                   control and vision for your growing company."
            .to_string(),
        focus: "Strategic Growth".to_string(),
        scenarios: vec![Scenario {
            key: ScenarioKey::new("investor-type"),
            title: "Choosing Your Lead Investor".to_string(),
            description: "You're raising a $2M Series A. Multiple investor types are interested, \
                          each bringing different advantages and expectations."
                .to_string(),
            hosts_estimator: false,
            choices: vec![
                choice(
                    "traditional-vc",
                    "Traditional Venture Capital",
                    "Partner with an established VC firm focused on rapid scaling.",
                    "$2M raised with strong brand recognition. High growth expectations and \
                     board seat requirements.",
                    "Access to extensive networks and follow-on funding. Pressure for \
                     aggressive scaling and potential exit timeline constraints.",
                    Impact::Neutral,
                ),
                choice(
                    "strategic-investor",
                    "Strategic Corporate Investor",
                    "Accept investment from a large corporation in your industry.",
                    "Capital plus potential partnership opportunities and market validation \
                     from established player.",
                    "Access to corporate resources and distribution channels. Risk of \
                     strategic conflicts and limited exit options.",
                    Impact::Neutral,
                ),
                choice(
                    "micro-vc",
                    "Micro VC Fund",
                    "Work with a smaller, more hands-on venture capital fund.",
                    "More personalized attention and flexible terms. Smaller check size may \
                     require multiple investors.",
                    "Closer founder-investor relationship with less pressure. May need \
                     additional investors for future large rounds.",
                    Impact::Positive,
                ),
            ],
        }],
    }
}

fn growth_scaling() -> Stage {
    Stage {
        id: StageId::new("growth-scaling"),
        title: "Growth & Scaling".to_string(),
        description: "Your business is growing rapidly. Now you must navigate complex decisions \
                      about business model optimization and cash flow management."
            .to_string(),
        overview: "Optimize your business model and cash flow management to achieve \
                   sustainable, profitable growth at scale."
            .to_string(),
        focus: "Scale & Optimize".to_string(),
        scenarios: vec![Scenario {
            key: ScenarioKey::new("business-model"),
            title: "Revenue Model Optimization".to_string(),
            description: "You have multiple revenue streams showing promise. You need to decide \
                          where to focus your resources for maximum growth."
                .to_string(),
            hosts_estimator: false,
            choices: vec![
                choice(
                    "subscription-focus",
                    "Double Down on Subscription Revenue",
                    "Focus entirely on building a strong recurring revenue base.",
                    "Predictable cash flow and higher customer lifetime value. Slower initial \
                     revenue growth.",
                    "Strong fundamentals for valuation and sustainable growth. Attractive to \
                     investors seeking predictable returns.",
                    Impact::Positive,
                ),
                choice(
                    "transaction-focus",
                    "Maximize Transaction Volume",
                    "Optimize for high-volume, transaction-based revenue.",
                    "Rapid revenue growth with immediate market validation. Higher customer \
                     acquisition costs and churn risk.",
                    "Requires constant growth in transaction volume. More volatile cash flows \
                     but potential for rapid scaling.",
                    Impact::Neutral,
                ),
                choice(
                    "hybrid-model",
                    "Balanced Hybrid Approach",
                    "Maintain multiple revenue streams while optimizing each.",
                    "Diversified risk and multiple growth levers. Complex operations and \
                     resource allocation challenges.",
                    "Resilient business model with multiple paths to profitability. May \
                     dilute focus and slow optimization.",
                    Impact::Neutral,
                ),
            ],
        }],
    }
}
