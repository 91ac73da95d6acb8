//! The prompt/critic co-evolution explainer: view buttons over pre-rendered diagrams.

use crate::error::RegistryError;
use crate::key::NodeKey;
use crate::record::DisplayRecord;
use crate::registry::ContentRegistry;

pub const PLACEHOLDER: &str = "Choose a view to see how that part of the generation works.";

/// Views selectable by the control buttons. Each view has its own diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CycleView {
    Generation,
    Prompts,
    Critics,
    Memory,
}

impl CycleView {
    /// View activated when the page loads.
    pub const DEFAULT: Self = Self::Generation;
}

impl NodeKey for CycleView {
    const ALL: &'static [Self] = &[Self::Generation, Self::Prompts, Self::Critics, Self::Memory];

    fn tag(self) -> &'static str {
        match self {
            Self::Generation => "generation",
            Self::Prompts => "prompts",
            Self::Critics => "critics",
            Self::Memory => "memory",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Generation => "Generation Loop",
            Self::Prompts => "Prompt Evolution",
            Self::Critics => "Critic Evolution",
            Self::Memory => "Memory",
        }
    }
}

const RECORDS: &[(CycleView, DisplayRecord)] = &[
    (
        CycleView::Generation,
        DisplayRecord::new(
            "One Generation",
            "Each run evolves two populations side by side. The Researcher seeds ten prompt genomes and ten critic \
             genomes from the Cognition Archive when the stores are empty. The Engineer turns every prompt into code \
             and runs it, every critic scores that code, and both populations are then bred into the next \
             generation.",
        ),
    ),
    (
        CycleView::Prompts,
        DisplayRecord::new(
            "Prompt Evolution",
            "A prompt genome carries a persona, a task framing, an output format instruction and a template. Code \
             that fails to run earns a floor fitness of 0.1; otherwise fitness blends an objective score (60%), \
             which falls as execution time and line count grow, with the mean critic score (40%). Roulette-wheel \
             selection picks parents in pairs, and model-assisted crossover and mutation produce five children per \
             generation.",
        ),
    ),
    (
        CycleView::Critics,
        DisplayRecord::new(
            "Critic Evolution",
            "Critics are evolved too, so the judges improve alongside the work they judge. A critic genome holds an \
             evaluation template, its criteria and a scoring rubric. Its fitness rewards agreement with the \
             objective metrics: the smaller the total gap between its scores and the measured results, the fitter \
             the critic. The same selection, crossover and mutation operators breed the next critics.",
        ),
    ),
    (
        CycleView::Memory,
        DisplayRecord::new(
            "Memory Stores",
            "Three stores give the system continuity across runs. The Cognition Archive is a plain-text knowledge \
             base the Researcher reads before proposing genomes. The Prompt DB and Critic DB persist both \
             populations as JSON, and the generation log records every genome at each generation so progress can \
             be traced afterwards.",
        ),
    ),
];

/// Diagram description per view.
pub const DIAGRAMS: &[(CycleView, &str)] = &[
    (
        CycleView::Generation,
        r"flowchart TD
    Archive[(Cognition Archive)] --> Researcher[Researcher Agent<br/>seeds genomes]
    Researcher --> PromptDB[(Prompt DB)]
    Researcher --> CriticDB[(Critic DB)]
    PromptDB --> Engineer[Engineer Agent<br/>generates and runs code]
    CriticDB --> Critic[Critic Agent<br/>scores code]
    Engineer -->|code| Critic
    Engineer -->|metrics| Fitness{Fitness}
    Critic -->|scores| Fitness
    Fitness --> Evolve[Selection, Crossover, Mutation]
    Evolve -.->|next generation| PromptDB
    style Archive fill:#FFE0B2,stroke:#FF9800
    style Fitness fill:#FFF9C4,stroke:#FBC02D
    style Engineer fill:#E0F2F1,stroke:#009688",
    ),
    (
        CycleView::Prompts,
        r"flowchart LR
    Population[(Prompt population)] --> Evaluate[Evaluate<br/>tests and critic scores]
    Evaluate --> Score{Fitness<br/>0.6 objective + 0.4 critic}
    Score --> Select[Roulette-wheel selection]
    Select --> Crossover[Intelligent crossover]
    Crossover --> Mutate[Intelligent mutation]
    Mutate -.->|children| Population
    style Score fill:#FFF9C4,stroke:#FBC02D",
    ),
    (
        CycleView::Critics,
        r"flowchart LR
    Population[(Critic population)] --> Judge[Score every prompt's code]
    Judge --> Compare{Fitness<br/>agreement with metrics}
    Metrics[Objective metrics] --> Compare
    Compare --> Select[Roulette-wheel selection]
    Select --> Crossover[Intelligent crossover]
    Crossover --> Mutate[Intelligent mutation]
    Mutate -.->|children| Population
    style Compare fill:#FFF9C4,stroke:#FBC02D",
    ),
    (
        CycleView::Memory,
        r"flowchart TD
    Archive[(Cognition Archive<br/>plain-text knowledge)] -.-> Researcher[Researcher Agent]
    Researcher --> PromptDB[(Prompt DB<br/>JSON)]
    Researcher --> CriticDB[(Critic DB<br/>JSON)]
    PromptDB --> Log[Generation log]
    CriticDB --> Log
    style Archive fill:#FFE0B2,stroke:#FF9800
    style Log fill:#ECEFF1,stroke:#607D8B",
    ),
];

/// Build the co-evolution registry.
///
/// # Errors
///
/// Returns [`RegistryError::DuplicateKey`] if the table repeats a view.
pub fn registry() -> Result<ContentRegistry<CycleView>, RegistryError> {
    ContentRegistry::build(RECORDS.iter().copied())
}
