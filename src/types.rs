use std::fmt;

/// Stable identifier of a card. The value never changes at runtime; only the
/// position of the card inside the deck does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(pub &'static str);

impl CardId {
    pub fn get(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One card of the sorting activity: short front side (title + summary) and a
/// longer back side (detail). All ten records are fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRecord {
    pub id: CardId,
    pub title: &'static str,
    pub summary: &'static str,
    pub detail: &'static str,
}

/// Seed deck, in its canonical order. Reset always returns to exactly this.
pub const SEED_CARDS: [CardRecord; 10] = [
    CardRecord {
        id: CardId("1"),
        title: "Strategic Alignment",
        summary: "Connect daily tasks to organizational objectives through roadmap planning",
        detail: "Develop phased roadmaps with SMART goals, track KPIs, and maintain business \
                 objective alignment using Gantt charts and OKR frameworks.",
    },
    CardRecord {
        id: CardId("2"),
        title: "Stakeholder Diplomacy",
        summary: "Manage expectations across leadership and teams",
        detail: "Create communication matrices with tailored updates for executives/teams, \
                 conduct alignment workshops, and resolve conflicts through structured \
                 negotiation.",
    },
    CardRecord {
        id: CardId("3"),
        title: "Risk Forecasting",
        summary: "Anticipate threats before they impact timelines",
        detail: "Implement risk registers with probability/impact scores, conduct premortems \
                 for high-stakes phases, and establish mitigation trigger points.",
    },
    CardRecord {
        id: CardId("4"),
        title: "Agile Facilitation",
        summary: "Lead iterative delivery with team flexibility",
        detail: "Manage sprint capacity planning, maintain velocity dashboards, and remove \
                 blockers through daily standups and retrospective action plans.",
    },
    CardRecord {
        id: CardId("5"),
        title: "Resource Orchestration",
        summary: "Optimize team talents and budgets",
        detail: "Balance workloads using capacity heatmaps, negotiate shared resources, and \
                 implement productivity tracking with timeboxing techniques.",
    },
    CardRecord {
        id: CardId("6"),
        title: "Scope Guardianship",
        summary: "Prevent creep while adapting to needs",
        detail: "Maintain requirement traceability matrices, lead change control boards, and \
                 validate deliverables against baseline agreements.",
    },
    CardRecord {
        id: CardId("7"),
        title: "Cross-Team Synergy",
        summary: "Align departments with conflicting priorities",
        detail: "Facilitate working agreements through RACI matrices, run collaborative design \
                 sessions, and resolve conflicts with escalation protocols.",
    },
    CardRecord {
        id: CardId("8"),
        title: "Decisive Momentum",
        summary: "Balance speed with informed choices",
        detail: "Implement RAPID decision models, maintain decision logs with owners/dates, \
                 and escalate bottlenecks through predefined protocols.",
    },
    CardRecord {
        id: CardId("9"),
        title: "Influence Engineering",
        summary: "Secure buy-in from resistant stakeholders",
        detail: "Map power dynamics, demonstrate quick wins through pilots, and build \
                 consensus with phased implementation strategies.",
    },
    CardRecord {
        id: CardId("10"),
        title: "Knowledge Amplification",
        summary: "Convert experience into team assets",
        detail: "Conduct After Action Reviews (AARs), maintain searchable lesson databases, \
                 and update playbooks with process improvements.",
    },
];
