//! Static content behind the page: feature cards, the project roster, and
//! the periodic-table layout they are arranged in.
//!
//! Everything here is `'static` data defined once and never mutated; the
//! renderer and the modal controller only ever read it.

/// One card in the features section. `project` links the card's call to
/// action to a project in [`PROJECTS`]; cards without a link only navigate.
pub struct FeatureDescriptor {
    pub title: &'static str,
    pub icon: &'static str,
    pub desc: &'static str,
    pub project: Option<&'static str>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProjectStatus {
    Building,
    Planned,
}

/// One entry in the project showcase, styled as a chemical element.
pub struct ProjectDescriptor {
    pub key: &'static str,
    pub symbol: &'static str,
    pub atomic_number: u8,
    pub name: &'static str,
    pub status: ProjectStatus,
    pub tag: &'static str,
    pub networks: &'static [&'static str],
    pub blurb: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub tech: &'static [&'static str],
    /// 1-based (row, column) on the periodic grid.
    pub grid: (u8, u8),
}

pub const FEATURES: &[FeatureDescriptor] = &[
    FeatureDescriptor {
        title: "On-Chain Gaming",
        icon: "\u{2b1a}",
        desc: "Interactive pixel canvas where every action is a transaction on \
               Hathor Network\u{2014}collaborative art meets blockchain.",
        project: Some("p1"),
    },
    FeatureDescriptor {
        title: "Provably Fair Lottery",
        icon: "\u{29c9}",
        desc: "Transparent lottery system with verifiable randomness and \
               automated prize distribution on Hathor.",
        project: Some("p2"),
    },
    FeatureDescriptor {
        title: "DAO Governance",
        icon: "\u{25a6}",
        desc: "Token-weighted voting mechanisms for decentralized decision \
               making with on-chain proposal tracking.",
        project: Some("p3"),
    },
    FeatureDescriptor {
        title: "Smart Contract Stack",
        icon: "\u{2b21}",
        desc: "Building on Hathor's DAG architecture with secure patterns and \
               auditable logic for all our dApps.",
        project: None,
    },
];

pub const PROJECTS: &[ProjectDescriptor] = &[
    ProjectDescriptor {
        key: "p1",
        symbol: "Pc",
        atomic_number: 1,
        name: "Pixel Canvas",
        status: ProjectStatus::Building,
        tag: "In Development",
        networks: &["HATHOR"],
        blurb: "Collaborative pixel art game inspired by the Million Dollar \
                Homepage. Each pixel placement is a permanent transaction on Hathor.",
        description: "A decentralized collaborative canvas where every pixel is a \
                      permanent transaction on the Hathor blockchain. Create art, \
                      claim space, and be part of blockchain history.",
        features: &[
            "Each pixel placement is recorded on-chain",
            "Permanent, immutable artwork",
            "Community-driven collaborative creation",
            "Transparent ownership and history",
        ],
        tech: &[
            "Hathor Smart Contracts",
            "Rust / WebAssembly",
            "Canvas API",
            "Web3 Integration",
        ],
        grid: (1, 1),
    },
    ProjectDescriptor {
        key: "p2",
        symbol: "Lt",
        atomic_number: 2,
        name: "HTR Lottery",
        status: ProjectStatus::Planned,
        tag: "Planned",
        networks: &["HATHOR"],
        blurb: "Provably fair lottery with transparent draws, verifiable \
                randomness, and automatic prize distribution on-chain.",
        description: "A fully transparent lottery system built on Hathor with \
                      verifiable randomness and automated prize distribution. \
                      Every draw is auditable and provably fair.",
        features: &[
            "Provably fair random number generation",
            "Transparent on-chain draws",
            "Automatic prize distribution",
            "Auditable history of all draws",
        ],
        tech: &[
            "Hathor Network",
            "VRF (Verifiable Random Function)",
            "Smart Contracts",
            "TypeScript",
        ],
        grid: (1, 18),
    },
    ProjectDescriptor {
        key: "p3",
        symbol: "Dv",
        atomic_number: 3,
        name: "DAO Voting",
        status: ProjectStatus::Planned,
        tag: "Planned",
        networks: &["HATHOR"],
        blurb: "Decentralized governance platform with token-weighted voting, \
                proposal creation, and on-chain execution.",
        description: "A complete DAO governance platform enabling decentralized \
                      decision-making with token-weighted voting, proposal \
                      management, and on-chain execution.",
        features: &[
            "Token-weighted voting mechanism",
            "Proposal creation and management",
            "On-chain execution of passed proposals",
            "Transparent voting history",
        ],
        tech: &[
            "Hathor DAO Framework",
            "Smart Contracts",
            "Governance Tokens",
            "React Dashboard",
        ],
        grid: (2, 13),
    },
];

pub const GRID_ROWS: u8 = 7;
pub const GRID_COLS: u8 = 18;

/// Looks a project up by key. The modal controller validates every key
/// through this before opening anything.
pub fn project(key: &str) -> Option<&'static ProjectDescriptor> {
    PROJECTS.iter().find(|p| p.key == key)
}

/// The project occupying a grid cell, if any.
pub fn project_at(row: u8, col: u8) -> Option<&'static ProjectDescriptor> {
    PROJECTS.iter().find(|p| p.grid == (row, col))
}

/// Periodic-table silhouette. Cells outside it render as bare spacers:
/// row 1 keeps only its outer columns, rows 2-3 lose the transition-metal
/// block, everything below is fully populated.
pub fn grid_cell_visible(row: u8, col: u8) -> bool {
    match row {
        1 => col == 1 || col == GRID_COLS,
        2 | 3 => col <= 2 || col >= 13,
        _ => true,
    }
}
