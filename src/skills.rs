#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillSection {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    /// devicon class for the card glyph
    pub icon: &'static str,
    /// Accent color name, used as the `text-*`/`border-*` suffix
    pub theme: &'static str,
    pub summary: &'static str,
    pub sections: &'static [SkillSection],
}

pub static SKILLS: &[SkillEntry] = &[
    SkillEntry {
        name: "Rust",
        icon: "devicon-rust-original",
        theme: "red",
        summary: "Systems and web services where correctness and predictable performance matter.",
        sections: &[
            SkillSection {
                title: "Backend services",
                description: "HTTP APIs on axum and tokio, with typed errors and structured logging.",
            },
            SkillSection {
                title: "WebAssembly",
                description: "Reactive front ends in Leptos, including this site.",
            },
            SkillSection {
                title: "Tooling",
                description: "Command line tools and build helpers that replace fragile scripts.",
            },
        ],
    },
    SkillEntry {
        name: "TypeScript",
        icon: "devicon-typescript-plain",
        theme: "blue",
        summary: "Typed front-end code that stays maintainable as a product grows.",
        sections: &[
            SkillSection {
                title: "Type modelling",
                description: "Discriminated unions and strict null checks to rule out invalid UI states.",
            },
            SkillSection {
                title: "Testing",
                description: "Unit and component tests that run in CI on every change.",
            },
        ],
    },
    SkillEntry {
        name: "React",
        icon: "devicon-react-original",
        theme: "cyan",
        summary: "Component-driven interfaces with a focus on accessibility and motion.",
        sections: &[
            SkillSection {
                title: "State",
                description: "Local state first, shared state only where components truly need it.",
            },
            SkillSection {
                title: "Animation",
                description: "Scroll-triggered and interaction-driven transitions that respect reduced motion.",
            },
        ],
    },
    SkillEntry {
        name: "Databases",
        icon: "devicon-postgresql-plain",
        theme: "purple",
        summary: "Relational schema design, query tuning and safe migrations.",
        sections: &[
            SkillSection {
                title: "PostgreSQL",
                description: "Indexes, constraints and transactions designed around real access patterns.",
            },
            SkillSection {
                title: "Caching",
                description: "Redis for hot paths, with explicit invalidation rules.",
            },
        ],
    },
    SkillEntry {
        name: "DevOps",
        icon: "devicon-docker-plain",
        theme: "green",
        summary: "Reproducible builds and boring, reliable deployments.",
        sections: &[
            SkillSection {
                title: "Containers",
                description: "Small images, multi-stage builds and health checks.",
            },
            SkillSection {
                title: "CI/CD",
                description: "Pipelines that lint, test and ship on every merge.",
            },
        ],
    },
    SkillEntry {
        name: "Design",
        icon: "devicon-figma-plain",
        theme: "yellow",
        summary: "Turning rough ideas into clear, consistent interfaces.",
        sections: &[
            SkillSection {
                title: "Prototyping",
                description: "Fast clickable mockups to validate flows before building them.",
            },
            SkillSection {
                title: "Design systems",
                description: "Shared tokens and components so every page feels like the same product.",
            },
        ],
    },
];

/// Which catalog entry, if any, has its detail modal open.
///
/// Holds an index into [`SKILLS`], so a selection always points at a real entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillSelection(Option<usize>);

impl SkillSelection {
    pub fn selected_index(&self) -> Option<usize> {
        self.0
    }

    pub fn selected(&self) -> Option<&'static SkillEntry> {
        self.0.and_then(|i| SKILLS.get(i))
    }

    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }

    /// Selects `index`, or clears the selection when `index` is already selected.
    /// Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= SKILLS.len() {
            return;
        }
        self.0 = if self.0 == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}

pub const MAX_TILT_DEG: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn is_neutral(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0
    }

    pub fn to_css(self) -> String {
        if self.is_neutral() {
            return "perspective(1000px) rotateX(0deg) rotateY(0deg)".to_string();
        }
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d(1.02, 1.02, 1.02)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Tilt for a pointer at (`x`, `y`) over a card: the card leans toward the pointer,
/// reaching `max_deg` at the edges.
pub fn tilt_transform(x: f64, y: f64, bounds: CardBounds, max_deg: f64) -> Tilt {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return Tilt::default();
    }
    // -1.0..=1.0 from the card center
    let dx = (((x - bounds.left) / bounds.width) * 2.0 - 1.0).clamp(-1.0, 1.0);
    let dy = (((y - bounds.top) / bounds.height) * 2.0 - 1.0).clamp(-1.0, 1.0);
    Tilt {
        rotate_x: -dy * max_deg,
        rotate_y: dx * max_deg,
    }
}

/// Tilt for a card under the pointer, flat when the user prefers reduced motion.
pub fn card_tilt(x: f64, y: f64, bounds: CardBounds, reduce_motion: bool) -> Tilt {
    if reduce_motion {
        return Tilt::default();
    }
    tilt_transform(x, y, bounds, MAX_TILT_DEG)
}
