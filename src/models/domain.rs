/// A technical domain the user can be assessed on.
///
/// Some domains carry specialties; the home screen requires one to be
/// picked before the quiz can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    pub name: &'static str,
    pub specialties: &'static [&'static str],
}

impl Domain {
    pub fn has_specialties(&self) -> bool {
        !self.specialties.is_empty()
    }
}

/// The fixed domain catalogue offered on the home screen.
pub const DOMAINS: &[Domain] = &[
    Domain {
        name: "Software Development",
        specialties: &["Web Frontend", "Web Backend", "Mobile"],
    },
    Domain {
        name: "Networks and Telecommunications",
        specialties: &[],
    },
    Domain {
        name: "Cybersecurity",
        specialties: &[],
    },
    Domain {
        name: "AI and Machine Learning",
        specialties: &[],
    },
    Domain {
        name: "Data Analysis",
        specialties: &[],
    },
    Domain {
        name: "Infrastructure and Cloud",
        specialties: &[],
    },
    Domain {
        name: "Databases",
        specialties: &[],
    },
    Domain {
        name: "IT Project Management",
        specialties: &[],
    },
];
