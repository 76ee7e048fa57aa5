//! Static lookup tables that turn raw field keys into something readable:
//! display titles, broad career-path buckets, and skill/qualification hints.

/// A broad career-path bucket with example role titles used for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathCategory {
    pub name: &'static str,
    pub example_roles: &'static [&'static str],
}

/// Table entry mapping a field key to candidate suggestions, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionEntry {
    pub key: &'static str,
    pub candidates: &'static [&'static str],
}

/// Bucket used when no path category matches a field.
pub const DEFAULT_PATH_CATEGORY: &str = "Exploratory & Emerging Paths";

pub const FIELD_TITLES: &[(&str, &str)] = &[
    ("software", "Software Development"),
    ("data", "Data Science & Analytics"),
    ("cybersecurity", "Cybersecurity"),
    ("finance", "Finance & Investment"),
    ("accounting", "Accounting & Auditing"),
    ("healthcare", "Healthcare & Medicine"),
    ("nursing", "Nursing & Patient Care"),
    ("education", "Education & Training"),
    ("design", "Design & User Experience"),
    ("marketing", "Marketing & Communications"),
    ("sales", "Sales & Business Development"),
    ("engineering", "Engineering"),
    ("law", "Law & Legal Services"),
    ("research", "Scientific Research"),
    ("management", "Business Management & Operations"),
    ("writing", "Writing & Journalism"),
    ("hospitality", "Hospitality & Tourism"),
    ("trades", "Skilled Trades"),
];

// Scanned in order; the first bucket with a role containing the field wins.
pub const PATH_CATEGORIES: &[PathCategory] = &[
    PathCategory {
        name: "Technology & Digital",
        example_roles: &[
            "Software Developer",
            "Data Analyst",
            "Cybersecurity Specialist",
            "Cloud Engineer",
        ],
    },
    PathCategory {
        name: "Business & Finance",
        example_roles: &[
            "Finance Manager",
            "Accounting Clerk",
            "Sales Representative",
            "Management Consultant",
        ],
    },
    PathCategory {
        name: "Science & Engineering",
        example_roles: &[
            "Research Scientist",
            "Engineering Technician",
            "Lab Technician",
        ],
    },
    PathCategory {
        name: "Health & Care",
        example_roles: &[
            "Healthcare Administrator",
            "Nursing Assistant",
            "Clinical Coordinator",
        ],
    },
    PathCategory {
        name: "Creative & Media",
        example_roles: &[
            "UX Design Lead",
            "Marketing Coordinator",
            "Technical Writing Specialist",
        ],
    },
    PathCategory {
        name: "Education & Public Service",
        example_roles: &["Education Coordinator", "Law Clerk", "Policy Advisor"],
    },
    PathCategory {
        name: "Service & Trades",
        example_roles: &["Hospitality Supervisor", "Skilled Trades Apprentice"],
    },
];

pub const SKILLS: &[SuggestionEntry] = &[
    SuggestionEntry { key: "software", candidates: &["Programming", "Software Design", "Version Control"] },
    SuggestionEntry { key: "data", candidates: &["Data Analysis", "Statistics", "SQL"] },
    SuggestionEntry { key: "cybersecurity", candidates: &["Network Security", "Risk Assessment"] },
    SuggestionEntry { key: "finance", candidates: &["Financial Modeling", "Budgeting"] },
    SuggestionEntry { key: "accounting", candidates: &["Bookkeeping", "Attention to Detail"] },
    SuggestionEntry { key: "healthcare", candidates: &["Patient Care", "Medical Terminology"] },
    SuggestionEntry { key: "nursing", candidates: &["Patient Care", "Clinical Assessment"] },
    SuggestionEntry { key: "education", candidates: &["Instruction", "Curriculum Planning"] },
    SuggestionEntry { key: "design", candidates: &["Visual Design", "User Research"] },
    SuggestionEntry { key: "marketing", candidates: &["Market Research", "Content Strategy"] },
    SuggestionEntry { key: "sales", candidates: &["Negotiation", "Relationship Building"] },
    SuggestionEntry { key: "engineering", candidates: &["Technical Drawing", "Applied Mathematics"] },
    SuggestionEntry { key: "law", candidates: &["Legal Research", "Argumentation"] },
    SuggestionEntry { key: "research", candidates: &["Research Methods", "Statistics"] },
    SuggestionEntry { key: "management", candidates: &["Leadership", "Project Management"] },
    SuggestionEntry { key: "writing", candidates: &["Writing", "Editing"] },
    SuggestionEntry { key: "hospitality", candidates: &["Customer Service", "Event Planning"] },
    SuggestionEntry { key: "trades", candidates: &["Hands-on Repair", "Safety Compliance"] },
];

pub const QUALIFICATIONS: &[SuggestionEntry] = &[
    SuggestionEntry { key: "software", candidates: &["Bachelor's in Computer Science", "Cloud Certification"] },
    SuggestionEntry { key: "data", candidates: &["Bachelor's in Statistics or Data Science", "Data Analytics Certificate"] },
    SuggestionEntry { key: "cybersecurity", candidates: &["CompTIA Security+", "Certified Ethical Hacker"] },
    SuggestionEntry { key: "finance", candidates: &["Chartered Financial Analyst (CFA)", "Bachelor's in Finance"] },
    SuggestionEntry { key: "accounting", candidates: &["Certified Public Accountant (CPA)", "Bachelor's in Accounting"] },
    SuggestionEntry { key: "healthcare", candidates: &["Medical Degree", "Healthcare Administration Certificate"] },
    SuggestionEntry { key: "nursing", candidates: &["Registered Nurse License", "Bachelor of Science in Nursing"] },
    SuggestionEntry { key: "education", candidates: &["Teaching Credential", "Bachelor's in Education"] },
    SuggestionEntry { key: "design", candidates: &["Design Portfolio", "UX Design Certificate"] },
    SuggestionEntry { key: "marketing", candidates: &["Digital Marketing Certification", "Bachelor's in Marketing"] },
    SuggestionEntry { key: "sales", candidates: &["Sales Certification", "Bachelor's in Business"] },
    SuggestionEntry { key: "engineering", candidates: &["Bachelor's in Engineering", "Professional Engineer License"] },
    SuggestionEntry { key: "law", candidates: &["Juris Doctor", "Paralegal Certificate"] },
    SuggestionEntry { key: "research", candidates: &["Master's or PhD in a Science", "Research Assistantship"] },
    SuggestionEntry { key: "management", candidates: &["MBA", "Project Management Professional (PMP)"] },
    SuggestionEntry { key: "writing", candidates: &["Bachelor's in Journalism or English", "Published Writing Portfolio"] },
    SuggestionEntry { key: "hospitality", candidates: &["Hospitality Management Diploma", "Food Safety Certificate"] },
    SuggestionEntry { key: "trades", candidates: &["Apprenticeship Completion", "Trade License"] },
];

/// The immutable tables a scoring session reads from.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub titles: &'static [(&'static str, &'static str)],
    pub path_categories: &'static [PathCategory],
    pub default_path_category: &'static str,
    pub skills: &'static [SuggestionEntry],
    pub qualifications: &'static [SuggestionEntry],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Lowercase and treat `_`/`-` as spaces so "Data_Science" matches "data science".
pub fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}

impl Catalog {
    pub const fn builtin() -> Self {
        Self {
            titles: FIELD_TITLES,
            path_categories: PATH_CATEGORIES,
            default_path_category: DEFAULT_PATH_CATEGORY,
            skills: SKILLS,
            qualifications: QUALIFICATIONS,
        }
    }

    /// Display title for a field, or the field key itself when unknown
    pub fn title_for(&self, field: &str) -> String {
        self.titles
            .iter()
            .find(|(key, _)| *key == field)
            .map(|(_, title)| title.to_string())
            .unwrap_or_else(|| field.to_string())
    }

    /// First bucket whose example roles contain the field name, else the default.
    pub fn path_category_for(&self, field: &str) -> &'static str {
        let needle = normalize(field);
        if needle.is_empty() {
            return self.default_path_category;
        }
        self.path_categories
            .iter()
            .find(|category| {
                category
                    .example_roles
                    .iter()
                    .any(|role| normalize(role).contains(&needle))
            })
            .map(|category| category.name)
            .unwrap_or(self.default_path_category)
    }
}

/// Entries whose key contains the field, or is contained by it.
pub fn matching_entries<'a>(
    table: &'a [SuggestionEntry],
    field: &str,
) -> impl Iterator<Item = &'a SuggestionEntry> {
    let field = normalize(field);
    table.iter().filter(move |entry| {
        let key = normalize(entry.key);
        !field.is_empty() && !key.is_empty() && (field.contains(&key) || key.contains(&field))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_field_has_a_title() {
        let catalog = Catalog::builtin();
        for (key, _) in FIELD_TITLES {
            assert_ne!(catalog.title_for(key), *key);
        }
    }

    #[test]
    fn test_title_fallback_to_key() {
        assert_eq!(Catalog::builtin().title_for("astronomy"), "astronomy");
    }

    #[test]
    fn test_every_builtin_field_has_a_path_category() {
        let catalog = Catalog::builtin();
        for (key, _) in FIELD_TITLES {
            assert_ne!(
                catalog.path_category_for(key),
                DEFAULT_PATH_CATEGORY,
                "field {} has no bucket",
                key
            );
        }
    }

    #[test]
    fn test_path_category_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.path_category_for("software"), "Technology & Digital");
        assert_eq!(catalog.path_category_for("finance"), "Business & Finance");
        assert_eq!(catalog.path_category_for("research"), "Science & Engineering");
        assert_eq!(catalog.path_category_for("law"), "Education & Public Service");
        assert_eq!(catalog.path_category_for("Skilled_Trades"), "Service & Trades");
    }

    #[test]
    fn test_path_category_default_bucket() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.path_category_for("astronomy"), DEFAULT_PATH_CATEGORY);
        assert_eq!(catalog.path_category_for(""), DEFAULT_PATH_CATEGORY);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(" Data_Science-Lead "), "data science lead");
    }

    #[test]
    fn test_matching_entries_both_directions() {
        let keys: Vec<_> = matching_entries(SKILLS, "data_engineering")
            .map(|e| e.key)
            .collect();
        assert_eq!(keys, vec!["data", "engineering"]);

        // "nurs" is contained by the "nursing" key
        let keys: Vec<_> = matching_entries(SKILLS, "nurs").map(|e| e.key).collect();
        assert_eq!(keys, vec!["nursing"]);
    }

    #[test]
    fn test_matching_entries_none() {
        assert_eq!(matching_entries(SKILLS, "astronomy").count(), 0);
        assert_eq!(matching_entries(SKILLS, "").count(), 0);
    }
}
