use super::catalog::{matching_entries, Catalog, SuggestionEntry};
use super::engine::RankedField;

pub const MIN_SKILLS: usize = 3;
pub const MAX_SKILLS: usize = 6;
pub const SKILLS_PER_MATCH: usize = 2;
pub const MAX_QUALIFICATIONS: usize = 3;
pub const QUALIFICATIONS_PER_MATCH: usize = 1;

pub const GENERIC_SKILLS: &[&str] = &[
    "Communication",
    "Problem Solving",
    "Critical Thinking",
    "Teamwork",
];
pub const GENERIC_QUALIFICATION: &str = "Professional Certification";

fn push_unique(out: &mut Vec<String>, item: &str) {
    if !out.iter().any(|existing| existing == item) {
        out.push(item.to_string());
    }
}

/// Walk the top fields and take the first `per_match` candidates of every
/// matching table entry, in table order, until `cap` unique items are found.
fn collect_suggestions(
    ranked: &[RankedField],
    table: &[SuggestionEntry],
    fields: usize,
    per_match: usize,
    cap: usize,
) -> Vec<String> {
    let mut out = Vec::new();
    for ranked_field in ranked.iter().take(fields) {
        for entry in matching_entries(table, &ranked_field.field) {
            for candidate in entry.candidates.iter().take(per_match) {
                if out.len() == cap {
                    return out;
                }
                push_unique(&mut out, candidate);
            }
        }
    }
    out
}

/// Suggest 3 to 6 unique skills for the top `fields` ranked career fields.
///
/// Short lists are padded from `GENERIC_SKILLS`.
pub fn derive_skills(ranked: &[RankedField], catalog: &Catalog, fields: usize) -> Vec<String> {
    let mut skills = collect_suggestions(ranked, catalog.skills, fields, SKILLS_PER_MATCH, MAX_SKILLS);
    for generic in GENERIC_SKILLS {
        if skills.len() >= MIN_SKILLS {
            break;
        }
        push_unique(&mut skills, generic);
    }
    skills
}

/// Suggest 1 to 3 unique qualifications for the top `fields` ranked career fields.
pub fn derive_qualifications(
    ranked: &[RankedField],
    catalog: &Catalog,
    fields: usize,
) -> Vec<String> {
    let mut qualifications = collect_suggestions(
        ranked,
        catalog.qualifications,
        fields,
        QUALIFICATIONS_PER_MATCH,
        MAX_QUALIFICATIONS,
    );
    if qualifications.is_empty() {
        qualifications.push(GENERIC_QUALIFICATION.to_string());
    }
    qualifications
}
