//! Section rule table for the ATS analyzer.
//!
//! Each section is scored by one rule function that fills a fresh
//! [`SectionResult`]. [`SECTION_RULES`] fixes the evaluation order, which is
//! also the order feedback appears in the final report.

use crate::ats::report::{Section, SectionResult};
use crate::models::resume::{PersonalInfo, ResumeData};

pub type SectionRule = fn(&ResumeData, &mut SectionResult);

pub const SECTION_RULES: &[(Section, SectionRule)] = &[
    (Section::Contact, score_contact),
    (Section::Summary, score_summary),
    (Section::Education, score_education),
    (Section::Experience, score_experience),
    (Section::Skills, score_skills),
    (Section::Projects, score_projects),
    (Section::Certifications, score_certifications),
];

/// Verbs that mark an achievement-style bullet. Matched as case-insensitive
/// substrings, so "Led" and "enabled" both hit "led".
pub const ACTION_VERBS: &[&str] = &[
    "led",
    "managed",
    "developed",
    "created",
    "improved",
    "increased",
    "reduced",
    "achieved",
    "implemented",
    "designed",
];

const SUMMARY_MIN_WORDS: usize = 30;
const SUMMARY_MAX_WORDS: usize = 100;
const MIN_AVG_RESPONSIBILITIES: usize = 3;
const SKILLS_STRONG: usize = 8;
const SKILLS_MODERATE: usize = 4;

// ────────────────────────────────────────────────────────────────────────────
// Contact
// ────────────────────────────────────────────────────────────────────────────

struct ContactCheck {
    is_present: fn(&PersonalInfo) -> bool,
    points: u32,
    strength: &'static str,
    /// `None` for fields whose absence only earns a suggestion.
    weakness: Option<&'static str>,
    suggestion: &'static str,
}

const CONTACT_CHECKS: &[ContactCheck] = &[
    ContactCheck {
        is_present: has_full_name,
        points: 5,
        strength: "Contact name provided",
        weakness: Some("Missing full name"),
        suggestion: "Add your full name",
    },
    ContactCheck {
        is_present: has_valid_email,
        points: 5,
        strength: "Valid email address",
        weakness: Some("Missing or invalid email"),
        suggestion: "Add a valid email address",
    },
    ContactCheck {
        is_present: has_phone,
        points: 5,
        strength: "Phone number provided",
        weakness: Some("Missing phone number"),
        suggestion: "Add your phone number",
    },
    ContactCheck {
        is_present: has_location,
        points: 5,
        strength: "Location specified",
        weakness: None,
        suggestion: "Add your location for better local job matching",
    },
];

fn has_full_name(info: &PersonalInfo) -> bool {
    !info.full_name.is_empty()
}

fn has_valid_email(info: &PersonalInfo) -> bool {
    !info.email.is_empty() && info.email.contains('@')
}

fn has_phone(info: &PersonalInfo) -> bool {
    !info.phone.is_empty()
}

fn has_location(info: &PersonalInfo) -> bool {
    !info.location.is_empty()
}

fn score_contact(resume: &ResumeData, result: &mut SectionResult) {
    for check in CONTACT_CHECKS {
        if (check.is_present)(&resume.personal_info) {
            result.award(check.points);
            result.strength(check.strength);
        } else {
            if let Some(weakness) = check.weakness {
                result.weakness(weakness);
            }
            result.suggest(check.suggestion);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Summary
// ────────────────────────────────────────────────────────────────────────────

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn score_summary(resume: &ResumeData, result: &mut SectionResult) {
    let words = word_count(&resume.personal_info.summary);

    if (SUMMARY_MIN_WORDS..=SUMMARY_MAX_WORDS).contains(&words) {
        result.award(10);
        result.strength("Well-crafted professional summary");
    } else if words > 0 {
        result.award(5);
        result.suggest("Professional summary should be 30-100 words for optimal ATS parsing");
    } else {
        result.weakness("Missing professional summary");
        result.suggest(
            "Add a professional summary (30-100 words) highlighting your key qualifications",
        );
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

fn score_education(resume: &ResumeData, result: &mut SectionResult) {
    let entries = &resume.education;
    if entries.is_empty() {
        result.weakness("No education listed");
        result.suggest("Add at least one education entry");
        return;
    }

    result.award(10);
    result.strength(format!(
        "{} education {} listed",
        entries.len(),
        pluralize(entries.len(), "entry", "entries")
    ));

    let complete = entries
        .iter()
        .all(|e| !e.institution.is_empty() && !e.degree.is_empty() && !e.field.is_empty());
    if complete {
        result.award(5);
        result.strength("Complete education information");
    } else {
        result.suggest("Ensure all education entries have institution, degree, and field of study");
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Work experience
// ────────────────────────────────────────────────────────────────────────────

/// True when any responsibility across all entries contains an action verb.
pub fn uses_action_verbs(resume: &ResumeData) -> bool {
    resume
        .work_experience
        .iter()
        .flat_map(|exp| exp.responsibilities.iter())
        .any(|resp| {
            let resp_lower = resp.to_lowercase();
            ACTION_VERBS.iter().any(|verb| resp_lower.contains(verb))
        })
}

fn score_experience(resume: &ResumeData, result: &mut SectionResult) {
    let entries = &resume.work_experience;
    if entries.is_empty() {
        result.weakness("No work experience listed");
        result.suggest("Add work experience with 3-5 achievement-focused bullet points each");
        return;
    }

    result.award(15);
    result.strength(format!(
        "{} work experience {}",
        entries.len(),
        pluralize(entries.len(), "entry", "entries")
    ));

    // avg >= 3 without leaving integer arithmetic
    let total_responsibilities: usize = entries.iter().map(|e| e.responsibilities.len()).sum();
    if total_responsibilities >= MIN_AVG_RESPONSIBILITIES * entries.len() {
        result.award(10);
        result.strength("Detailed work responsibilities");
    } else {
        result.award(5);
        result.suggest("Add 3-5 bullet points for each work experience to showcase achievements");
    }

    if uses_action_verbs(resume) {
        result.strength("Uses strong action verbs");
    } else {
        result.suggest(
            "Use action verbs (led, managed, developed, etc.) to strengthen your bullet points",
        );
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

fn score_skills(resume: &ResumeData, result: &mut SectionResult) {
    let total: usize = resume.skills.iter().map(|s| s.item_count()).sum();

    match total {
        t if t >= SKILLS_STRONG => {
            result.award(15);
            result.strength(format!(
                "{t} skills listed across {} categories",
                resume.skills.len()
            ));
        }
        t if t >= SKILLS_MODERATE => {
            result.award(10);
            result.suggest("Add more relevant skills (aim for 8-15 total)");
        }
        t if t >= 1 => {
            result.award(5);
            result.weakness("Limited skills listed");
            result.suggest("Add 8-15 relevant technical and soft skills");
        }
        _ => {
            result.weakness("No skills listed");
            result.suggest("Add a skills section with relevant technical and soft skills");
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Projects & certifications
// ────────────────────────────────────────────────────────────────────────────

fn score_projects(resume: &ResumeData, result: &mut SectionResult) {
    let projects = &resume.projects;
    if projects.is_empty() {
        result.suggest("Consider adding 2-3 relevant projects to showcase your skills");
        return;
    }

    result.award(5);
    result.strength(format!(
        "{} {} showcased",
        projects.len(),
        pluralize(projects.len(), "project", "projects")
    ));

    let detailed = projects
        .iter()
        .all(|p| !p.description.is_empty() && !p.technologies.is_empty());
    if detailed {
        result.award(5);
        result.strength("Projects include descriptions and technologies");
    } else {
        result.suggest("Add descriptions and technologies used for all projects");
    }
}

fn score_certifications(resume: &ResumeData, result: &mut SectionResult) {
    let certs = &resume.certifications;
    if certs.is_empty() {
        result.suggest("Add relevant certifications if you have any");
        return;
    }

    result.award(5);
    result.strength(format!(
        "{} {} listed",
        certs.len(),
        pluralize(certs.len(), "certification", "certifications")
    ));
}

/// Picks the word form for `count`: singular for exactly one, plural otherwise.
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}
