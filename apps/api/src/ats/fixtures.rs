//! Builders for résumé records used across the analyzer tests.

use crate::models::resume::{
    Certification, Education, PersonalInfo, Project, ResumeData, Skill, WorkExperience,
};

/// `n` space-separated words.
pub fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

pub fn make_education(institution: &str, degree: &str, field: &str) -> Education {
    Education {
        id: "edu-1".to_string(),
        institution: institution.to_string(),
        degree: degree.to_string(),
        field: field.to_string(),
        start_date: "2014-09".to_string(),
        end_date: "2018-06".to_string(),
        ..Default::default()
    }
}

pub fn make_experience(responsibilities: &[&str]) -> WorkExperience {
    WorkExperience {
        id: "exp-1".to_string(),
        company: "Initech".to_string(),
        position: "Software Engineer".to_string(),
        location: "Austin, TX".to_string(),
        start_date: "2019-01".to_string(),
        end_date: String::new(),
        current: true,
        responsibilities: responsibilities.iter().map(|r| r.to_string()).collect(),
    }
}

pub fn make_skill(category: &str, count: usize) -> Skill {
    Skill {
        category: category.to_string(),
        items: (0..count).map(|i| format!("{category}-{i}")).collect(),
    }
}

pub fn make_project(description: &str, technologies: &[&str]) -> Project {
    Project {
        id: "proj-1".to_string(),
        name: "Side project".to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

/// Full contact, 50-word summary, one complete education entry, two jobs with
/// three bullets each, 10 skills over 2 categories, one detailed project and
/// one certification. Scores exactly 100.
pub fn make_complete_resume() -> ResumeData {
    ResumeData {
        personal_info: PersonalInfo {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            location: "Austin, TX".to_string(),
            github: Some("https://github.com/janedoe".to_string()),
            summary: words(50),
            ..Default::default()
        },
        education: vec![make_education(
            "University of Texas",
            "BSc",
            "Computer Science",
        )],
        work_experience: vec![
            make_experience(&[
                "Developed a billing service",
                "Owned the on-call rotation",
                "Mentored two interns",
            ]),
            make_experience(&[
                "Developed internal tooling",
                "Wrote integration tests",
                "Reviewed pull requests",
            ]),
        ],
        projects: vec![make_project("A terminal spreadsheet", &["Rust", "ratatui"])],
        skills: vec![make_skill("Languages", 5), make_skill("Tools", 5)],
        certifications: vec![Certification {
            id: "cert-1".to_string(),
            name: "AWS Solutions Architect".to_string(),
            issuer: "Amazon".to_string(),
            date: "2023-04".to_string(),
            ..Default::default()
        }],
        achievements: vec![],
    }
}
