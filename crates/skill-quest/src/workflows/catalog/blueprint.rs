use super::super::assessment::domain::{RequiredSkill, Track, TrackId};
use super::CareerDomain;

pub(super) fn standard_domains() -> Vec<CareerDomain> {
    vec![
        CareerDomain {
            slug: "software-engineering",
            name: "Software Engineering",
            description: "Design, build, and operate production software systems.",
        },
        CareerDomain {
            slug: "data",
            name: "Data & Machine Learning",
            description: "Turn raw data into analysis, models, and decisions.",
        },
        CareerDomain {
            slug: "design",
            name: "Product Design",
            description: "Research user needs and shape usable, accessible products.",
        },
        CareerDomain {
            slug: "cloud",
            name: "Cloud & Infrastructure",
            description: "Automate delivery pipelines and keep platforms reliable.",
        },
    ]
}

fn track(
    id: &str,
    name: &str,
    domain: &str,
    summary: &str,
    skills: &[(&str, u8, f64)],
) -> Track {
    Track {
        id: TrackId::new(id),
        name: name.to_string(),
        domain: domain.to_string(),
        summary: summary.to_string(),
        required_skills: skills
            .iter()
            .map(|(name, level, weight)| RequiredSkill::new(*name, *level, *weight))
            .collect(),
    }
}

pub(super) fn standard_tracks() -> Vec<Track> {
    vec![
        track(
            "backend-engineer",
            "Backend Engineer",
            "software-engineering",
            "Services, APIs, and the data stores behind them.",
            &[
                ("Programming Fundamentals", 4, 3.0),
                ("API Design", 4, 3.0),
                ("Databases", 4, 2.5),
                ("Testing", 3, 2.0),
                ("Version Control", 3, 1.0),
                ("Cloud Deployment", 2, 1.0),
            ],
        ),
        track(
            "frontend-engineer",
            "Frontend Engineer",
            "software-engineering",
            "Interactive web interfaces and client-side state.",
            &[
                ("HTML & CSS", 4, 2.0),
                ("JavaScript", 4, 3.0),
                ("UI Frameworks", 4, 3.0),
                ("Accessibility", 3, 1.5),
                ("Testing", 3, 1.5),
                ("Version Control", 3, 1.0),
            ],
        ),
        track(
            "data-analyst",
            "Data Analyst",
            "data",
            "Querying, cleaning, and communicating data.",
            &[
                ("SQL", 4, 3.0),
                ("Spreadsheets", 3, 1.0),
                ("Statistics", 3, 2.5),
                ("Data Visualization", 4, 2.0),
                ("Python", 3, 1.5),
            ],
        ),
        track(
            "ml-engineer",
            "Machine Learning Engineer",
            "data",
            "Training, evaluating, and serving models.",
            &[
                ("Python", 4, 3.0),
                ("Statistics", 4, 2.5),
                ("Machine Learning", 4, 3.0),
                ("Data Pipelines", 3, 2.0),
                ("Model Deployment", 3, 1.5),
            ],
        ),
        track(
            "product-designer",
            "Product Designer",
            "design",
            "Research-driven interaction and visual design.",
            &[
                ("User Research", 4, 3.0),
                ("Interaction Design", 4, 3.0),
                ("Prototyping", 3, 2.0),
                ("Visual Design", 3, 1.5),
                ("Accessibility", 3, 1.5),
            ],
        ),
        track(
            "devops-engineer",
            "DevOps Engineer",
            "cloud",
            "Delivery automation and platform reliability.",
            &[
                ("Linux", 4, 2.5),
                ("Scripting", 3, 1.5),
                ("CI/CD", 4, 3.0),
                ("Containers", 4, 2.5),
                ("Cloud Deployment", 4, 2.5),
                ("Monitoring", 3, 1.5),
            ],
        ),
    ]
}
