use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectDifficulty {
    Starter,
    Intermediate,
    Stretch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectIdea {
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: ProjectDifficulty,
    pub skills: &'static [&'static str],
}

const fn idea(
    title: &'static str,
    description: &'static str,
    difficulty: ProjectDifficulty,
    skills: &'static [&'static str],
) -> ProjectIdea {
    ProjectIdea {
        title,
        description,
        difficulty,
        skills,
    }
}

const SOFTWARE_ENGINEERING: &[ProjectIdea] = &[
    idea(
        "Link shortener API",
        "REST service with persistence, validation, and an integration test suite.",
        ProjectDifficulty::Starter,
        &["API Design", "Databases", "Testing"],
    ),
    idea(
        "Personal finance dashboard",
        "Single-page app charting transactions imported from a CSV file.",
        ProjectDifficulty::Intermediate,
        &["JavaScript", "UI Frameworks", "HTML & CSS"],
    ),
    idea(
        "Multi-tenant job queue",
        "Background worker service with retries, metrics, and a container deployment.",
        ProjectDifficulty::Stretch,
        &["Programming Fundamentals", "Cloud Deployment", "Testing"],
    ),
];

const DATA: &[ProjectIdea] = &[
    idea(
        "Public dataset exploration",
        "Clean an open dataset with SQL and publish three annotated charts.",
        ProjectDifficulty::Starter,
        &["SQL", "Data Visualization"],
    ),
    idea(
        "A/B test analyzer",
        "Notebook computing significance and effect sizes for experiment results.",
        ProjectDifficulty::Intermediate,
        &["Statistics", "Python"],
    ),
    idea(
        "Churn prediction service",
        "Train, evaluate, and serve a model behind a small HTTP endpoint.",
        ProjectDifficulty::Stretch,
        &["Machine Learning", "Data Pipelines", "Model Deployment"],
    ),
];

const DESIGN: &[ProjectIdea] = &[
    idea(
        "Onboarding flow teardown",
        "Audit an existing onboarding flow and propose annotated improvements.",
        ProjectDifficulty::Starter,
        &["User Research", "Interaction Design"],
    ),
    idea(
        "Accessible booking prototype",
        "Clickable prototype meeting WCAG AA contrast and keyboard navigation.",
        ProjectDifficulty::Intermediate,
        &["Prototyping", "Accessibility"],
    ),
    idea(
        "Design system starter kit",
        "Component library with tokens, usage guidance, and visual specs.",
        ProjectDifficulty::Stretch,
        &["Visual Design", "Interaction Design"],
    ),
];

const CLOUD: &[ProjectIdea] = &[
    idea(
        "Automated static site pipeline",
        "Build and deploy a site on every push with a CI workflow.",
        ProjectDifficulty::Starter,
        &["CI/CD", "Scripting"],
    ),
    idea(
        "Containerized three-tier app",
        "Compose a web app, API, and database with health checks.",
        ProjectDifficulty::Intermediate,
        &["Containers", "Linux"],
    ),
    idea(
        "Observability stack",
        "Metrics, dashboards, and alerts for a service running in the cloud.",
        ProjectDifficulty::Stretch,
        &["Monitoring", "Cloud Deployment"],
    ),
];

/// Fixed project ideas per domain slug, `None` for unknown domains.
pub fn suggest_projects(domain: &str) -> Option<&'static [ProjectIdea]> {
    match domain.trim().to_ascii_lowercase().as_str() {
        "software-engineering" => Some(SOFTWARE_ENGINEERING),
        "data" => Some(DATA),
        "design" => Some(DESIGN),
        "cloud" => Some(CLOUD),
        _ => None,
    }
}
