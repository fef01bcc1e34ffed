//! Portfolio dataset: the read-only records behind `whoami`, `skills`,
//! `projects`, `experience`, `contact` and the virtual file tree.
//!
//! The dataset is injected into the terminal at construction (no module
//! globals), and hosts may supply their own as JSON; `Portfolio::sample()`
//! ships a complete default.

use serde::{Deserialize, Serialize};

use crate::vfs::{VfsNode, VirtualFileSystem};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub github: String,
    pub linkedin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub location: String,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

/// Everything the interpreter knows about the person being showcased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub personal: PersonalInfo,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
}

impl Portfolio {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Category names in first-seen order, deduplicated.
    pub fn skill_categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for skill in &self.skills {
            if !seen.contains(&skill.category.as_str()) {
                seen.push(&skill.category);
            }
        }
        seen
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Default dataset mirroring the public site.
    pub fn sample() -> Self {
        Self {
            personal: PersonalInfo {
                name: "Alex Thompson".into(),
                title: "Full Stack Developer & DevOps Engineer".into(),
                bio: "Passionate developer with 5+ years of experience building scalable \
                      web applications and ML systems. Enthusiast of clean code, automation, \
                      and innovative terminal interfaces."
                    .into(),
                location: "San Francisco, CA".into(),
                contact: Contact {
                    email: "alex.thompson@developer.com".into(),
                    github: "https://github.com/alex-dev".into(),
                    linkedin: "https://linkedin.com/in/alex-thompson-dev".into(),
                    website: Some("https://alexthompson.dev".into()),
                },
            },
            skills: vec![
                skill("JavaScript", 95, "Programming"),
                skill("TypeScript", 90, "Programming"),
                skill("Rust", 86, "Programming"),
                skill("React", 88, "Frontend"),
                skill("Next.js", 85, "Frontend"),
                skill("Node.js", 82, "Backend"),
                skill("PostgreSQL", 75, "Database"),
                skill("MongoDB", 70, "Database"),
                skill("Docker", 68, "DevOps"),
                skill("AWS", 65, "Cloud"),
            ],
            projects: vec![
                Project {
                    id: "ascii-portfolio".into(),
                    name: "ASCII Art Portfolio Terminal".into(),
                    description: "Terminal-style portfolio with an interactive command-line \
                                  interface, real-time ASCII generation, multiple themes, and \
                                  a fully simulated file system."
                        .into(),
                    technologies: strings(&["Rust", "WebAssembly", "Next.js", "Tailwind CSS"]),
                    features: strings(&[
                        "Interactive terminal interface with 20+ commands",
                        "File system navigation simulation",
                        "Command history and tab completion",
                        "Matrix effect easter egg",
                    ]),
                    github_url: Some("https://github.com/alex-dev/ascii-portfolio".into()),
                    live_url: Some("https://ascii-portfolio.vercel.app".into()),
                    architecture: Some(
                        "Terminal UI -> command dispatcher -> static data layer".into(),
                    ),
                },
                Project {
                    id: "ecommerce-api".into(),
                    name: "Enterprise E-Commerce Platform".into(),
                    description: "Scalable e-commerce backend with microservices, real-time \
                                  inventory, and 100k+ daily transactions at 99.9% uptime."
                        .into(),
                    technologies: strings(&[
                        "Node.js",
                        "PostgreSQL",
                        "Redis",
                        "Docker",
                        "Kubernetes",
                    ]),
                    features: strings(&[
                        "JWT authentication with refresh tokens",
                        "Stripe payment integration",
                        "Admin dashboard with analytics",
                        "CI/CD pipeline with automated testing",
                    ]),
                    github_url: Some("https://github.com/alex-dev/fullstack-ecommerce".into()),
                    live_url: None,
                    architecture: Some("API gateway fronting four services behind Nginx".into()),
                },
                Project {
                    id: "ml-classifier".into(),
                    name: "AI-Powered Image Classification System".into(),
                    description: "Deep learning image classifier with 96.5% accuracy, a data \
                                  augmentation pipeline, and a versioned inference API."
                        .into(),
                    technologies: strings(&["Python", "TensorFlow", "FastAPI", "MLflow"]),
                    features: strings(&[
                        "Custom CNN with attention mechanisms",
                        "Batch processing for bulk classification",
                        "Confidence scoring and drift detection",
                    ]),
                    github_url: Some("https://github.com/alex-dev/ai-image-classifier".into()),
                    live_url: None,
                    architecture: None,
                },
            ],
            experience: vec![
                Experience {
                    company: "Tech Innovations Inc.".into(),
                    position: "Senior Full Stack Developer".into(),
                    duration: "2022 - Present".into(),
                    description: strings(&[
                        "Led development of microservices serving 100k+ daily users",
                        "Implemented CI/CD pipelines reducing deployment time by 60%",
                        "Mentored junior developers and conducted code reviews",
                    ]),
                    technologies: strings(&["React", "Node.js", "AWS", "Kubernetes"]),
                },
                Experience {
                    company: "StartupXYZ".into(),
                    position: "Frontend Developer".into(),
                    duration: "2020 - 2022".into(),
                    description: strings(&[
                        "Built responsive web applications with modern frameworks",
                        "Optimized performance to 95+ Lighthouse scores",
                        "Integrated third-party APIs and payment processing",
                    ]),
                    technologies: strings(&["Vue.js", "TypeScript", "Firebase"]),
                },
            ],
        }
    }
}

fn skill(name: &str, level: u8, category: &str) -> Skill {
    Skill { name: name.into(), level, category: category.into() }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build the `/home/portfolio` tree. All file bodies are rendered here, once,
/// so reads never re-format anything.
pub fn build_filesystem(portfolio: &Portfolio) -> VirtualFileSystem {
    let personal = &portfolio.personal;

    let mut project_dirs: Vec<(String, VfsNode)> = Vec::new();
    for project in &portfolio.projects {
        let mut files: Vec<(String, VfsNode)> = vec![
            ("README.md".to_string(), VfsNode::file(project.description.clone())),
            (
                "tech-stack.txt".to_string(),
                VfsNode::file(project.technologies.join(", ")),
            ),
            ("features.txt".to_string(), VfsNode::file(project.features.join("\n"))),
        ];
        if let Some(arch) = &project.architecture {
            files.push(("architecture.txt".to_string(), VfsNode::file(arch.clone())));
        }
        project_dirs.push((project.id.clone(), VfsNode::dir(files)));
    }

    let skill_files: Vec<(String, VfsNode)> = portfolio
        .skill_categories()
        .iter()
        .map(|category| {
            let body = portfolio
                .skills
                .iter()
                .filter(|s| s.category == *category)
                .map(|s| format!("{}: {}%", s.name, s.level))
                .collect::<Vec<_>>()
                .join("\n");
            (format!("{}.txt", category.to_lowercase()), VfsNode::file(body))
        })
        .collect();

    let contact = &personal.contact;
    let contact_txt = format!(
        "Email: {}\nGitHub: {}\nLinkedIn: {}\nWebsite: {}",
        contact.email,
        contact.github,
        contact.linkedin,
        contact.website.as_deref().unwrap_or("N/A"),
    );

    let about_txt = format!(
        "{}\n\nLocation: {}\nTitle: {}",
        personal.bio, personal.location, personal.title
    );

    let mut resume = vec![
        personal.name.clone(),
        personal.title.clone(),
        personal.location.clone(),
        String::new(),
        "EXPERIENCE:".to_string(),
    ];
    for exp in &portfolio.experience {
        resume.push(format!("{} at {} ({})", exp.position, exp.company, exp.duration));
        for line in &exp.description {
            resume.push(format!("- {}", line));
        }
        resume.push(String::new());
    }
    resume.push("SKILLS:".to_string());
    for s in &portfolio.skills {
        resume.push(format!("{}: {}% ({})", s.name, s.level, s.category));
    }

    let portfolio_dir = VfsNode::dir(vec![
        (
            "README.md".to_string(),
            VfsNode::file("Welcome to my ASCII Portfolio! Use 'help' to see available commands."),
        ),
        ("about.txt".to_string(), VfsNode::file(about_txt)),
        ("projects".to_string(), VfsNode::dir(project_dirs)),
        ("skills".to_string(), VfsNode::dir(skill_files)),
        ("contact.txt".to_string(), VfsNode::file(contact_txt)),
        ("resume.txt".to_string(), VfsNode::file(resume.join("\n"))),
    ]);

    VirtualFileSystem::new(VfsNode::dir([(
        "home",
        VfsNode::dir([("portfolio", portfolio_dir)]),
    )]))
}
