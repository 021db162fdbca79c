//! Open positions shown on the careers pages.

use serde::Serialize;

pub const CAREERS_HEADLINE: &str = "Join Our Mission";
pub const CAREERS_PITCH: &str =
    "We empower exceptional talents like you by supporting your growth and ambitions.";
pub const OPEN_POSITIONS_PITCH: &str =
    "Explore our current opportunities and find your perfect role";

/// File types the application form advertises for the resume upload.
pub const RESUME_ACCEPT: &str = ".pdf,.doc,.docx,.txt,.rtf";
pub const RESUME_HINT: &str = "PDF, DOC, DOCX, TXT, RTF (Max 5MB)";
/// Shown against the resume field when the upload exceeds the body limit.
pub const RESUME_TOO_LARGE: &str = "Resume file is too large. Please upload a file under 5MB.";

pub const APPLICATION_SUCCESS_TITLE: &str = "Application Submitted!";
pub const APPLICATION_SUCCESS_BODY: &str =
    "We'll review your application and get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-time")]
    FullTime,
    Internship,
}

impl EmploymentType {
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::Internship => "Internship",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct JobPosting {
    pub slug: &'static str,
    pub title: &'static str,
    pub team: &'static str,
    pub location: &'static str,
    pub employment: EmploymentType,
    pub summary: &'static str,
    pub who_we_are: &'static str,
    pub tech_stack: &'static [&'static str],
    pub what_you_do: &'static [&'static str],
    pub what_you_bring: &'static [&'static str],
    pub why_join_us: &'static [&'static str],
}

pub static JOBS: [JobPosting; 6] = [
    JobPosting {
        slug: "senior-devops-engineer",
        title: "Senior DevOps Engineer",
        team: "Engineering",
        location: "Remote / Tel Aviv",
        employment: EmploymentType::FullTime,
        summary: "Lead our cloud infrastructure and DevOps practices",
        who_we_are: "nirvahatech is a leading DevOps and cloud infrastructure consulting firm that empowers engineering teams to build resilient, scalable, and cost-effective systems. We specialize in transforming chaotic infrastructure into streamlined, automated operations.",
        tech_stack: &[
            "Terraform", "Python", "Node.js", "TypeScript", "React", "PostgreSQL", "AWS",
            "Temporal", "Redis", "Kubernetes", "LLMs", "Advanced data ingestion pipelines",
        ],
        what_you_do: &[
            "Impact the architecture and design of scalable services and products",
            "Collaborate with the CTO to share responsibilities and drive technological innovation",
            "Tackle high-scale challenges, including projects involving LLMs and AI",
            "Work with clients directly, providing direct and real-world impact",
            "Stay abreast of emerging technologies and evaluate their applicability to our products",
        ],
        what_you_bring: &[
            "5+ years in software engineering with focus on DevOps/infrastructure",
            "Curious, independent, and persistent - driven to solve hard problems",
            "Experience in owning and delivering projects end to end",
            "Strong proficiency in Kubernetes, Terraform, and cloud platforms (AWS/GCP)",
            "Solid understanding of CI/CD, infrastructure as code, and GitOps",
            "Excellent problem-solving and analytical abilities",
            "Strong communication skills with ability to work effectively in a team",
        ],
        why_join_us: &[
            "Cutting-Edge Tech: Work with Kubernetes, Terraform, and cloud-native technologies in production",
            "Early-stage role with meaningful equity and impact",
            "Direct Impact: Small, flat engineering team where everyone influences architecture and product direction",
            "Greenfield Work: Build new systems from scratch, not maintain legacy code",
            "Technical Challenge at Scale: Focus on scaling throughput and building resilient enterprise systems",
            "Continuous Learning: Regular tech exploration sessions and quarterly hackathons",
            "Room to Grow: Opportunities for technical leadership with direct mentorship",
        ],
    },
    JobPosting {
        slug: "cloud-solutions-architect",
        title: "Cloud Solutions Architect",
        team: "Engineering",
        location: "Remote / San Francisco",
        employment: EmploymentType::FullTime,
        summary: "Design and implement scalable cloud solutions",
        who_we_are: "nirvahatech is a leading DevOps and cloud infrastructure consulting firm that empowers engineering teams to build resilient, scalable, and cost-effective systems. We design cloud architectures that scale with your business while maintaining security and cost-efficiency.",
        tech_stack: &[
            "AWS", "Azure", "GCP", "Terraform", "CloudFormation", "Python", "Docker",
            "Kubernetes", "Lambda", "API Gateway", "CDN", "Load Balancers",
        ],
        what_you_do: &[
            "Design and architect multi-cloud solutions for enterprise clients",
            "Lead technical discussions with C-level executives and engineering teams",
            "Create architecture diagrams, technical specifications, and best practices documentation",
            "Evaluate and recommend cloud services and technologies",
            "Mentor junior engineers and conduct architecture reviews",
            "Ensure solutions meet security, compliance, and performance requirements",
        ],
        what_you_bring: &[
            "7+ years in cloud architecture and infrastructure design",
            "Expert knowledge of AWS/Azure/GCP services and architecture patterns",
            "Experience with multi-cloud and hybrid cloud environments",
            "Strong understanding of networking, security, and compliance requirements",
            "Proven track record of designing systems handling millions of requests",
            "Excellent communication and presentation skills",
            "AWS/Azure/GCP certifications (Solutions Architect Professional preferred)",
        ],
        why_join_us: &[
            "Architectural Freedom: Design solutions from scratch for diverse clients",
            "Multi-Cloud Expertise: Work across AWS, Azure, and GCP",
            "Client Variety: From startups to Fortune 500 companies",
            "Thought Leadership: Speak at conferences and contribute to open source",
            "Competitive Compensation: Top-tier salary with equity options",
            "Learning Budget: Annual budget for certifications and training",
            "Remote Flexibility: Work from anywhere with occasional client visits",
        ],
    },
    JobPosting {
        slug: "site-reliability-engineer",
        title: "Site Reliability Engineer",
        team: "Engineering",
        location: "Remote / San Francisco",
        employment: EmploymentType::FullTime,
        summary: "Ensure system reliability and performance",
        who_we_are: "nirvahatech is a leading DevOps and cloud infrastructure consulting firm. Our SRE team ensures that client systems maintain 99.99% uptime while continuously improving automation, monitoring, and incident response capabilities.",
        tech_stack: &[
            "Kubernetes", "Prometheus", "Grafana", "ELK Stack", "Datadog", "PagerDuty",
            "Python", "Go", "Terraform", "Ansible", "Jenkins", "GitLab CI",
        ],
        what_you_do: &[
            "Build and maintain highly available production systems",
            "Implement comprehensive monitoring, alerting, and observability solutions",
            "Design and execute disaster recovery and business continuity plans",
            "Automate operational tasks and eliminate toil",
            "Participate in on-call rotation and incident response",
            "Conduct post-incident reviews and implement preventive measures",
            "Define and track SLIs, SLOs, and error budgets",
        ],
        what_you_bring: &[
            "4+ years in SRE, DevOps, or infrastructure engineering",
            "Strong programming skills in Python, Go, or similar languages",
            "Deep understanding of Linux systems administration",
            "Experience with container orchestration (Kubernetes preferred)",
            "Expertise in monitoring tools like Prometheus, Grafana, Datadog",
            "Proven ability to troubleshoot complex distributed systems",
            "On-call experience with incident management",
        ],
        why_join_us: &[
            "High Impact: Keep critical systems running for major clients",
            "Automation First: Eliminate repetitive tasks through smart automation",
            "Learning Culture: Share knowledge through runbooks and documentation",
            "Work-Life Balance: Fair on-call rotation with compensation",
            "Modern Stack: Work with the latest SRE tools and practices",
            "Problem Solving: Complex technical challenges every day",
            "Team Collaboration: Supportive team that values reliability over speed",
        ],
    },
    JobPosting {
        slug: "kubernetes-specialist",
        title: "Kubernetes Specialist",
        team: "Engineering",
        location: "Remote / Tel Aviv",
        employment: EmploymentType::FullTime,
        summary: "Manage and optimize Kubernetes clusters",
        who_we_are: "nirvahatech is a leading DevOps and cloud infrastructure consulting firm. Our Kubernetes team helps clients migrate to container orchestration, optimize cluster performance, and implement cloud-native best practices.",
        tech_stack: &[
            "Kubernetes", "Docker", "Helm", "ArgoCD", "Istio", "Prometheus", "Fluentd",
            "cert-manager", "RBAC", "Network Policies", "EKS", "GKE", "AKS",
        ],
        what_you_do: &[
            "Design, deploy, and manage production Kubernetes clusters",
            "Implement GitOps workflows using ArgoCD or Flux",
            "Configure service meshes (Istio, Linkerd) for microservices communication",
            "Optimize cluster performance, resource utilization, and costs",
            "Implement security best practices including RBAC, Network Policies, and Pod Security",
            "Migrate applications from VMs to containerized environments",
            "Provide training and guidance to development teams on Kubernetes best practices",
        ],
        what_you_bring: &[
            "3+ years of hands-on Kubernetes experience in production",
            "Strong understanding of container networking and storage",
            "Experience with Helm charts and Kubernetes operators",
            "Knowledge of service mesh architectures (Istio, Linkerd)",
            "Proficiency in at least one programming language (Go, Python, or Bash)",
            "CKA or CKAD certification preferred",
            "Experience with managed Kubernetes services (EKS, GKE, AKS)",
        ],
        why_join_us: &[
            "Kubernetes Focus: Specialized role dedicated to K8s excellence",
            "Diverse Projects: Work with clusters of all sizes and complexities",
            "Certification Support: Company-sponsored CKA/CKAD/CKS certifications",
            "Innovation Time: Experiment with new K8s features and tools",
            "Community Contribution: Contribute to CNCF projects",
            "Expert Team: Learn from other Kubernetes specialists",
            "Career Growth: Clear path from Specialist to Platform Architect",
        ],
    },
    JobPosting {
        slug: "finops-analyst",
        title: "FinOps Analyst",
        team: "Operations",
        location: "Remote / San Francisco",
        employment: EmploymentType::FullTime,
        summary: "Optimize cloud costs and financial operations",
        who_we_are: "nirvahatech is a leading DevOps and cloud infrastructure consulting firm. Our FinOps team helps clients achieve cloud cost optimization while maintaining performance and reliability, typically saving 30-50% on cloud spend.",
        tech_stack: &[
            "AWS Cost Explorer", "CloudHealth", "Kubecost", "Spot.io", "Terraform", "Python",
            "SQL", "Tableau", "Looker", "Excel", "Cost Management APIs",
        ],
        what_you_do: &[
            "Analyze cloud spending patterns and identify optimization opportunities",
            "Build dashboards and reports for cloud cost visibility",
            "Implement cost allocation and chargeback models",
            "Collaborate with engineering teams to optimize resource usage",
            "Recommend Reserved Instances, Savings Plans, and Spot Instance strategies",
            "Track and report on cloud cost KPIs and savings initiatives",
            "Conduct cloud cost audits and provide actionable recommendations",
        ],
        what_you_bring: &[
            "2+ years in cloud cost management or financial analysis",
            "Strong analytical skills with Excel/SQL proficiency",
            "Understanding of AWS/Azure/GCP pricing models",
            "Experience with cost management tools (CloudHealth, Kubecost, etc.)",
            "Ability to communicate financial concepts to technical teams",
            "Detail-oriented with strong problem-solving skills",
            "FinOps Certified Practitioner certification is a plus",
        ],
        why_join_us: &[
            "Tangible Impact: See direct results from your cost-saving initiatives",
            "Cross-Functional: Work with finance, engineering, and executive teams",
            "Data-Driven: Build models and dashboards that drive business decisions",
            "Growing Field: FinOps is one of the fastest-growing cloud disciplines",
            "Certification Support: Company-sponsored FinOps certifications",
            "Client Variety: Work with companies from startups to enterprises",
            "Financial Rewards: Performance bonuses tied to client cost savings",
        ],
    },
    JobPosting {
        slug: "devops-intern",
        title: "DevOps Intern",
        team: "Engineering",
        location: "Remote / Tel Aviv",
        employment: EmploymentType::Internship,
        summary: "Learn and contribute to DevOps practices",
        who_we_are: "nirvahatech is a leading DevOps and cloud infrastructure consulting firm. Our internship program provides hands-on experience with modern DevOps tools and practices, mentored by senior engineers working on real production systems.",
        tech_stack: &[
            "Linux", "Git", "Docker", "Kubernetes", "AWS", "Python", "Bash", "Terraform",
            "CI/CD", "Jenkins", "GitLab", "Monitoring tools",
        ],
        what_you_do: &[
            "Assist in building and maintaining CI/CD pipelines",
            "Learn to deploy and manage containerized applications",
            "Contribute to infrastructure automation using Terraform",
            "Help with monitoring, logging, and alerting setup",
            "Document processes and create technical guides",
            "Participate in team meetings and learn from code reviews",
            "Work on assigned projects under mentorship of senior engineers",
        ],
        what_you_bring: &[
            "Currently pursuing or recently completed degree in Computer Science or related field",
            "Basic understanding of Linux/Unix systems",
            "Familiarity with at least one programming language (Python, Go, or Java)",
            "Knowledge of version control (Git)",
            "Enthusiasm to learn cloud technologies and DevOps practices",
            "Strong problem-solving and communication skills",
            "Ability to commit to 3-6 month internship (full-time or part-time)",
        ],
        why_join_us: &[
            "Real Experience: Work on actual production systems, not toy projects",
            "Mentorship: Paired with experienced DevOps engineers",
            "Learning Path: Structured training program covering core DevOps concepts",
            "Modern Stack: Exposure to industry-standard tools and practices",
            "Conversion Opportunity: High-performing interns may receive full-time offers",
            "Flexible Schedule: Work arrangements that accommodate academic schedules",
            "Stipend: Competitive compensation for internship level",
        ],
    },
];

pub fn find_job(slug: &str) -> Option<&'static JobPosting> {
    JOBS.iter().find(|job| job.slug == slug)
}
