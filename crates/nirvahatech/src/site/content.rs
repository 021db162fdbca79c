//! Marketing copy for the landing page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Hero {
    pub lead: &'static str,
    pub highlight: &'static str,
    pub pitch: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub footnote: &'static str,
}

/// Animated figure. The counter runs from zero to `value` once revealed.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub value: f64,
    pub decimals: u8,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

impl Stat {
    /// Final figure as the counter settles on it.
    pub fn display(&self) -> String {
        format!(
            "{}{:.*}{}",
            self.prefix,
            usize::from(self.decimals),
            self.value,
            self.suffix
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Certificate {
    pub image: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    /// Fragment links point at landing-page sections.
    pub href: &'static str,
    pub label: &'static str,
}

pub const COMPANY: &str = "nirvahatech";
pub const TAGLINE: &str =
    "Expert-led DevOps and cloud infrastructure solutions for scaling tech companies.";

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        href: "#about-section",
        label: "About",
    },
    NavLink {
        href: "#services-section",
        label: "Services",
    },
    NavLink {
        href: "#testimonials-section",
        label: "Testimonials",
    },
    NavLink {
        href: "/careers",
        label: "Careers",
    },
    NavLink {
        href: "#contact-section",
        label: "Contact",
    },
];

pub const HERO: Hero = Hero {
    lead: "Stop Firefighting.",
    highlight: "Start Innovating.",
    pitch: "Expert-led DevOps for tech leaders who need a scalable, self-healing infrastructure that finally lets you focus on your product.",
    primary_cta: "Get Your Free Roadmap",
    secondary_cta: "Learn More",
    footnote: "100% Free, No-Obligation Assessment",
};

pub const STORY_HEADLINE: &str = "From Firefighting to Innovation";
pub const STORY_PITCH: &str =
    "Your engineers should build the future, not just keep the lights on.";
pub const STORY_DETAIL: &str = "We're engineers who lived this pain. We give you back your team's most valuable resource: time and focus.";

pub const STATS: [Stat; 4] = [
    Stat {
        value: 5.0,
        decimals: 0,
        prefix: "",
        suffix: "x",
        label: "Faster",
        description: "Deployments",
    },
    Stat {
        value: 99.99,
        decimals: 2,
        prefix: "",
        suffix: "%",
        label: "Always",
        description: "Available",
    },
    Stat {
        value: 40.0,
        decimals: 0,
        prefix: "-",
        suffix: "%",
        label: "Lower",
        description: "Cloud Spend",
    },
    Stat {
        value: 24.0,
        decimals: 0,
        prefix: "",
        suffix: "/7",
        label: "Always",
        description: "Watching",
    },
];

pub const PARTNER_HEADLINE: &str = "Strategic Partners, Not Just Vendors";
pub const PARTNER_PITCH: &str =
    "Our goal? Make ourselves obsolete. Your team should own the system.";

pub const ENGAGEMENT_STEPS: [Card; 3] = [
    Card {
        title: "Embed & Assess",
        body: "Understand your tech, goals, and team dynamics.",
    },
    Card {
        title: "Implement Fast",
        body: "Battle-tested frameworks. Quick wins. Lasting results.",
    },
    Card {
        title: "Transfer Knowledge",
        body: "Pair-program, document, train. Complete self-sufficiency.",
    },
];

pub const SYMPTOMS_HEADLINE: &str = "Symptoms Your System Can No Longer Scale";
pub const SYMPTOMS_PITCH: &str =
    "If you recognize even one of these, your infrastructure has already become a bottleneck.";
pub const SYMPTOMS_CLOSER: &str = "Sound familiar? You're not alone. Let's fix this together.";

pub const SYMPTOMS: [Card; 6] = [
    Card {
        title: "Deployments Break Randomly",
        body: "Every release feels like rolling the dice. Your team ships slower because they're scared to break production.",
    },
    Card {
        title: "Manual Scaling Chaos",
        body: "Traffic spikes trigger all-hands-on-deck panic. Scaling shouldn't require heroics at 3 AM.",
    },
    Card {
        title: "Cloud Costs Exploding",
        body: "Your AWS bill grows faster than revenue. No visibility into what's burning money or why.",
    },
    Card {
        title: "Engineers Stuck Firefighting",
        body: "Your best developers waste days debugging infrastructure instead of building features that matter.",
    },
    Card {
        title: "Zero Observability",
        body: "When things break, you're flying blind. No logs, no metrics, no way to prevent the next incident.",
    },
    Card {
        title: "Kubernetes Became a Maze",
        body: "Your setup is so complex nobody understands it anymore. Knowledge silos create critical single points of failure.",
    },
];

pub const SERVICES_HEADLINE: &str = "A Full-Suite of Services";
pub const SERVICES_PITCH: &str = "Designed to Accelerate Product Delivery";

pub const SERVICES: [Card; 3] = [
    Card {
        title: "Expert-Led DevOps & Kubernetes",
        body: "We design, build, and maintain high-performance, self-healing cloud infrastructure. From re-architecting fragile CI/CD pipelines to implementing GitOps-driven workflows, we turn your infrastructure into a competitive advantage. The result is a platform where your developers can ship code reliably and frequently, without the bottlenecks that once slowed them down.",
    },
    Card {
        title: "DevSecOps & FinOps Integration",
        body: "We help you move from a reactive to a proactive posture. By integrating security and cost management directly into your development lifecycle, we help you eliminate vulnerabilities and put an end to chaotic, unpredictable cloud bills. Gain a single pane of glass for both security posture and cost allocation, allowing you to innovate safely and responsibly.",
    },
    Card {
        title: "24/7 NOC & QA Automation",
        body: "Achieve the peace of mind that comes from knowing your systems are monitored around the clock by experts. Our 24/7 Network Operations Center ensures that potential issues are identified and resolved before they impact your customers. Combined with our robust QA automation services, we help you maintain exceptional uptime and deliver a flawless user experience.",
    },
];

pub const CERTIFICATES_HEADLINE: &str = "Certified Expertise";
pub const CERTIFICATES_PITCH: &str = "Our team holds industry-leading certifications to ensure you receive world-class DevOps and cloud infrastructure solutions.";

pub const CERTIFICATES: [Certificate; 2] = [
    Certificate {
        image: "/certificate-1.webp",
        alt: "Professional Certification",
        title: "Professional Certification",
    },
    Certificate {
        image: "/aws-badges.png",
        alt: "AWS Certifications and Badges",
        title: "AWS Certifications & Badges",
    },
];

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "Working with nirvahatech was a game-changer. Our deployment times went from hours to minutes, and we've achieved 99.99% uptime. They didn't just fix our problems; they empowered our team to manage a truly scalable system. It's the best investment we've made in our tech stack.",
        name: "Sarah Johnson",
        title: "CTO",
        company: "QuantumLeap AI",
    },
    Testimonial {
        quote: "Before nirvahatech, our cloud spend was chaotic. Their FinOps approach brought immediate clarity and helped us cut costs by over 30% without sacrificing performance. Their team feels like an extension of ours, true partners in our success.",
        name: "David Chen",
        title: "VP of Engineering",
        company: "NexaHealth",
    },
    Testimonial {
        quote: "The level of Kubernetes expertise at nirvahatech is unmatched. They untangled a highly complex setup that had plagued us for years. Our developers are finally free to innovate instead of constantly firefighting. I can't recommend them enough.",
        name: "Michael Rodriguez",
        title: "DevOps Manager",
        company: "AID Genomics",
    },
    Testimonial {
        quote: "nirvahatech transformed our entire DevOps culture. Their observability framework gave us insights we never had before, and now we catch issues before they impact customers. Our incident response time dropped by 80%. They're not just consultants, they're force multipliers.",
        name: "Emily Patterson",
        title: "Head of Platform Engineering",
        company: "StreamVista",
    },
];

pub const CONTACT_HEADLINE: &str = "Ready to Get Your Actionable Roadmap?";
pub const CONTACT_PITCH: &str = "Your infrastructure doesn't have to be a source of stress and uncertainty. What if your next production release was a moment of confidence, not fear?";
pub const CONTACT_OFFER: &str = "Our free, no-obligation deep-dive consultation where we will analyze your current setup, identify critical bottlenecks, and provide you with an actionable roadmap. This isn't a sales pitch. It's a strategic session designed to give you immediate value.";
pub const CONTACT_SUBMIT: &str = "Request My Free Assessment";
pub const CONTACT_PRIVACY: &str = "Your information is confidential and will not be shared.";
pub const CONTACT_SUCCESS_TITLE: &str = "Thank You!";
pub const CONTACT_SUCCESS_BODY: &str = "We've received your request. Our team will reach out to you within 24 hours to schedule your free Cloud Reliability Assessment.";

pub const FOOTER_CTA: &str = "Ready to transform your infrastructure?";
pub const FOOTER_CTA_LINK: &str = "Schedule Assessment";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_render_with_prefix_suffix_and_decimals() {
        let rendered: Vec<String> = STATS.iter().map(Stat::display).collect();
        assert_eq!(rendered, vec!["5x", "99.99%", "-40%", "24/7"]);
    }

    #[test]
    fn landing_copy_is_complete() {
        assert_eq!(SYMPTOMS.len(), 6);
        assert_eq!(SERVICES.len(), 3);
        assert_eq!(ENGAGEMENT_STEPS.len(), 3);
        assert!(TESTIMONIALS
            .iter()
            .all(|t| !t.quote.is_empty() && !t.company.is_empty()));
    }
}
