//! Static reference data about the studio: company profile, industry
//! expertise, client portfolio and the guidance used when building prompts.
//!
//! Pricing, styles and services live on their domain types in
//! [`crate::domain`]; this module holds everything that is only ever read.

#[derive(Debug, Clone, Copy)]
pub struct CompanyStats {
    pub videos_produced: &'static str,
    pub happy_clients: &'static str,
    pub countries_served: &'static str,
    pub team_size: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
    pub legal_name: &'static str,
    pub street: &'static str,
    pub city: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub website: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CompanyProfile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub tagline: &'static str,
    pub mission: &'static str,
    pub founded: &'static str,
    pub experience: &'static str,
    pub positioning: &'static str,
    pub expertise: &'static str,
    pub stats: CompanyStats,
    pub contact: ContactInfo,
}

pub const COMPANY: CompanyProfile = CompanyProfile {
    name: "Broadcast2World",
    short_name: "B2W",
    tagline: "Human-Powered Animated Explainer Video Company That Wins You More Customers",
    mission: "We don't just move pixels, we move people.",
    founded: "November 2009",
    experience: "15+ years",
    positioning:
        "Strategic partner for B2B, SaaS, Fintech, Cybersecurity, Healthcare, and Enterprise brands",
    expertise: "Technical storytelling for complex B2B products - we understand APIs, cloud workflows, DevOps, cybersecurity, SaaS architectures",
    stats: CompanyStats {
        videos_produced: "50+",
        happy_clients: "2000+",
        countries_served: "20+",
        team_size: "100+",
    },
    contact: ContactInfo {
        legal_name: "Broadcast2World Inc.",
        street: "371 Hoes Lane, Suite 200",
        city: "Piscataway, NJ 08854",
        phone: "(732) 387-3864",
        email: "marketing@b2w.tv",
        website: "https://www.b2w.tv",
    },
};

/// Average price quoted for a 60 second video.
pub const AVERAGE_COST_PER_60S: &str = "$2,800 USD per 60 seconds";

pub const PHILOSOPHY: [&str; 5] = [
    "100% human creativity - no AI-generated content. Real artists who understand emotion, nuance, and impact.",
    "Every video is 100% custom - built from scratch. No templates. No shortcuts.",
    "We get the story AND the tech - rare combination in creative industry.",
    "Support entire customer lifecycle - awareness to retention, investor pitches to employee training.",
    "Enterprise-grade quality without enterprise price tag. India-based production model.",
];

#[derive(Debug, Clone, Copy)]
pub struct IndustryProfile {
    /// Lowercase lookup key, e.g. `saas`.
    pub id: &'static str,
    pub name: &'static str,
    pub experience: &'static str,
    pub expertise: &'static str,
    pub specialization: &'static str,
    pub notable_clients: &'static [&'static str],
}

pub const DEFAULT_INDUSTRY_ID: &str = "saas";

pub static INDUSTRIES: [IndustryProfile; 8] = [
    IndustryProfile {
        id: "saas",
        name: "SaaS & Tech",
        experience: "15+ years, 1000+ videos",
        expertise: "Cloud platforms, developer tools, productivity software, collaboration tools",
        specialization: "Simplifying complex technical features for non-technical buyers",
        notable_clients: &["Zoom", "PandaDoc", "Aiven", "SUSE", "Five9", "Tradeshift"],
    },
    IndustryProfile {
        id: "cybersecurity",
        name: "Cybersecurity",
        experience: "10+ years, 200+ videos",
        expertise: "Threat detection, endpoint security, network protection, compliance",
        specialization: "Making invisible threats tangible and security solutions understandable",
        notable_clients: &["McAfee", "Forescout", "Asigra"],
    },
    IndustryProfile {
        id: "fintech",
        name: "Fintech & Blockchain",
        experience: "8+ years, 150+ videos",
        expertise: "Payment processing, crypto wallets, banking platforms, financial analytics",
        specialization: "Building trust around money and simplifying complex financial concepts",
        notable_clients: &["Coinsquare", "BitPay", "American Financial Solutions"],
    },
    IndustryProfile {
        id: "healthcare",
        name: "Healthcare & MedTech",
        experience: "12+ years, 250+ videos",
        expertise: "Medical devices, telemedicine, healthcare IT, life sciences",
        specialization: "Scientific accuracy + patient-friendly explanations, regulatory compliance",
        notable_clients: &[
            "BD",
            "CooperVision",
            "Edwards Lifesciences",
            "Fujifilm Healthcare",
            "Takara Bio",
            "Vanderbilt Health",
            "Sutter Health",
            "MedWand",
        ],
    },
    IndustryProfile {
        id: "enterprise",
        name: "Enterprise & Manufacturing",
        experience: "15+ years, 400+ videos",
        expertise: "ERP systems, supply chain, manufacturing, industrial automation",
        specialization: "Large-scale internal communications, complex system integrations",
        notable_clients: &["Siemens", "Lenovo", "Fujitsu", "Ericsson", "Epicor", "Lowe's"],
    },
    IndustryProfile {
        id: "education",
        name: "EdTech & Education",
        experience: "10+ years, 180+ videos",
        expertise: "Learning management systems, e-learning platforms, university programs",
        specialization: "Making learning engaging and accessible",
        notable_clients: &["Vanderbilt University", "UC Irvine", "Bowling Green State University"],
    },
    IndustryProfile {
        id: "utilities",
        name: "Utilities & Energy",
        experience: "8+ years, 100+ videos",
        expertise: "Energy management, grid systems, sustainability initiatives",
        specialization: "Public-facing education on complex infrastructure",
        notable_clients: &["Evergy Fleet Electrification", "Oncor", "Salem Electric"],
    },
    IndustryProfile {
        id: "nonprofit",
        name: "Non-Profit & Social Impact",
        experience: "10+ years, 120+ videos",
        expertise: "Social causes, fundraising, awareness campaigns",
        specialization: "Emotional storytelling for social good",
        notable_clients: &["UN Women", "BlueGreen Water Technologies"],
    },
];

/// Looks up an industry by its lowercase id. Form values such as "SaaS" are
/// lowercased first; anything unmatched returns `None`.
pub fn industry_profile(industry: &str) -> Option<&'static IndustryProfile> {
    let id = industry.trim().to_lowercase();
    INDUSTRIES.iter().find(|profile| profile.id == id)
}

/// Like [`industry_profile`] but falls back to the SaaS profile.
pub fn industry_profile_or_default(industry: &str) -> &'static IndustryProfile {
    industry_profile(industry).unwrap_or(&INDUSTRIES[0])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioClient {
    pub name: &'static str,
    pub industry: &'static str,
    pub video_type: &'static str,
    pub outcome: &'static str,
}

const fn client(
    name: &'static str,
    industry: &'static str,
    video_type: &'static str,
    outcome: &'static str,
) -> PortfolioClient {
    PortfolioClient {
        name,
        industry,
        video_type,
        outcome,
    }
}

pub static TOP_CLIENTS: [PortfolioClient; 38] = [
    client(
        "Fujitsu",
        "Enterprise Tech",
        "Product Explainer",
        "Simplified complex cloud infrastructure",
    ),
    client("Siemens", "Manufacturing", "Mixed Media", "Global team alignment on new platform"),
    client("Lenovo", "Technology", "Commercial", "Product launch campaign success"),
    client("Amazon AWS", "Cloud/SaaS", "Technical Explainer", "Developer onboarding acceleration"),
    client("Zoom", "SaaS", "Feature Explainer", "Early growth partner during scaling"),
    client("McAfee MVISION", "Cybersecurity", "Product Demo", "35% increase in trial signups"),
    client("PandaDoc", "SaaS", "Mixed Media", "Elevated brand perception"),
    client("Aiven", "Cloud Data", "2D Character", "Simplified database-as-service concept"),
    client("SUSE", "Open Source", "Motion Graphics", "Enterprise Linux adoption"),
    client("Five9", "Contact Center", "Explainer", "Reduced sales cycle time"),
    client("Tradeshift", "Supply Chain", "2D Character", "Network effect visualization"),
    client("Forescout", "Cybersecurity", "Technical", "Positioned as thought leader"),
    client("Vanderbilt University", "Education", "Mixed Media", "Record giving day donations"),
    client("UC Irvine", "Education", "Brand Anthem", "Student enrollment increase"),
    client("Edwards Lifesciences", "MedTech", "3D Product", "Clinical training efficiency"),
    client("Takara Bio", "Life Sciences", "Scientific", "Researcher product adoption"),
    client("Ericsson", "Telecom", "Training", "Global workforce upskilling"),
    client("Epicor", "ERP", "Product Demo", "Feature adoption across customers"),
    client("Coinsquare", "Fintech", "Trust Explainer", "User confidence in crypto platform"),
    client("UN Women", "Non-Profit", "Awareness", "Global campaign reach"),
    client("Coca-Cola", "CPG", "Internal Comms", "Employee engagement"),
    client("Lowe's", "Retail", "Training", "Store operations consistency"),
    client(
        "Bowling Green State University",
        "Education",
        "Recruitment",
        "Prospective student engagement",
    ),
    client("Sponsorium", "SaaS", "2D Character", "Product-market fit communication"),
    client("Wingtra", "Drones/Hardware", "Mixed Media 3D", "Complex technology simplified"),
    client("3Flow", "DevOps", "Product Demo", "Developer tool adoption"),
    client("Asigra", "Cybersecurity", "Explainer", "Backup solution clarity"),
    client("FibroGen", "Pharma", "Whiteboard", "Mechanism of action education"),
    client(
        "BlueGreen Water Technologies",
        "Environmental",
        "Explainer",
        "Investor confidence (CEO testimonial)",
    ),
    client("ThermoFisher", "Life Sciences", "Product", "Laboratory equipment education"),
    client("Evergy", "Utilities", "Explainer", "Fleet electrification public awareness"),
    client("Salem Electric", "Utilities", "Infographic", "Customer education on grid systems"),
    client("Oncor", "Utilities", "Corporate", "Stakeholder communications"),
    client("American Financial Solutions", "Finance", "Explainer", "Debt relief trust building"),
    client("The Law Offices of Adam Roa", "Legal Services", "Commercial", "Client acquisition"),
    client("Clif Bar", "CPG", "Internal", "Sustainability initiative communication"),
    client("Kyriba", "Fintech", "Platform Demo", "Treasury management adoption"),
    client("MITRE", "Government/Defense", "Explainer", "Complex systems communication"),
];

/// Number of portfolio clients quoted to the model.
pub const PROMPT_CLIENT_LIMIT: usize = 25;

/// Exact, case-sensitive lookup by client name.
pub fn find_client(name: &str) -> Option<&'static PortfolioClient> {
    TOP_CLIENTS.iter().find(|client| client.name == name)
}

/// First client whose name contains `title`, ignoring case.
pub fn find_client_containing(title: &str) -> Option<&'static PortfolioClient> {
    let needle = title.to_lowercase();
    TOP_CLIENTS
        .iter()
        .find(|client| client.name.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, Copy)]
pub struct AverageResults {
    pub engagement_increase: &'static str,
    pub conversion_lift: &'static str,
    pub demo_bookings: &'static str,
    pub sales_cycle_reduction: &'static str,
}

pub const AVERAGE_RESULTS: AverageResults = AverageResults {
    engagement_increase: "30-40% vs text/static",
    conversion_lift: "25-35% across funnel",
    demo_bookings: "35% increase for product demos",
    sales_cycle_reduction: "20-30% with video in sales process",
};

/// When to reach for a given style, as quoted in the system prompt.
pub struct StyleGuidance {
    pub heading: &'static str,
    pub signals: &'static [&'static str],
}

pub const STYLE_GUIDANCE: [StyleGuidance; 5] = [
    StyleGuidance {
        heading: "2D Character Animation",
        signals: &[
            "Need to humanize technical product",
            "Target audience is non-technical buyers",
            "Storytelling with relatable scenarios",
            "SaaS products with workflow improvements",
            "Budget: $2,400 - $3,500 range",
        ],
    },
    StyleGuidance {
        heading: "Motion Graphics",
        signals: &[
            "Data-heavy products",
            "Technical audience (developers, IT)",
            "Need credibility over emotion",
            "Clean, modern brand aesthetic",
            "Budget: $2,000 - $3,000 range",
        ],
    },
    StyleGuidance {
        heading: "3D Animation",
        signals: &[
            "Physical hardware products",
            "Medical devices needing precision",
            "Premium brand positioning",
            "Complex mechanical explanations",
            "Budget: $4,000 - $8,000 range",
        ],
    },
    StyleGuidance {
        heading: "Mixed Media",
        signals: &[
            "Brand anthem / company values",
            "High trust requirements",
            "Premium storytelling",
            "Emotional connection critical",
            "Budget: $4,000 - $7,000 range",
        ],
    },
    StyleGuidance {
        heading: "Whiteboard",
        signals: &[
            "Internal training / education",
            "Budget constraints ($1,800 - $2,500)",
            "Process explanations",
            "Trusted, educational tone",
        ],
    },
];

/// Narrative beats in order: (beat, what it does).
pub const STORYTELLING_STRUCTURE: [(&str, &str); 6] = [
    ("Problem", "Establish the pain point your audience faces"),
    ("Agitate", "Make the problem feel urgent and costly"),
    ("Solution", "Introduce your product as the hero"),
    ("How It Works", "Simple 3-step process explanation"),
    ("Social Proof", "Credibility through customers/metrics"),
    ("CTA", "Clear next action (demo, trial, contact)"),
];
