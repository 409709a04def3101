//! Built-in domain skill checklists.

/// Domain label -> canonical skills, in lookup order.
pub(super) const BUILTIN_DOMAINS: &[(&str, &[&str])] = &[
    (
        "AI/ML",
        &[
            "Python",
            "Linear Algebra",
            "Probability & Statistics",
            "Machine Learning Algorithms",
            "Deep Learning",
            "Neural Networks",
            "TensorFlow / PyTorch",
            "Data Preprocessing",
            "Model Evaluation",
            "MLOps",
        ],
    ),
    (
        "Web Development",
        &[
            "HTML",
            "CSS",
            "JavaScript",
            "TypeScript",
            "React",
            "Node.js",
            "REST APIs",
            "Databases",
            "Git",
            "Web Security",
        ],
    ),
    (
        "Data Science",
        &[
            "Python",
            "SQL",
            "Statistics",
            "Data Cleaning",
            "Pandas",
            "Data Visualization",
            "Exploratory Data Analysis",
            "Machine Learning",
            "A/B Testing",
            "Storytelling with Data",
        ],
    ),
    (
        "Mobile Development",
        &[
            "Kotlin",
            "Swift",
            "Flutter",
            "React Native",
            "Mobile UI Design",
            "State Management",
            "REST APIs",
            "Offline Storage",
            "App Store Deployment",
            "Mobile Testing",
        ],
    ),
    (
        "Cloud Computing",
        &[
            "Linux",
            "Networking Basics",
            "AWS",
            "Azure",
            "Google Cloud",
            "Virtualization",
            "Containers",
            "Infrastructure as Code",
            "Cloud Security",
            "Cost Optimization",
        ],
    ),
    (
        "DevOps",
        &[
            "Linux",
            "Git",
            "CI/CD",
            "Docker",
            "Kubernetes",
            "Terraform",
            "Monitoring",
            "Scripting",
            "Configuration Management",
            "Incident Response",
        ],
    ),
    (
        "Cybersecurity",
        &[
            "Networking",
            "Linux",
            "Cryptography",
            "Threat Modeling",
            "Penetration Testing",
            "Security Operations",
            "Incident Response",
            "Identity & Access Management",
            "Secure Coding",
            "Compliance",
        ],
    ),
    (
        "Blockchain",
        &[
            "Cryptography",
            "Distributed Systems",
            "Solidity",
            "Smart Contracts",
            "Ethereum",
            "Consensus Mechanisms",
            "Web3 Libraries",
            "Token Standards",
            "Security Auditing",
            "DeFi Concepts",
        ],
    ),
    (
        "Game Development",
        &[
            "C#",
            "C++",
            "Unity",
            "Unreal Engine",
            "Game Physics",
            "3D Math",
            "Level Design",
            "Animation",
            "Game AI",
            "Performance Profiling",
        ],
    ),
    (
        "UI/UX Design",
        &[
            "Design Thinking",
            "User Research",
            "Wireframing",
            "Prototyping",
            "Figma",
            "Visual Design",
            "Interaction Design",
            "Accessibility",
            "Usability Testing",
            "Design Systems",
        ],
    ),
    (
        "Digital Marketing",
        &[
            "SEO",
            "Content Marketing",
            "Social Media Marketing",
            "Email Marketing",
            "Paid Advertising",
            "Web Analytics",
            "Copywriting",
            "Conversion Optimization",
            "Marketing Automation",
            "Brand Strategy",
        ],
    ),
    (
        "Business Analytics",
        &[
            "Excel",
            "SQL",
            "Business Intelligence",
            "Power BI / Tableau",
            "Statistics",
            "Forecasting",
            "Requirements Gathering",
            "Dashboard Design",
            "KPI Definition",
            "Stakeholder Communication",
        ],
    ),
];

/// Fallback checklist for labels no domain matches.
pub const DEFAULT_SKILLS: [&str; 10] = [
    "Problem Solving",
    "Critical Thinking",
    "Communication",
    "Research",
    "Time Management",
    "Project Management",
    "Collaboration",
    "Adaptability",
    "Technical Writing",
    "Continuous Learning",
];
