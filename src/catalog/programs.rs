//! Academic programs and form choices

use super::Categorized;

/// A program on the programs page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Program {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub duration: &'static str,
    pub modes: &'static [&'static str],
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

impl Categorized for Program {
    fn category(&self) -> &str {
        self.category
    }
}

pub const PROGRAM_CATEGORIES: &[(&str, &str)] = &[
    (super::ALL_CATEGORIES, "All Programs"),
    ("certificate", "Certificate"),
    ("diploma", "Diploma"),
    ("advanced", "Advanced Degrees"),
    ("skill", "Skill Acquisition"),
];

const ALL_MODES: &[&str] = &["On-campus", "Online", "Hybrid"];
const CAMPUS_OR_HYBRID: &[&str] = &["On-campus", "Hybrid"];

pub const PROGRAMS: &[Program] = &[
    Program {
        id: 1,
        title: "Certificate in Biblical Studies",
        category: "certificate",
        duration: "3-6 months",
        modes: ALL_MODES,
        description: "Foundational study of Scripture, biblical interpretation, and Christian doctrine.",
        highlights: &["Scripture Study", "Biblical Interpretation", "Christian Doctrine", "Prayer & Spirituality"],
    },
    Program {
        id: 2,
        title: "Certificate in Christian Ministry",
        category: "certificate",
        duration: "3-6 months",
        modes: ALL_MODES,
        description: "Practical ministry skills for church leadership and community service.",
        highlights: &["Ministry Leadership", "Pastoral Care", "Evangelism", "Church Administration"],
    },
    Program {
        id: 3,
        title: "Certificate in Theology",
        category: "certificate",
        duration: "4-6 months",
        modes: ALL_MODES,
        description: "Systematic study of Christian theology and doctrinal foundations.",
        highlights: &["Systematic Theology", "Church History", "Comparative Religion", "Ethics"],
    },
    Program {
        id: 4,
        title: "Certificate in Leadership & Management",
        category: "certificate",
        duration: "3-6 months",
        modes: ALL_MODES,
        description: "Leadership principles for Christian organizations and ministry contexts.",
        highlights: &["Christian Leadership", "Strategic Planning", "Team Management", "Organizational Behavior"],
    },
    Program {
        id: 5,
        title: "Diploma in Theology",
        category: "diploma",
        duration: "1-2 years",
        modes: ALL_MODES,
        description: "Comprehensive theological education covering major areas of Christian doctrine and practice.",
        highlights: &["Advanced Theology", "Biblical Languages", "Preaching", "Research Methods"],
    },
    Program {
        id: 6,
        title: "Diploma in Pastoral Ministry",
        category: "diploma",
        duration: "1-2 years",
        modes: ALL_MODES,
        description: "Comprehensive preparation for pastoral leadership and church ministry.",
        highlights: &["Pastoral Theology", "Counseling", "Worship Leadership", "Ministry Administration"],
    },
    Program {
        id: 7,
        title: "Diploma in Evangelism & Missions",
        category: "diploma",
        duration: "1-2 years",
        modes: ALL_MODES,
        description: "Training for effective evangelism and cross-cultural missions work.",
        highlights: &["Mission Strategy", "Cross-cultural Ministry", "Church Planting", "Apologetics"],
    },
    Program {
        id: 8,
        title: "Master of Arts in Theology",
        category: "advanced",
        duration: "2 years",
        modes: CAMPUS_OR_HYBRID,
        description: "Advanced theological study with research focus and ministry application.",
        highlights: &["Advanced Research", "Thesis Writing", "Theological Reflection", "Ministry Practicum"],
    },
    Program {
        id: 9,
        title: "Master of Arts in Leadership",
        category: "advanced",
        duration: "2 years",
        modes: CAMPUS_OR_HYBRID,
        description: "Strategic leadership development for Christian organizations and ministries.",
        highlights: &["Strategic Leadership", "Organizational Development", "Change Management", "Leadership Coaching"],
    },
    Program {
        id: 10,
        title: "PhD in Theology",
        category: "advanced",
        duration: "3-5 years",
        modes: CAMPUS_OR_HYBRID,
        description: "Doctoral research in specialized theological fields with original contribution to scholarship.",
        highlights: &["Original Research", "Dissertation", "Academic Writing", "Teaching Qualification"],
    },
    Program {
        id: 11,
        title: "PhD in Christian Security & Safety Management",
        category: "advanced",
        duration: "3-5 years",
        modes: CAMPUS_OR_HYBRID,
        description: "Specialized doctoral program in security management for Christian organizations.",
        highlights: &["Security Management", "Risk Assessment", "Crisis Response", "Policy Development"],
    },
    Program {
        id: 12,
        title: "Catering & Hospitality Skills",
        category: "skill",
        duration: "6 months - 1 year",
        modes: &["On-campus"],
        description: "Practical training in culinary arts and hospitality management.",
        highlights: &["Culinary Arts", "Food Safety", "Event Planning", "Business Management"],
    },
    Program {
        id: 13,
        title: "ICT & Digital Skills",
        category: "skill",
        duration: "6 months - 1 year",
        modes: &["On-campus", "Online"],
        description: "Technology skills for modern ministry and professional development.",
        highlights: &["Computer Skills", "Digital Media", "Web Design", "Ministry Technology"],
    },
];

/// Choices of the "program applied" select on the admissions form
pub const ADMISSION_PROGRAMS: &[&str] = &[
    "Certificate in Biblical Studies",
    "Certificate in Christian Ministry",
    "Certificate in Theology",
    "Certificate in Leadership & Management",
    "Certificate in Evangelism & Missions",
    "Diploma in Theology",
    "Diploma in Pastoral Ministry",
    "Diploma in Evangelism & Missions",
    "Diploma in Leadership & Management",
    "Advanced Diploma in Theology",
    "Postgraduate Diploma in Theology",
    "Master of Arts in Theology",
    "Master of Arts in Leadership",
    "Master of Arts in Peace & Conflict Resolution",
    "PhD in Theology",
    "PhD in Christian Leadership & Management",
    "PhD in Christian Security & Safety Management",
    "Catering & Hospitality Skills",
    "ICT & Digital Skills",
];

pub const STUDY_MODES: &[&str] = ALL_MODES;

pub const PARTNERSHIP_TYPES: &[&str] = &[
    "Scholarship Funding",
    "Infrastructure Development",
    "Internship Programs",
    "Ministry Support",
    "Research Grants",
    "Faculty Exchange",
    "Library Resources",
    "Technology Support",
    "Event Sponsorship",
    "General Partnership",
];
