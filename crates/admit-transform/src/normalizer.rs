//! Canonicalization of matched program names.
//!
//! The program's type picks exactly one rule branch. Names without a type, or
//! with a type that has no rules, pass through unchanged. No branch fails.

use admit_model::{DegreeLevel, ProgramType, ReferenceCatalog};

const MENG: &str = "MEng";

const SE_MSSE: &[&str] = &["SiliconValley", "SV-SE", "SE", "SoftwareEngineering"];

const IS_MSIS: &[&str] = &["MasterofScienceinInformation", "InformationSystem"];
const IS_MSIM: &[&str] = &["InformationManagement"];

const HCI_MHCI: &[&str] = &["Human-Computer Interaction"];
const HCDE: &str = "Human-Centered Design and Engineering";

const EE_KEEP: &[&str] = &["MSECE", "MS ECE"];

const CMU_PREFIX: &str = "CMU ";
const CS_MSCS: &[&str] = &[
    "MSCS",
    "MS CS",
    "MCS",
    "Master of Science in Computer Science",
    "MS in CS",
];
const CS_GENERIC: &[&str] = &["Computer Science", "CS", "CSE"];
// "MCS" never reaches this list; CS_MSCS claims it first.
const CS_PROFESSIONAL: &[&str] = &["Professional CS", "MCS", "Master of Computer Science"];
const CS_EECS: &[&str] = &["EE CS", "EECS"];
const CS_VISION: &[&str] = &["CV", "Computer Vision"];
const CS_REMAPS: &[(&str, &str)] = &[
    ("MSIT-Mob", "MSIT-MOB"),
    ("MS in Machine Learning", "MSML"),
    ("MS DS", "MSDS"),
];

/// Maps a `(level, program name)` pair to one canonical program code.
#[derive(Debug, Clone, Copy)]
pub struct ProgramNormalizer<'a> {
    catalog: &'a ReferenceCatalog,
}

impl<'a> ProgramNormalizer<'a> {
    pub fn new(catalog: &'a ReferenceCatalog) -> Self {
        Self { catalog }
    }

    /// Normalize a program name for the given level.
    pub fn normalize(&self, level: Option<DegreeLevel>, program_name: &str) -> String {
        let is_ms = level == Some(DegreeLevel::Ms);
        match self.catalog.program_type(program_name) {
            Some(ProgramType::MEng) => MENG.to_string(),
            Some(ProgramType::Se) => normalize_se(program_name),
            Some(ProgramType::Is) => normalize_is(program_name),
            Some(program_type @ ProgramType::Hci) => normalize_hci(program_type, program_name),
            Some(ProgramType::Ee) => normalize_ee(is_ms, program_name),
            Some(ProgramType::Cs) => normalize_cs(is_ms, program_name),
            Some(ProgramType::Other(_)) | None => program_name.to_string(),
        }
    }
}

fn strip_spaces(name: &str) -> String {
    name.replace(' ', "")
}

fn normalize_se(name: &str) -> String {
    let stripped = strip_spaces(name);
    if SE_MSSE.contains(&stripped.as_str()) {
        "MSSE".to_string()
    } else {
        stripped
    }
}

fn normalize_is(name: &str) -> String {
    let stripped = strip_spaces(name);
    if IS_MSIS.contains(&stripped.as_str()) {
        "MSIS".to_string()
    } else if IS_MSIM.contains(&stripped.as_str()) {
        "MSIM".to_string()
    } else {
        stripped
    }
}

/// The MHCI rename compares the type tag, not the name, so it only fires for
/// a tag spelled like a full program name. HCDE is checked on the name.
fn normalize_hci(program_type: &ProgramType, name: &str) -> String {
    let name = if HCI_MHCI.contains(&program_type.as_str()) {
        "MHCI"
    } else {
        name
    };
    if name == HCDE {
        "MCDE".to_string()
    } else {
        name.to_string()
    }
}

fn normalize_ee(is_ms: bool, name: &str) -> String {
    if !is_ms {
        "EE".to_string()
    } else if EE_KEEP.contains(&name) {
        name.to_string()
    } else {
        "MSEE".to_string()
    }
}

fn normalize_cs(is_ms: bool, name: &str) -> String {
    let name = name.strip_prefix(CMU_PREFIX).unwrap_or(name);
    if CS_MSCS.contains(&name) {
        return "MSCS".to_string();
    }
    if CS_GENERIC.contains(&name) {
        return String::from(if is_ms { "MSCS" } else { "CS" });
    }
    if CS_PROFESSIONAL.contains(&name) {
        return "MCS".to_string();
    }
    if CS_EECS.contains(&name) {
        return String::from(if is_ms { "MS EECS" } else { "EECS" });
    }
    if CS_VISION.contains(&name) {
        return String::from(if is_ms { "MSCV" } else { "CV" });
    }

    let mut name = name;
    for (from, to) in CS_REMAPS {
        if name == *from {
            name = *to;
        }
    }
    name.to_string()
}
