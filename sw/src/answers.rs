//! The respondent's answer set
//!
//! One struct holding every field the survey collects, in the exact wire
//! naming the sheet store expects. Every field is always present: fresh
//! sessions start from `Default`, and drafts saved under an older schema
//! deserialize with missing fields defaulted (`#[serde(default)]`).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Hard cap on selected life skills (the survey asks for exactly 3 picks)
pub const LIFE_SKILLS_LIMIT: usize = 3;

/// All answers collected across the wizard steps
///
/// Serialized names are the authoritative column/payload names, so this
/// struct round-trips directly into the submission payload and the draft
/// file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnswerSet {
    pub age: String,
    pub gender: String,
    pub federation: String,
    pub hobbies: String,
    pub interests: String,
    pub sporting_activity: String,
    pub spiritual: BTreeSet<String>,
    pub mission: BTreeSet<String>,
    pub skills: BTreeSet<String>,
    pub fun: BTreeSet<String>,
    pub speakers: String,
    pub program_items: String,
    pub life_skills: BTreeSet<String>,
    pub hope: String,
    pub other_issues: String,
    pub prize_draw_entry: bool,
}

/// Identifies a scalar (free text or single choice) field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Age,
    Gender,
    Federation,
    Hobbies,
    Interests,
    SportingActivity,
    Speakers,
    ProgramItems,
    Hope,
    OtherIssues,
}

/// Identifies a multi-select (membership set) field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetField {
    Spiritual,
    Mission,
    Skills,
    Fun,
    LifeSkills,
}

/// Outcome of toggling a set member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Member was inserted
    Added,
    /// Member was removed
    Removed,
    /// Insert refused (selection cap reached), set unchanged
    Rejected,
}

impl AnswerSet {
    /// Set a scalar field
    pub fn set(&mut self, field: ScalarField, value: impl Into<String>) {
        let value = value.into();
        debug!(?field, "AnswerSet::set");
        *self.scalar_mut(field) = value;
    }

    /// Read a scalar field
    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Age => &self.age,
            ScalarField::Gender => &self.gender,
            ScalarField::Federation => &self.federation,
            ScalarField::Hobbies => &self.hobbies,
            ScalarField::Interests => &self.interests,
            ScalarField::SportingActivity => &self.sporting_activity,
            ScalarField::Speakers => &self.speakers,
            ScalarField::ProgramItems => &self.program_items,
            ScalarField::Hope => &self.hope,
            ScalarField::OtherIssues => &self.other_issues,
        }
    }

    fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::Age => &mut self.age,
            ScalarField::Gender => &mut self.gender,
            ScalarField::Federation => &mut self.federation,
            ScalarField::Hobbies => &mut self.hobbies,
            ScalarField::Interests => &mut self.interests,
            ScalarField::SportingActivity => &mut self.sporting_activity,
            ScalarField::Speakers => &mut self.speakers,
            ScalarField::ProgramItems => &mut self.program_items,
            ScalarField::Hope => &mut self.hope,
            ScalarField::OtherIssues => &mut self.other_issues,
        }
    }

    /// Read a set field
    pub fn set_field(&self, field: SetField) -> &BTreeSet<String> {
        match field {
            SetField::Spiritual => &self.spiritual,
            SetField::Mission => &self.mission,
            SetField::Skills => &self.skills,
            SetField::Fun => &self.fun,
            SetField::LifeSkills => &self.life_skills,
        }
    }

    fn set_field_mut(&mut self, field: SetField) -> &mut BTreeSet<String> {
        match field {
            SetField::Spiritual => &mut self.spiritual,
            SetField::Mission => &mut self.mission,
            SetField::Skills => &mut self.skills,
            SetField::Fun => &mut self.fun,
            SetField::LifeSkills => &mut self.life_skills,
        }
    }

    /// Toggle membership of `member` in a set field
    ///
    /// Removal always succeeds. Insertion into `lifeSkills` is rejected once
    /// [`LIFE_SKILLS_LIMIT`] members are selected.
    pub fn toggle(&mut self, field: SetField, member: &str) -> Toggle {
        debug!(?field, %member, "AnswerSet::toggle");
        let cap = match field {
            SetField::LifeSkills => Some(LIFE_SKILLS_LIMIT),
            _ => None,
        };
        let set = self.set_field_mut(field);
        if set.contains(member) {
            set.remove(member);
            return Toggle::Removed;
        }
        if let Some(cap) = cap
            && set.len() >= cap
        {
            return Toggle::Rejected;
        }
        set.insert(member.to_string());
        Toggle::Added
    }

    /// Set the prize draw entry flag
    pub fn set_prize_draw(&mut self, entered: bool) {
        debug!(entered, "AnswerSet::set_prize_draw");
        self.prize_draw_entry = entered;
    }
}

/// A selectable option: stored key plus display label
#[derive(Debug, Clone, Copy)]
pub struct Choice {
    pub key: &'static str,
    pub label: &'static str,
}

const SPIRITUAL_CHOICES: &[Choice] = &[
    Choice { key: "study", label: "Deep Bible study & prophecy" },
    Choice { key: "prayer", label: "Building a strong prayer life" },
    Choice { key: "overcome", label: "Overcoming temptations" },
    Choice { key: "share", label: "Sharing my faith with others" },
];

const MISSION_CHOICES: &[Choice] = &[
    Choice { key: "sick", label: "Visiting the sick & elderly" },
    Choice { key: "evangelism", label: "Street evangelism with music & drama" },
    Choice { key: "cleanup", label: "Community clean-up & service" },
    Choice { key: "feed", label: "Feeding the hungry" },
];

const SKILLS_CHOICES: &[Choice] = &[
    Choice { key: "leadership", label: "Leadership & teamwork" },
    Choice { key: "speaking", label: "Public speaking & preaching" },
    Choice { key: "music", label: "Music & worship" },
    Choice { key: "media", label: "Media & communication" },
    Choice { key: "survival", label: "Outdoor survival/camping" },
];

const FUN_CHOICES: &[Choice] = &[
    Choice { key: "sports", label: "Sports (soccer, volleyball)" },
    Choice { key: "hiking", label: "Hiking / Nature walks" },
    Choice { key: "singing", label: "Bonfire & praise nights / singing" },
    Choice { key: "talent", label: "Talent show" },
    Choice { key: "games", label: "Games & laughter" },
    Choice { key: "marsh", label: "Roasting marshmallows" },
];

const LIFE_SKILLS_CHOICES: &[Choice] = &[
    Choice { key: "communication", label: "Communication & interpersonal skills" },
    Choice { key: "time-management", label: "Time management & organization" },
    Choice { key: "financial-literacy", label: "Financial literacy & budgeting" },
    Choice { key: "problem-solving", label: "Critical thinking & problem solving" },
    Choice { key: "emotional-intelligence", label: "Emotional intelligence & self-awareness" },
    Choice { key: "conflict-resolution", label: "Conflict resolution & mediation" },
    Choice { key: "digital-literacy", label: "Digital literacy & technology skills" },
    Choice { key: "health-wellness", label: "Health & wellness management" },
    Choice { key: "career-planning", label: "Career planning & goal setting" },
];

impl SetField {
    /// The legal members for this field, in display order
    pub fn choices(self) -> &'static [Choice] {
        match self {
            SetField::Spiritual => SPIRITUAL_CHOICES,
            SetField::Mission => MISSION_CHOICES,
            SetField::Skills => SKILLS_CHOICES,
            SetField::Fun => FUN_CHOICES,
            SetField::LifeSkills => LIFE_SKILLS_CHOICES,
        }
    }
}

/// Option lists for single-choice scalar fields
pub const AGE_OPTIONS: &[&str] = &["16", "17", "18", "19", "20", "21"];

pub const GENDER_OPTIONS: &[&str] = &["Male", "Female"];

pub const FEDERATION_OPTIONS: &[&str] = &[
    "CENTRINORTH",
    "CHIREMBA",
    "CHISE",
    "CHITWEST",
    "CHIVHUWEST",
    "GLENSEC",
    "GLENCITY",
    "WHAPP",
    "MAROCHEK",
    "EMA",
    "MULTICULTURAL",
    "ZIMDAG",
    "RUCHI",
    "SOUTHERN HARARE",
    "STONEVIEW",
    "NYAHUNI",
    "Other",
];

pub const SPORT_OPTIONS: &[&str] = &[
    "Soccer/Football",
    "Basketball",
    "Volleyball",
    "Tennis",
    "Swimming",
    "Running/Athletics",
    "Cricket",
    "Rugby",
    "Netball",
    "Hiking/Walking",
    "Cycling",
    "Other",
    "Not interested in sports",
];
