//! Department colour table used by the seat grid.

use shared_http::api::StudentRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatStyle {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

impl SeatStyle {
    /// Background fading from the base tint to a lighter one.
    pub fn gradient(&self) -> String {
        if self.background.starts_with("linear-gradient") {
            return self.background.to_string();
        }
        format!(
            "linear-gradient(135deg, {}, {})",
            self.background,
            self.background.replace("0.3", "0.15")
        )
    }

    pub fn css(&self) -> String {
        format!(
            "background: {}; border-color: {}; color: {};",
            self.gradient(),
            self.border,
            self.text
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub key: &'static str,
    pub style: SeatStyle,
}

const fn swatch(
    key: &'static str,
    background: &'static str,
    border: &'static str,
    text: &'static str,
) -> Swatch {
    Swatch {
        key,
        style: SeatStyle {
            background,
            border,
            text,
        },
    }
}

pub const DEPARTMENTS: [Swatch; 8] = [
    swatch("auto", "rgba(255, 107, 53, 0.3)", "#ff6b35", "#ff6b35"),
    swatch("civil", "rgba(20, 184, 166, 0.3)", "#14b8a6", "#14b8a6"),
    swatch("cse", "rgba(0, 102, 255, 0.3)", "#0066ff", "#66b3ff"),
    swatch("eee", "rgba(57, 255, 20, 0.3)", "#39ff14", "#39ff14"),
    swatch("ece", "rgba(0, 212, 255, 0.3)", "#00d4ff", "#00d4ff"),
    swatch("mech", "rgba(168, 85, 247, 0.3)", "#a855f7", "#a855f7"),
    swatch("cseds", "rgba(255, 105, 180, 0.3)", "#ff69b4", "#ff69b4"),
    swatch("it", "rgba(255, 215, 0, 0.3)", "#ffd700", "#ffd700"),
];

pub const NEUTRAL: SeatStyle = SeatStyle {
    background: "rgba(100, 100, 100, 0.3)",
    border: "#666",
    text: "#999",
};

pub const HIGHLIGHT: SeatStyle = SeatStyle {
    background: "linear-gradient(135deg, #ffd700, #ffa500)",
    border: "#ffd700",
    text: "#0a0a12",
};

pub const EMPTY: SeatStyle = SeatStyle {
    background: "rgba(18, 18, 30, 0.8)",
    border: "rgba(255, 255, 255, 0.1)",
    text: "var(--text-muted)",
};

/// Solid department colours used on the allocation console legend.
pub const ALLOCATION_LEGEND: [(&str, &str); 8] = [
    ("CSE", "#3B82F6"),
    ("IT", "#F59E0B"),
    ("ECE", "#06B6D4"),
    ("EEE", "#10B981"),
    ("MECH", "#8B5CF6"),
    ("CIVIL", "#F97316"),
    ("AUTO", "#EC4899"),
    ("CSEDS", "#6366F1"),
];

pub fn lookup(tag: &str) -> Option<SeatStyle> {
    let tag = tag.trim();
    DEPARTMENTS
        .iter()
        .find(|s| s.key.eq_ignore_ascii_case(tag))
        .map(|s| s.style)
}

/// Style for a tag, gray when the tag is unknown.
pub fn resolve(tag: &str) -> SeatStyle {
    lookup(tag).unwrap_or(NEUTRAL)
}

/// The explicit `color` tag wins; the department is tried when the tag is missing or unknown.
pub fn for_student(student: &StudentRef) -> SeatStyle {
    student
        .color
        .as_deref()
        .and_then(lookup)
        .or_else(|| student.department.as_deref().and_then(lookup))
        .unwrap_or(NEUTRAL)
}
