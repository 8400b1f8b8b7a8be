//! Workpulse-wide constants.

/// Default number of news cards revealed per "load more" step.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Persisted-state key holding the JSON-encoded watchlist.
pub const WATCHLIST_STATE_KEY: &str = "workpulse_watchlist";

/// Default SQLite file for persisted dashboard state.
pub const DEFAULT_STATE_DB_PATH: &str = "workpulse.db";

/// Headcount (thousands) that maps to a size feature of 1.0.
pub const DEFAULT_SIZE_REFERENCE: f64 = 500.0;

/// Headcount (thousands) assumed when a company has none on record.
pub const DEFAULT_SIZE_FALLBACK: f64 = 100.0;

/// Maximum number of companies in a side-by-side comparison.
pub const DEFAULT_MAX_COMPARED: usize = 5;

/// Number of companies pre-selected for comparison.
pub const DEFAULT_COMPARE_SEED: usize = 3;

/// Category labels forming the binary part of a company feature vector, in order.
pub const DEFAULT_FEATURE_LABELS: [&str; 10] = [
    "Career",
    "Rewards",
    "Consulting",
    "Transformation",
    "HR Tech",
    "Leadership",
    "Benefits",
    "Risk",
    "People",
    "Talent",
];

/// Industry baseline selected when none is configured.
pub const DEFAULT_INDUSTRY: &str = "Consulting & Advisory";

/// Display string for a timestamp that cannot be parsed.
pub const UNKNOWN_DATE_DISPLAY: &str = "—";

/// The fixed set of news sources the feed knows about.
pub const NEWS_SOURCES: [&str; 18] = [
    "Josh Bersin",
    "HR Tech Feed",
    "HR Tech Outlook",
    "Unleash",
    "HR Dive",
    "HR Tech Central",
    "TecHR",
    "HR Tech Feed Blog",
    "HR Tech247 Blog",
    "Factorial HR Blog",
    "People Managing People",
    "Talent Culture",
    "HR Zone",
    "TLNT",
    "Human Resources Director",
    "Workology",
    "SmartRecruiters Blog",
    "Link Humans",
];
