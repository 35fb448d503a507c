//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "reelcut";

/// Default number of shorts to produce per video.
pub const DEFAULT_NUM_SHORTS: usize = 3;

/// Default minimum clip duration in seconds.
pub const DEFAULT_MIN_DURATION: f64 = 10.0;

/// Default output directory for generated shorts.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Candidate window generation.
pub mod candidates {
    /// Default stride between window starts in seconds.
    pub const DEFAULT_STEP_SIZE: u32 = 3;

    /// Default window durations in seconds.
    pub const DEFAULT_WINDOW_SIZES: [u32; 5] = [15, 20, 30, 45, 60];

    /// Upper bound on the estimated candidate count before the stride is enlarged.
    pub const DEFAULT_MAX_CANDIDATES: usize = 1000;

    /// Multiplier applied to `duration / min_window` when estimating candidate volume.
    pub const ESTIMATE_FACTOR: usize = 3;
}

/// Combined score weights and duration shaping.
pub mod scoring {
    /// Weight of the visual scene score.
    pub const VIDEO_WEIGHT: f64 = 0.30;

    /// Weight of the audio energy score.
    pub const AUDIO_WEIGHT: f64 = 0.40;

    /// Weight of the transcript score.
    pub const TEXT_WEIGHT: f64 = 0.30;

    /// Multiplier for the platform-optimal 15-30s range.
    pub const OPTIMAL_MULTIPLIER: f64 = 1.2;

    /// Multiplier for slightly short (10-15s) or slightly long (30-45s) clips.
    pub const NEAR_MULTIPLIER: f64 = 0.9;

    /// Multiplier for clips longer than 45s.
    pub const LONG_MULTIPLIER: f64 = 0.7;

    /// Lower score bound.
    pub const MIN: f64 = 0.0;

    /// Upper score bound.
    pub const MAX: f64 = 1.0;
}

/// Overlap-aware selection.
pub mod selection {
    /// Maximum allowed overlap / candidate length against any prior pick.
    pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.3;

    /// Mean prior footprint occupancy at which a candidate is rejected.
    pub const DEFAULT_FOOTPRINT_THRESHOLD: f64 = 0.3;

    /// Share of the score-sorted candidates considered in the first pass.
    pub const FIRST_PASS_FRACTION: f64 = 0.2;

    /// The fallback pass runs when the first pass accepts fewer than this.
    pub const FALLBACK_TRIGGER: usize = 3;

    /// The fallback pass stops once this many clips are selected.
    pub const FALLBACK_CAP: usize = 10;

    /// Lower bound on the midpoint separation in seconds.
    pub const DEFAULT_MIN_SEPARATION_FLOOR: f64 = 15.0;

    /// Number of temporal regions used for diversity balancing.
    pub const DEFAULT_REGION_COUNT: usize = 5;

    /// Balancer hands the selector this many candidates per requested short.
    pub const CANDIDATES_PER_SHORT: usize = 2;

    /// Midpoint separation is `duration / (num_shorts * this)`.
    pub const SEPARATION_SLOTS_PER_SHORT: usize = 2;
}

/// Short video handling.
pub mod short_video {
    /// Videos shorter than this use a reduced minimum clip duration.
    pub const THRESHOLD_SECS: f64 = 60.0;

    /// Ceiling of the reduced minimum clip duration.
    pub const MAX_MIN_DURATION: f64 = 5.0;

    /// The reduced minimum is at most `duration / DIVISOR`.
    pub const DIVISOR: f64 = 3.0;
}

/// Analyzer fallbacks and shaping constants.
pub mod analyzers {
    /// Score returned when an analyzer has nothing to say.
    pub const NEUTRAL_SCORE: f64 = 0.5;

    /// Distance in seconds over which the scene score decays to zero.
    pub const SCENE_DECAY_SECS: f64 = 10.0;

    /// Weight of the mean normalized RMS in the energy score.
    pub const ENERGY_MEAN_WEIGHT: f64 = 0.4;

    /// Weight of the peak normalized RMS in the energy score.
    pub const ENERGY_PEAK_WEIGHT: f64 = 0.6;

    /// Largest allowed deviation of an energy row gap, as a share of the frame.
    pub const ENERGY_SPACING_TOLERANCE: f64 = 0.5;

    /// Transcript score when the interval has no speech.
    pub const TEXT_SILENT_SCORE: f64 = 0.3;

    /// Transcript bonus for a highlight keyword.
    pub const TEXT_KEYWORD_BONUS: f64 = 0.3;

    /// Transcript bonus for a question.
    pub const TEXT_QUESTION_BONUS: f64 = 0.2;

    /// Transcript bonus for comfortable speech density.
    pub const TEXT_DENSITY_BONUS: f64 = 0.1;

    /// Comfortable speech density range in words per second.
    pub const TEXT_DENSITY_RANGE: (f64, f64) = (0.5, 3.0);
}

/// Clip extraction defaults.
pub mod extract {
    /// Default video codec passed to ffmpeg.
    pub const DEFAULT_VIDEO_CODEC: &str = "libx264";

    /// Default audio codec passed to ffmpeg.
    pub const DEFAULT_AUDIO_CODEC: &str = "aac";

    /// Default x264 preset.
    pub const DEFAULT_PRESET: &str = "medium";

    /// Default encoder thread count.
    pub const DEFAULT_THREADS: u32 = 2;

    /// Default output container extension.
    pub const DEFAULT_CONTAINER: &str = "mp4";

    /// Supported source video extensions.
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "webm", "mkv"];
}

/// Default transcript vocabulary (French and English).
pub mod text {
    /// Words and phrases that tend to introduce a highlight.
    pub const DEFAULT_KEYWORDS: &[&str] = &[
        "important",
        "essentiel",
        "crucial",
        "clé",
        "fondamental",
        "attention",
        "notez",
        "remarquez",
        "n'oubliez pas",
        "rappelez-vous",
        "premièrement",
        "deuxièmement",
        "troisièmement",
        "enfin",
        "conclusion",
        "en résumé",
        "pour conclure",
        "donc",
        "ainsi",
        "par conséquent",
        "exemple",
        "illustration",
        "cas",
        "preuve",
        "démonstration",
        "conseil",
        "astuce",
        "recommandation",
        "suggestion",
        "idée",
        "problème",
        "solution",
        "challenge",
        "défi",
        "opportunité",
        "question",
        "réponse",
        "pourquoi",
        "comment",
        "quand",
        "où",
        "qui",
        "essential",
        "key",
        "remember",
        "first",
        "finally",
        "in summary",
        "for example",
        "tip",
        "problem",
        "why",
        "how",
    ];

    /// Interrogatives that mark a question when they open the text.
    pub const DEFAULT_QUESTION_WORDS: &[&str] = &[
        "est-ce que",
        "qu'est-ce que",
        "comment",
        "pourquoi",
        "quand",
        "où",
        "qui",
        "quel",
        "quelle",
        "quels",
        "quelles",
        "what",
        "why",
        "how",
        "when",
        "where",
        "who",
        "which",
    ];
}
