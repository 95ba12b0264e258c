// Score scale
pub const SCORE_FLOOR: f64 = 2.0;
pub const SCORE_CEILING: f64 = 5.0;
pub const RATING_BASE: f64 = 1000.0;
pub const RATING_PER_SCORE_POINT: f64 = 300.0;

// Glicko-2 scale, see step 2 of Glickman's paper
pub const GLICKO2_SCALE: f64 = 173.7178;
pub const GLICKO2_CENTER: f64 = 1500.0;

// Model constants
pub const DEFAULT_VOLATILITY: f64 = 0.06;
pub const DEFAULT_TAU: f64 = 0.5;
pub const CONVERGENCE_TOLERANCE: f64 = 0.000_001;
pub const MAX_ITERATIONS: usize = 100;
pub const VARIANCE_EPSILON: f64 = 1e-12;
pub const DEVIATION_MIN: f64 = 30.0;
pub const DEVIATION_MAX: f64 = 350.0;

// Stateless deviation estimate
pub const SEASON_DEVIATION_FLOOR: f64 = 60.0;
pub const SEASON_DEVIATION_DECAY_SETS: f64 = 20.0;
pub const OPPONENT_DEVIATION: f64 = 80.0;

// Match weighting
pub const DOUBLES_WEIGHT: f64 = 0.85;
pub const MATCH_TIEBREAK_POINTS: u32 = 10;
pub const MATCH_TIEBREAK_WEIGHT: f64 = 0.60;
pub const MARGIN_FREE_GAMES: f64 = 2.0;
pub const MARGIN_STEP: f64 = 0.05;
pub const MARGIN_BONUS_CAP: f64 = 0.20;
pub const SET_SCORE_SEPARATORS: [char; 3] = ['-', ':', ' '];

// Expectation adjustment for female players
pub const FEMALE_EXPECTATION_OFFSET: f64 = 0.5;
