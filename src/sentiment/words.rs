//! Built-in word tables for [`LexiconScorer`](super::lexicon::LexiconScorer).
//!
//! Valences run from roughly -4 (extremely negative) to +4 (extremely
//! positive), on the same scale as the widely used VADER lexicon, so a full
//! VADER lexicon file can be loaded in place of this one.

/// Increment applied by intensifying adverbs.
pub const B_INCR: f64 = 0.293;
/// Decrement applied by dampening adverbs.
pub const B_DECR: f64 = -0.293;
/// Extra emphasis for an ALL-CAPS word among mixed-case text.
pub const C_INCR: f64 = 0.733;
/// Scalar applied to a valence when it is negated.
pub const N_SCALAR: f64 = -0.74;

pub const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("considerably", B_INCR),
    ("decidedly", B_INCR),
    ("deeply", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptionally", B_INCR),
    ("extremely", B_INCR),
    ("fabulously", B_INCR),
    ("fully", B_INCR),
    ("fucking", B_INCR),
    ("greatly", B_INCR),
    ("hella", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("majorly", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("so", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("totally", B_INCR),
    ("tremendously", B_INCR),
    ("unbelievably", B_INCR),
    ("unusually", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("kinda", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarcely", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sorta", B_DECR),
];

pub const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never", "none", "nope",
    "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
    "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

pub const LEXICON: &[(&str, f64)] = &[
    // positive
    ("admire", 2.1),
    ("agree", 1.5),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("brave", 2.4),
    ("brilliant", 2.8),
    ("care", 2.2),
    ("celebrate", 2.7),
    ("champion", 2.9),
    ("cool", 1.3),
    ("courage", 2.2),
    ("decent", 1.6),
    ("enjoy", 2.2),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("fair", 1.3),
    ("fantastic", 2.6),
    ("fine", 0.8),
    ("free", 2.3),
    ("freedom", 3.2),
    ("fun", 2.3),
    ("funny", 1.9),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("haha", 2.0),
    ("happy", 2.7),
    ("hero", 2.6),
    ("honest", 2.3),
    ("hope", 1.9),
    ("hopeful", 1.6),
    ("impressive", 2.3),
    ("interesting", 1.7),
    ("kind", 2.4),
    ("like", 1.5),
    ("liked", 1.8),
    ("lol", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 2.7),
    ("loving", 2.9),
    ("nice", 1.8),
    ("ok", 1.2),
    ("okay", 0.9),
    ("peace", 2.5),
    ("perfect", 2.7),
    ("popular", 1.8),
    ("positive", 2.6),
    ("proud", 2.1),
    ("respect", 2.1),
    ("safe", 1.9),
    ("smart", 1.7),
    ("strong", 2.3),
    ("success", 2.7),
    ("successful", 2.8),
    ("support", 1.7),
    ("supports", 1.5),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("true", 1.8),
    ("trust", 2.3),
    ("well", 1.1),
    ("win", 2.8),
    ("winning", 2.4),
    ("wins", 2.7),
    ("wonderful", 2.7),
    ("yes", 1.7),
    (":)", 2.0),
    (":d", 2.3),
    ("<3", 1.9),
    // negative
    ("afraid", -2.0),
    ("angry", -2.3),
    ("annoying", -1.7),
    ("awful", -2.0),
    ("bad", -2.5),
    ("blame", -1.4),
    ("corrupt", -3.0),
    ("corruption", -1.9),
    ("crazy", -1.4),
    ("crisis", -3.1),
    ("cruel", -2.8),
    ("damn", -1.7),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("dead", -3.3),
    ("disaster", -3.1),
    ("disgusting", -2.4),
    ("dumb", -2.3),
    ("evil", -3.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fake", -2.1),
    ("fear", -2.2),
    ("fraud", -2.8),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("hell", -2.5),
    ("horrible", -2.5),
    ("idiot", -2.3),
    ("idiots", -2.6),
    ("kill", -3.7),
    ("killed", -3.5),
    ("liar", -3.1),
    ("lies", -1.8),
    ("lose", -1.3),
    ("loser", -2.4),
    ("lost", -1.3),
    ("lying", -2.4),
    ("mess", -1.5),
    ("no", -1.2),
    ("pathetic", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("racist", -3.1),
    ("sad", -2.1),
    ("scared", -1.9),
    ("shame", -2.1),
    ("sick", -2.3),
    ("stupid", -2.4),
    ("terrible", -2.1),
    ("threat", -2.4),
    ("trash", -1.5),
    ("ugly", -2.3),
    ("useless", -1.8),
    ("war", -2.9),
    ("weak", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
    (":(", -1.9),
];
