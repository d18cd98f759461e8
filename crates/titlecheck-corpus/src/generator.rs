//! Synthetic negative titles.
//!
//! A template is picked uniformly at random and each slot is filled with a
//! uniformly chosen word, independently per slot and per title. Nothing
//! prevents duplicates. The generator owns its random source so a seeded
//! run is reproducible.

use oorandom::Rand64;
use rand::Rng;
use titlecheck_core::{Label, LabeledTitle};

/// Adjective slot pool.
pub const ADJECTIVES: &[&str] = &[
    "Amazing", "Bizarre", "Curious", "Dancing", "Flying", "Golden", "Invisible", "Mysterious",
    "Wacky", "Whimsical", "Intriguing", "Elusive", "Imaginative", "Triumphant", "Twisted",
    "Unexpected", "Faithful", "Confused", "Crooked", "Roomy", "Flimsy", "Handy", "Impartial",
    "Harsh", "Oceanic", "Hospitable", "Consistent", "Military", "Purring", "Beneficial",
    "Fanatical", "Juvenile", "Observant", "Stupendous", "Wasteful", "Former", "Extra-small",
    "Ambitious", "Loving", "Friendly", "Spotty", "Bustling", "Zonked", "Educated", "Hanging",
    "Possessive", "Voracious", "Lucky", "Innate", "Adjoining", "Deafening", "Tenuous",
    "Vigorous", "Inner", "Wacky", "Mysterious", "Bent", "Marvelous", "Cowardly", "Shiny",
    "Abnormal", "Omniscient", "Cagey", "Perfect", "Quirky",
];

/// Noun slot pool.
pub const NOUNS: &[&str] = &[
    "Banana", "Dragon", "Microwave", "Penguin", "Robot", "Spaceship", "Toast", "Wizard", "Yeti",
    "Zombie", "Mole", "Guitar", "Desk", "Jeep", "Refrigerator", "Security", "Interaction",
    "Region", "Election", "Software", "World", "Throat", "Instance", "Clothes", "Engineering",
    "Assistant", "Version", "History", "Employer", "Climate", "Literature", "Death", "Outcome",
    "Affair", "Family", "Reception", "Responsibility", "Length", "Gate", "Pizza", "Phone",
    "Importance", "Energy", "Hearing", "Ability", "Farmer", "King", "Mixture", "Cigarette",
    "Possibility", "Context", "Attention", "Disk", "Foundation", "Mom", "Paper", "Decision",
    "Passion", "Contract", "Magazine", "Steak", "Assumption", "Article", "Recommendation",
    "Concept",
];

/// Verb slot pool.
pub const VERBS: &[&str] = &[
    "Bake", "Train", "Escape", "Build", "Discover", "Uncover", "Tame", "Summon", "Destroy",
    "Grow", "Defeat", "Break", "Encounter", "Paint", "Gather", "Hunt", "Scatter", "Bounce",
    "Swear", "Expect", "Enjoy", "Mutter", "Phone", "Select", "Dislike", "Campaign", "Handle",
    "Focus", "Look", "Release", "Fling", "Order", "Recognize", "Attack", "Collect", "Enable",
    "Claim", "Discuss", "Render", "Withdraw", "Reverse", "Interrupt", "Cause", "Lift", "Earn",
    "Fulfil", "Formulate", "Drift", "Represent", "Precede", "Score", "Balance", "Vary",
    "Resolve", "Crush", "Integrate", "Dominate", "Follow", "Hire", "Stage", "Tip", "View",
    "Rebuild", "Stress", "Communicate", "Stem",
];

/// Title shapes. `{adjective}`, `{noun}` and `{verb}` are the slots.
pub const TEMPLATES: &[&str] = &[
    "The {adjective} {noun}",
    "How to {verb} a {noun}",
    "The Chronicles of the {adjective} {noun}",
    "Adventures in {noun} Land",
    "{verb}ing the {adjective} {noun}",
    "{noun} and the {adjective} Quest",
    "Tales of a {adjective} {noun}",
    "The Secret of the {noun}",
    "{adjective} {noun}: A Memoir",
    "The Legend of the {adjective} {noun}",
    "Diary of a {adjective} {noun}",
    "Escape from the {adjective} {noun}",
    "Journey to the {adjective} {noun}",
    "The Curse of the {adjective} {noun}",
    "My Life as a {adjective} {noun}",
    "The Last {adjective} {noun}",
    "Chronicles of {adjective} {noun} Kingdom",
    "A Guide to {verb}ing the {noun}",
    "Memoirs of a {adjective} {noun}",
    "The Rise and Fall of the {adjective} {noun}",
];

/// Fills the slots of `template`. Verb slots are joined to any suffix as
/// written, so `{verb}ing` with "Bake" gives "Bakeing".
pub fn fill_template(template: &str, adjective: &str, noun: &str, verb: &str) -> String {
    template
        .replace("{adjective}", adjective)
        .replace("{noun}", noun)
        .replace("{verb}", verb)
}

/// Template engine for fabricated book titles.
pub struct FakeTitleGenerator {
    rng: Rand64,
}

impl FakeTitleGenerator {
    /// Use the given random source.
    pub fn new(rng: Rand64) -> Self {
        Self { rng }
    }

    /// Reproducible generator.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Rand64::new(u128::from(seed)))
    }

    /// Generator seeded from the thread-local OS-seeded RNG; output differs
    /// run to run.
    pub fn from_entropy() -> Self {
        Self::new(Rand64::new(rand::thread_rng().r#gen::<u128>()))
    }

    fn pick(&mut self, pool: &'static [&'static str]) -> &'static str {
        pool[self.rng.rand_range(0..pool.len() as u64) as usize]
    }

    /// Produce one title.
    pub fn next_title(&mut self) -> String {
        let template = self.pick(TEMPLATES);
        let adjective = self.pick(ADJECTIVES);
        let noun = self.pick(NOUNS);
        let verb = self.pick(VERBS);
        fill_template(template, adjective, noun, verb)
    }

    /// Produce exactly `count` titles.
    pub fn generate(&mut self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.next_title()).collect()
    }

    /// Produce `count` rows labelled fake.
    pub fn generate_labeled(&mut self, count: usize) -> Vec<LabeledTitle> {
        self.generate(count)
            .into_iter()
            .map(|title| LabeledTitle::new(title, Label::Fake))
            .collect()
    }
}
