//! Static greeting tables. Every lookup returns a non-empty slice.
//!
//! Two-line templates use `{name}` as the placeholder for the user's name.

use crate::settings::GreetingTone;
use crate::taxonomy::{Holiday, Season, TimeBucket};

use super::GreetingCategory;

pub type Template = (&'static str, &'static str);

/// Tone-free pool used when context-aware greetings are switched off.
pub fn basic_pool(bucket: TimeBucket) -> &'static [&'static str] {
    match bucket {
        TimeBucket::Morning => &["Good morning", "Morning!", "Rise and shine"],
        TimeBucket::Afternoon => &["Good afternoon", "Hello there", "Afternoon!"],
        TimeBucket::Evening => &["Good evening", "Evening!", "Hope your day went well"],
        TimeBucket::Night => &["Good night", "Hello, night owl", "Still up?"],
    }
}

/// Pool for a resolved greeting category.
pub fn greeting_pool(
    category: GreetingCategory,
    tone: GreetingTone,
    bucket: TimeBucket,
) -> &'static [&'static str] {
    match category {
        GreetingCategory::Time(bucket) => tone_pool(tone, bucket),
        GreetingCategory::Holiday(holiday) => holiday_pool(holiday, bucket),
        GreetingCategory::Season(season) => season_pool(season, bucket),
        GreetingCategory::Weekend => &[
            "Happy weekend!",
            "Enjoy your weekend",
            "Weekend mode: on",
            "No alarms today, hopefully",
        ],
        GreetingCategory::EarlyBird => &[
            "Up with the sun, early bird",
            "The early bird gets the quiet hours",
            "A head start on the day",
        ],
        GreetingCategory::NightOwl => &[
            "Hello, night owl",
            "Burning the midnight oil?",
            "The stars are keeping you company",
        ],
        GreetingCategory::Frequent => &[
            "Welcome back, regular!",
            "Good to see you again, as always",
            "Back for more? Always welcome",
        ],
        GreetingCategory::Returning => &[
            "Welcome back",
            "Nice to see you again",
            "Hey, you're back",
        ],
        GreetingCategory::Productive => &[
            "You're on a roll today",
            "Ready to get things done?",
            "Focus mode looks good on you",
        ],
        GreetingCategory::Learning => &[
            "What will you learn today?",
            "Curiosity looks good on you",
            "Another day, another lesson",
        ],
        GreetingCategory::Relaxed => &[
            "Take it easy",
            "Time to unwind",
            "Relax, you've earned it",
        ],
    }
}

pub fn tone_pool(tone: GreetingTone, bucket: TimeBucket) -> &'static [&'static str] {
    match (tone, bucket) {
        (GreetingTone::Friendly, TimeBucket::Morning) => &[
            "Good morning!",
            "Morning, sunshine!",
            "Hope you slept well",
        ],
        (GreetingTone::Friendly, TimeBucket::Afternoon) => &[
            "Good afternoon!",
            "Hope your day is going well",
            "Hey there, good afternoon",
        ],
        (GreetingTone::Friendly, TimeBucket::Evening) => &[
            "Good evening!",
            "Hope you had a lovely day",
            "Evening! Time to slow down",
        ],
        (GreetingTone::Friendly, TimeBucket::Night) => &[
            "Good night!",
            "Sweet dreams are close",
            "Late one tonight?",
        ],
        (GreetingTone::Professional, TimeBucket::Morning) => &[
            "Good morning",
            "Morning. Here's to a productive day",
            "Good morning. Ready when you are",
        ],
        (GreetingTone::Professional, TimeBucket::Afternoon) => &[
            "Good afternoon",
            "Good afternoon. Keep up the momentum",
            "Afternoon. Halfway there",
        ],
        (GreetingTone::Professional, TimeBucket::Evening) => &[
            "Good evening",
            "Good evening. Time to wrap up",
            "Evening. Well done today",
        ],
        (GreetingTone::Professional, TimeBucket::Night) => &[
            "Good night",
            "Working late. Remember to rest",
            "Good night. Tomorrow is another day",
        ],
        (GreetingTone::Motivational, TimeBucket::Morning) => &[
            "Rise and conquer!",
            "Today is full of possibilities",
            "Make this morning count",
        ],
        (GreetingTone::Motivational, TimeBucket::Afternoon) => &[
            "Keep pushing, you're doing great",
            "The afternoon is yours to win",
            "Momentum is on your side",
        ],
        (GreetingTone::Motivational, TimeBucket::Evening) => &[
            "Finish strong!",
            "Every evening is a small victory",
            "Proud of what you did today",
        ],
        (GreetingTone::Motivational, TimeBucket::Night) => &[
            "Rest up, tomorrow needs you",
            "Dream big tonight",
            "Recharge for another great day",
        ],
        (GreetingTone::Casual, TimeBucket::Morning) => &[
            "Mornin'!",
            "Coffee first?",
            "Hey, early riser",
        ],
        (GreetingTone::Casual, TimeBucket::Afternoon) => &[
            "Hey there!",
            "What's up?",
            "Afternoon vibes",
        ],
        (GreetingTone::Casual, TimeBucket::Evening) => &[
            "Evening!",
            "Chill time?",
            "Hey, how was your day?",
        ],
        (GreetingTone::Casual, TimeBucket::Night) => &[
            "Still up, huh?",
            "Late night scrolling?",
            "Night, night!",
        ],
    }
}

pub fn holiday_pool(holiday: Holiday, bucket: TimeBucket) -> &'static [&'static str] {
    match (holiday, bucket) {
        (Holiday::NewYear, TimeBucket::Morning) => &[
            "Good morning and happy New Year!",
            "A fresh year, a fresh morning",
        ],
        (Holiday::NewYear, TimeBucket::Afternoon) => &[
            "Happy New Year!",
            "New year, new afternoon adventures",
        ],
        (Holiday::NewYear, TimeBucket::Evening) => &[
            "Happy New Year's evening!",
            "Cheers to the year ahead",
        ],
        (Holiday::NewYear, TimeBucket::Night) => &[
            "Counting down to something new",
            "Happy New Year, night owl",
        ],
        (Holiday::Valentines, TimeBucket::Morning) => &[
            "Good morning, and happy Valentine's Day",
            "A lovely morning to you",
        ],
        (Holiday::Valentines, TimeBucket::Afternoon) => &[
            "Happy Valentine's Day!",
            "Sending you some afternoon love",
        ],
        (Holiday::Valentines, TimeBucket::Evening) => &[
            "Have a sweet Valentine's evening",
            "Love is in the air tonight",
        ],
        (Holiday::Valentines, TimeBucket::Night) => &[
            "Sweet Valentine's dreams",
            "Happy Valentine's, night owl",
        ],
        (Holiday::Halloween, TimeBucket::Morning) => &[
            "Boo! Good morning",
            "A spooky good morning to you",
        ],
        (Holiday::Halloween, TimeBucket::Afternoon) => &[
            "Happy Halloween!",
            "Trick or treat? Good afternoon",
        ],
        (Holiday::Halloween, TimeBucket::Evening) => &[
            "Have a spooky evening",
            "The pumpkins are glowing tonight",
        ],
        (Holiday::Halloween, TimeBucket::Night) => &[
            "Beware the things that go bump",
            "Happy haunting, night owl",
        ],
        (Holiday::Thanksgiving, TimeBucket::Morning) => &[
            "Happy Thanksgiving morning",
            "Grateful for another morning",
        ],
        (Holiday::Thanksgiving, TimeBucket::Afternoon) => &[
            "Happy Thanksgiving!",
            "Hope your afternoon is full of gratitude",
        ],
        (Holiday::Thanksgiving, TimeBucket::Evening) => &[
            "Enjoy your Thanksgiving feast",
            "A thankful evening to you",
        ],
        (Holiday::Thanksgiving, TimeBucket::Night) => &[
            "Thankful for quiet nights",
            "Leftovers at midnight?",
        ],
        (Holiday::Christmas, TimeBucket::Morning) => &[
            "Merry Christmas morning!",
            "Good morning and happy holidays",
        ],
        (Holiday::Christmas, TimeBucket::Afternoon) => &[
            "Merry Christmas!",
            "Happy holidays, hope it's cozy",
        ],
        (Holiday::Christmas, TimeBucket::Evening) => &[
            "Have a warm Christmas evening",
            "Happy holidays, enjoy the lights",
        ],
        (Holiday::Christmas, TimeBucket::Night) => &[
            "Listening for sleigh bells?",
            "Merry Christmas, night owl",
        ],
    }
}

pub fn season_pool(season: Season, bucket: TimeBucket) -> &'static [&'static str] {
    match (season, bucket) {
        (Season::Spring, TimeBucket::Morning) => &[
            "A fresh spring morning",
            "Good morning, the flowers are waking up too",
        ],
        (Season::Spring, TimeBucket::Afternoon) => &[
            "Enjoy this spring afternoon",
            "Spring is in the air",
        ],
        (Season::Spring, TimeBucket::Evening) => &[
            "A mild spring evening",
            "Longer days, softer evenings",
        ],
        (Season::Spring, TimeBucket::Night) => &[
            "A quiet spring night",
            "Spring rain and late nights",
        ],
        (Season::Summer, TimeBucket::Morning) => &[
            "Sunny summer morning!",
            "Good morning, summer is here",
        ],
        (Season::Summer, TimeBucket::Afternoon) => &[
            "Stay cool this afternoon",
            "Hot summer afternoon, hydrate!",
        ],
        (Season::Summer, TimeBucket::Evening) => &[
            "A warm summer evening",
            "Golden hour, summer style",
        ],
        (Season::Summer, TimeBucket::Night) => &[
            "Warm summer night",
            "Fireflies and late nights",
        ],
        (Season::Fall, TimeBucket::Morning) => &[
            "A crisp autumn morning",
            "Good morning, sweater weather",
        ],
        (Season::Fall, TimeBucket::Afternoon) => &[
            "Falling leaves this afternoon",
            "Cozy autumn afternoon",
        ],
        (Season::Fall, TimeBucket::Evening) => &[
            "A cozy fall evening",
            "Pumpkin spice evening?",
        ],
        (Season::Fall, TimeBucket::Night) => &[
            "A cool autumn night",
            "Long fall nights ahead",
        ],
        (Season::Winter, TimeBucket::Morning) => &[
            "A frosty good morning",
            "Bundle up, it's a winter morning",
        ],
        (Season::Winter, TimeBucket::Afternoon) => &[
            "Stay warm this afternoon",
            "A bright winter afternoon",
        ],
        (Season::Winter, TimeBucket::Evening) => &[
            "A cozy winter evening",
            "Hot cocoa weather",
        ],
        (Season::Winter, TimeBucket::Night) => &[
            "A long winter night",
            "Stay warm tonight",
        ],
    }
}

/// Two-line templates for the same key the plain pool was chosen from.
pub fn named_templates(
    category: GreetingCategory,
    tone: GreetingTone,
    bucket: TimeBucket,
) -> &'static [Template] {
    match category {
        GreetingCategory::Time(bucket) => named_tone_templates(tone, bucket),
        GreetingCategory::Holiday(holiday) => named_holiday_templates(holiday),
        GreetingCategory::Season(season) => named_season_templates(season, bucket),
        GreetingCategory::Weekend => &[
            ("Happy weekend, {name}!", "Time to do what you love"),
            ("Hey {name}, it's the weekend", "Slow down and enjoy it"),
        ],
        GreetingCategory::EarlyBird => &[
            ("Up early, {name}?", "The quiet hours are all yours"),
        ],
        GreetingCategory::NightOwl => &[
            ("Still up, {name}?", "Don't forget to get some rest"),
            ("Hello, night owl {name}", "The night is young"),
        ],
        GreetingCategory::Frequent => &[
            ("Welcome back, {name}!", "Always a pleasure to see you"),
        ],
        GreetingCategory::Returning => &[
            ("Good to see you again, {name}", "Pick up where you left off"),
        ],
        GreetingCategory::Productive => &[
            ("You're on fire, {name}!", "Keep that momentum going"),
        ],
        GreetingCategory::Learning => &[
            ("Hey {name}, ready to learn?", "Something new is waiting"),
        ],
        GreetingCategory::Relaxed => &[
            ("Take it easy, {name}", "You deserve a break"),
        ],
    }
}

fn named_tone_templates(tone: GreetingTone, bucket: TimeBucket) -> &'static [Template] {
    match (tone, bucket) {
        (GreetingTone::Friendly, TimeBucket::Morning) => &[
            ("Good morning, {name}!", "Hope you slept well"),
            ("Morning, {name}!", "Let's make today a good one"),
        ],
        (GreetingTone::Friendly, TimeBucket::Afternoon) => &[
            ("Good afternoon, {name}!", "Hope your day is going well"),
        ],
        (GreetingTone::Friendly, TimeBucket::Evening) => &[
            ("Good evening, {name}!", "Time to relax a little"),
        ],
        (GreetingTone::Friendly, TimeBucket::Night) => &[
            ("Good night, {name}", "Sleep is calling"),
        ],
        (GreetingTone::Professional, TimeBucket::Morning) => &[
            ("Good morning, {name}", "Your day is ready"),
        ],
        (GreetingTone::Professional, TimeBucket::Afternoon) => &[
            ("Good afternoon, {name}", "Keep up the steady progress"),
        ],
        (GreetingTone::Professional, TimeBucket::Evening) => &[
            ("Good evening, {name}", "Time to wrap up the day"),
        ],
        (GreetingTone::Professional, TimeBucket::Night) => &[
            ("Good night, {name}", "Rest well for tomorrow"),
        ],
        (GreetingTone::Motivational, TimeBucket::Morning) => &[
            ("Rise and shine, {name}!", "Today is yours to conquer"),
        ],
        (GreetingTone::Motivational, TimeBucket::Afternoon) => &[
            ("Keep going, {name}!", "You're closer than you think"),
        ],
        (GreetingTone::Motivational, TimeBucket::Evening) => &[
            ("Finish strong, {name}!", "Every step counts"),
        ],
        (GreetingTone::Motivational, TimeBucket::Night) => &[
            ("Rest up, {name}", "Tomorrow you go again"),
        ],
        (GreetingTone::Casual, TimeBucket::Morning) => &[
            ("Mornin', {name}!", "Coffee time?"),
        ],
        (GreetingTone::Casual, TimeBucket::Afternoon) => &[
            ("Hey {name}!", "What's new?"),
        ],
        (GreetingTone::Casual, TimeBucket::Evening) => &[
            ("Evening, {name}!", "Chill time"),
        ],
        (GreetingTone::Casual, TimeBucket::Night) => &[
            ("Yo {name}, still up?", "Night, night soon"),
        ],
    }
}

fn named_holiday_templates(holiday: Holiday) -> &'static [Template] {
    match holiday {
        Holiday::NewYear => &[("Happy New Year, {name}!", "Here's to a great year ahead")],
        Holiday::Valentines => &[("Happy Valentine's Day, {name}!", "Spread a little love today")],
        Holiday::Halloween => &[("Happy Halloween, {name}!", "Trick or treat?")],
        Holiday::Thanksgiving => &[("Happy Thanksgiving, {name}!", "Grateful you're here")],
        Holiday::Christmas => &[("Merry Christmas, {name}!", "Wishing you a cozy holiday")],
    }
}

fn named_season_templates(season: Season, bucket: TimeBucket) -> &'static [Template] {
    match (season, bucket) {
        (Season::Spring, TimeBucket::Morning) => &[("Good morning, {name}", "Spring is blooming")],
        (Season::Spring, _) => &[("Hello, {name}", "Enjoy the spring air")],
        (Season::Summer, TimeBucket::Morning) => &[("Sunny morning, {name}!", "Summer is calling")],
        (Season::Summer, _) => &[("Hey {name}", "Stay cool this summer")],
        (Season::Fall, TimeBucket::Morning) => &[("Crisp morning, {name}", "Autumn is here")],
        (Season::Fall, _) => &[("Hello, {name}", "Cozy autumn vibes")],
        (Season::Winter, TimeBucket::Morning) => &[("Frosty morning, {name}", "Bundle up out there")],
        (Season::Winter, _) => &[("Stay warm, {name}", "Winter is cozy season")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_categories() -> Vec<GreetingCategory> {
        let mut categories: Vec<GreetingCategory> =
            TimeBucket::ALL.iter().map(|b| GreetingCategory::Time(*b)).collect();
        for holiday in [
            Holiday::NewYear,
            Holiday::Valentines,
            Holiday::Halloween,
            Holiday::Thanksgiving,
            Holiday::Christmas,
        ] {
            categories.push(GreetingCategory::Holiday(holiday));
        }
        for season in [Season::Spring, Season::Summer, Season::Fall, Season::Winter] {
            categories.push(GreetingCategory::Season(season));
        }
        categories.extend([
            GreetingCategory::Weekend,
            GreetingCategory::EarlyBird,
            GreetingCategory::NightOwl,
            GreetingCategory::Frequent,
            GreetingCategory::Returning,
            GreetingCategory::Productive,
            GreetingCategory::Learning,
            GreetingCategory::Relaxed,
        ]);
        categories
    }

    #[test]
    fn every_lookup_is_non_empty() {
        let tones = [
            GreetingTone::Friendly,
            GreetingTone::Professional,
            GreetingTone::Motivational,
            GreetingTone::Casual,
        ];
        for category in all_categories() {
            for tone in tones {
                for bucket in TimeBucket::ALL {
                    assert!(!greeting_pool(category, tone, bucket).is_empty());
                    let templates = named_templates(category, tone, bucket);
                    assert!(!templates.is_empty());
                    assert!(templates.iter().all(|(first, _)| first.contains("{name}")));
                }
            }
        }
        for bucket in TimeBucket::ALL {
            assert!(!basic_pool(bucket).is_empty());
        }
    }
}
