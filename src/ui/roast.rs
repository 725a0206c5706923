//! Game-over roast lines. Pure presentation flavor: the core never reads
//! the result, and a missing roast costs nothing.

const ROASTS: &[&str] = &[
    "Wow, {score} points? My grandma could do better with her eyes closed!",
    "Is {score} your high score or your IQ? Asking for a friend...",
    "Did you let a toddler play? Because {score} points is toddler-level performance!",
    "Breaking news: Local player discovers new low with {score} points!",
    "At {score} points, you're not playing the game, the game is playing you!",
    "With {score} points, you're basically a walking tutorial!",
    "At this rate, you'll reach 100 points by the time you're 100 years old!",
    "I've seen more coordination in a drunk penguin on ice!",
    "Your score of {score} is like a participation trophy - everyone gets one!",
    "Your snake moves like it's trying to solve a Rubik's cube blindfolded!",
];

/// Pick the roast for this game-over episode, cycling through the list.
pub fn pick(episode: usize, score: u64) -> String {
    ROASTS[episode % ROASTS.len()].replace("{score}", &score.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_the_score_and_cycles() {
        assert!(pick(0, 7).contains('7'));
        assert_eq!(pick(0, 3), pick(ROASTS.len(), 3));
        assert_ne!(pick(0, 3), pick(1, 3));
    }
}
