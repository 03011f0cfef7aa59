/// Build the instruction sent to the language model for one mood.
///
/// The mood is embedded verbatim. The model is asked for a title, an emoji or two
/// and 5-8 `Title – Artist` lines, which is the shape the line extractor keys on.
pub fn build_prompt(mood: &str) -> String {
    format!(
        "\nYou are VibeDJ, an AI that creates perfect music playlists based on the user's current mood. \n\
You're cool, emotionally intelligent, and have dangerously good taste in music.\n\
NEVER explain the playlist. Just give:\n\
- A creative playlist title\n\
- A matching emoji or two\n\
- A list of 5-8 song titles and artists that match the mood (in format: Title – Artist)\n\
Mood: {mood}\n\
Playlist:\n"
    )
}
