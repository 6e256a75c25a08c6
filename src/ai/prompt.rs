//! Prompt construction for the generation endpoint.

/// Builds a strict, JSON-only prompt.
///
/// `takeaways_count` may be 0; the map step uses that to suppress bullets at
/// the chunk level.
#[must_use]
pub fn build_prompt(text: &str, summary_words: usize, takeaways_count: usize) -> String {
    format!(
        "You are a precise writing assistant.\n\
         Task:\n\
         1) Provide a concise, faithful summary of the input text.\n\
         2) List exactly {takeaways_count} key takeaways as short bullet points.\n\
         Length guidance: aim for about {summary_words} words.\n\
         Output JSON ONLY with keys: summary, key_takeaways (array).\n\
         Text:\n\
         {text}\n"
    )
}
