//! Prompt construction.

/// Word limit the model is asked to respect.
const MAX_ANSWER_WORDS: usize = 500;

/// The two messages sent for one question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    /// Instructions plus the grounding context.
    pub system: String,
    /// The user's question, verbatim.
    pub user: String,
}

impl Prompt {
    /// Build a prompt that restricts the answer to `context`.
    #[must_use]
    pub fn grounded(question: &str, context: &str) -> Self {
        Self {
            system: system_prompt(question, context),
            user: question.to_owned(),
        }
    }
}

/// System message telling the model to answer only from the documents.
#[must_use]
pub fn system_prompt(question: &str, context: &str) -> String {
    format!(
        "You are a knowledgeable assistant. Your role is to provide accurate and concise \
         responses based only on the information in the provided documents.\n\n\
         User's Question: \"{question}\"\n\n\
         Relevant Context from Documents:\n{context}\n\n\
         Answer the user's question in a professional tone, using no more than \
         {MAX_ANSWER_WORDS} words. Do not include any information that is not found in the documents."
    )
}
