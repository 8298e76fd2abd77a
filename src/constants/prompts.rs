pub const KEYWORD_SYSTEM_PROMPT: &str =
    "You are a technical assistant that replies with valid JSON lists.";

pub fn keyword_extraction_prompt(text: &str, max_keywords: usize, language: &str) -> String {
    format!(
        "Extract up to {max_keywords} relevant programming-related keywords from the \
         following text. Reply in {language} with a plain JSON list only (for example: \
         [\"for\", \"while\", \"automating tasks\"]). Do not use markdown formatting such as \
         ``` and do not wrap the list in an object key.\n\nText:\n{text}"
    )
}

pub const TRANSLATION_SYSTEM_PROMPT: &str =
    "You translate keyword lists, replying with plain JSON lists.";

pub fn keyword_translation_prompt(serialized_keywords: &str, language: &str) -> String {
    format!(
        "Translate the following keywords into {language}. Reply only with a JSON list of \
         words or expressions.\n\n{serialized_keywords}"
    )
}

pub const SEARCH_PHRASE_SYSTEM_PROMPT: &str =
    "You are a YouTube SEO specialist. You receive the title and description of a piece of \
     technical learning content and produce a single line of search-optimized keywords, \
     without repeating any of them, focused on the most relevant technology and programming \
     terms. Reply with the search terms only, separated by spaces.";

pub fn search_phrase_prompt(title: &str, description: &str, language: &str) -> String {
    format!("Title: {title}\nDescription: {description}\n\nReply in {language}.")
}

pub const QUIZ_SYSTEM_PROMPT: &str =
    "You are a generator of gamified quizzes for educational material.";

pub fn quiz_generation_prompt(pdf_text: &str) -> String {
    format!(
        r#"Take the text below, extracted from a PDF, and create:

- A title for the quiz (at most 80 characters)
- A description of the quiz (at most 200 characters)
- **Exactly 20 questions**, well distributed and varied, balanced across the types below
  according to the content of the PDF. Avoid overlapping topics.
    1. multiple_choice  (multiple choice, 1 correct)
    2. multiple_select  (multiple selection, 2 or more correct)
    3. true_false       (true or false)
    4. fill_in_blank    (complete the blank)
    5. matching         (pair matching)
    6. ordering         (ordering/sequencing)
    7. short_answer     (short answer, 1-3 words)

For each topic the PDF covers, generate questions **without subject overlap**, using as
many of the types as possible and varying them as much as you can.
If a type does not fit some content, use multiple choice instead.

Each question must follow this format:
- "question_id": fictitious uuid
- "type": one of the types above (in English)
- "level": basic, intermediate or advanced
- "question": a clear statement
- "options": array of objects {{label, text, is_correct, explanation}} for the applicable types
- "correct_answers": array (e.g. ["A"], ["A","C"], ["true"], ["word"], ["item1","item2"])
- "guidance_on_error": research guidance for a wrong answer
- "guidance_on_success": a suggestion for going deeper after a right answer
- "times_used": 0
- "status": "draft"
- "extra": optional object with type-specific details (e.g. pairs for matching, the correct
  sequence for ordering, reference text for fill_in_blank, etc.)

**Reply with the JSON only**, in this structure (no explanations, no comments, no extra text):
{{
  "title": "...",
  "description": "...",
  "questions": [ ... ]
}}

PDF text:
{pdf_text}"#
    )
}
