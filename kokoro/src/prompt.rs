//! Prompt assembly for diary analysis.

use indoc::indoc;

const PROMPT_HEAD: &str = indoc! {"
    以下の日記を読んで、筆者の感情を判断し、その感情に合わせたアドバイスと最後に四字熟語を提案してください。

    感情の種類は以下の通りです。
    1. 悲しい気持ち: しっとりと共感する。
    2. 怒りの気持ち: 私以上に怒って私をかばう。
    3. やる気に満ちている時: 全力で励まし応援する。
    4. 過信している時: 弱点を見抜いて叱咤する。

    ---
    日記："};

const PROMPT_TAIL: &str = indoc! {"
    ---

    この日記の感情を上記の種類から判断し、まず「感情: [判断した感情]」と明確に記載してください。
    次に、その感情に合わせたアドバイスを生成し、最後に「四字熟語: [提案する四字熟語]」と明確に記載してください。"};

/// Lead-in of the closing instruction sentence.
///
/// A reply whose advice section starts with this text restated the prompt
/// instead of answering it; the extractor's echo guard keys on it.
pub const INSTRUCTION_LEAD_IN: &str = "この日記の感情を上記の種類から判断し、まず「感情:";

/// Wrap `diary_text` in the fixed instruction template.
pub fn build_prompt(diary_text: &str) -> String {
    format!("{PROMPT_HEAD}\n{diary_text}\n{PROMPT_TAIL}")
}
