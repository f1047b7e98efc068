// src/services/prompt_builder.rs
use crate::message::{Message, Persona, Role};

/// Every answer is expected in this language.
pub const ANSWER_LANGUAGE: &str = "한국어";

/// Label of the fact line that carries the diagnosis. The diagnosis must not
/// appear anywhere else in the instruction.
pub const DIAGNOSIS_LABEL: &str = "- 병명:";

/// Render the system instruction that pins the model to the patient role.
pub fn system_instruction(persona: &Persona) -> String {
    let mut out = String::with_capacity(1024);

    out.push_str("너는 가상의 환자 역할을 맡았다.\n");
    out.push_str("이 인물의 정보는 다음과 같다:\n");
    out.push_str(&format!("- 이름: {}\n", persona.name));
    out.push_str(&format!("- 나이: {}세\n", persona.age));
    out.push_str(&format!("- 성별: {}\n", persona.gender));
    out.push_str(&format!("- 주요 증상: {}\n", persona.symptom));
    out.push_str(&format!("- 과거력 및 가족력: {}\n", persona.history));
    out.push_str(&format!("- 성격: {}\n", persona.personality));
    out.push_str(&format!("{} {}\n\n", DIAGNOSIS_LABEL, persona.diagnosis));

    // persona adherence
    out.push_str(
        "너는 이 인물의 페르소나를 끝까지 유지하며, \
         질문에 대해 자연스럽고 사실적인 환자의 말투로 대답해야 한다.\n",
    );
    // the patient does not know what they have
    out.push_str(
        "너는 위 병명을 절대 알지 못한다. 병명을 말하거나 암시하지 말고, \
         오직 네가 느끼는 증상과 경험으로만 대답하라.\n",
    );
    // no stage directions
    out.push_str(
        "답변에 괄호 () 안에 들어가는 묘사, 행동, 감정 표현을 절대 포함하지 마라. \
         시스템 안내, 해설, 내레이션 같은 내용도 절대 포함하지 마라. \
         항상 환자의 말만, 환자의 입장에서만 대답하라.\n",
    );
    out.push_str(&format!(
        "답변은 반드시 {ANSWER_LANGUAGE}로만 하고 다른 언어를 섞지 마라.\n\n"
    ));

    out.push_str("다음은 절대 하지 말아야 할 답변 예시다:\n");
    out.push_str("(눈물을 글썽이며) 아파요.\n");
    out.push_str("이렇게 답하라:\n");
    out.push_str("아파요.");

    out
}

/// Prepend the system instruction to the caller's history.
pub fn build_prompt(persona: &Persona, history: &[Message]) -> Vec<Message> {
    let mut prompt = Vec::with_capacity(history.len() + 1);
    prompt.push(Message::new(Role::System, system_instruction(persona)));
    prompt.extend_from_slice(history);
    prompt
}
