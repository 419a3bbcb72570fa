use sous_chef::services::prompt_builder::{RequestKind, build};

#[test]
fn test_build_is_deterministic() {
    for kind in [RequestKind::Chat, RequestKind::Ingredients, RequestKind::MealPlan] {
        assert_eq!(build(kind, "a quick dinner"), build(kind, "a quick dinner"));
    }
}

#[test]
fn test_ingredients_prompt() {
    let prompt = build(RequestKind::parse("ingredients"), "eggs, flour");
    assert!(prompt.contains("eggs, flour"));
    assert!(prompt.contains("Sous-Chef"));
    assert!(prompt.contains(r#"**Ingredient List**: "eggs, flour""#));
}

#[test]
fn test_meal_plan_prompt() {
    let prompt = build(RequestKind::parse("meal_plan"), "5 days, gluten free");
    assert!(prompt.contains(r#"**User's Request**: "5 days, gluten free""#));
    assert!(prompt.contains("meal planner"));
}

#[test]
fn test_unknown_type_falls_back_to_chat() {
    let chat = build(RequestKind::parse("chat"), "how long to rest dough?");
    let unknown = build(RequestKind::parse("unknown_value"), "how long to rest dough?");
    let missing = build(RequestKind::from(None), "how long to rest dough?");
    assert_eq!(chat, unknown);
    assert_eq!(chat, missing);
    assert!(chat.contains(r#"**User's query**: "how long to rest dough?""#));
}

#[test]
fn test_message_is_not_sanitized() {
    let raw = "  \"quoted\" {braces} <b>tags</b>\nnew line  ";
    let prompt = build(RequestKind::Chat, raw);
    assert!(prompt.contains(raw));
}

#[test]
fn test_template_framing_is_kept() {
    for kind in [RequestKind::Chat, RequestKind::Ingredients, RequestKind::MealPlan] {
        let prompt = build(kind, "eggs");
        assert!(prompt.starts_with("\n        **Persona**: You are 'Sous-Chef'"));
        assert!(prompt.ends_with(".\n        ") || prompt.ends_with("\"\n        "));
        for line in prompt.lines().skip(1).filter(|l| !l.is_empty()) {
            assert!(line.starts_with("        "), "line not indented: {:?}", line);
        }
    }
}
