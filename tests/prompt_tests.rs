use flowdoc::prompts::{CATALOG, PROMPT_EN, PROMPT_FR, PROMPT_ZH, resolve_system_prompt};

#[test]
fn every_catalog_language_resolves_to_its_own_prompt() {
    for entry in CATALOG {
        let resolved = resolve_system_prompt(entry.language);
        assert_eq!(
            resolved, entry.prompt,
            "display name {:?} must select its own prompt",
            entry.language
        );
    }
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(resolve_system_prompt("FRENCH"), PROMPT_FR);
    assert_eq!(resolve_system_prompt("French (FR)"), PROMPT_FR);
    assert_eq!(resolve_system_prompt("français"), PROMPT_FR);
}

#[test]
fn aliases_match_by_containment() {
    assert_eq!(resolve_system_prompt("please use pt-br"), resolve_system_prompt("Português (PT-BR)"));
    assert_eq!(resolve_system_prompt("simplified chinese"), PROMPT_ZH);
}

#[test]
fn chinese_wins_over_hindi_code_collision() {
    // "chinese" contains "hi"; catalog order decides
    assert_eq!(resolve_system_prompt("Chinese"), PROMPT_ZH);
}

#[test]
fn empty_language_falls_back_to_english() {
    assert_eq!(resolve_system_prompt(""), PROMPT_EN);
    assert_eq!(resolve_system_prompt("   "), PROMPT_EN);
}

#[test]
fn unknown_language_gets_translation_directive() {
    let resolved = resolve_system_prompt("Klingon");
    assert!(resolved.starts_with(PROMPT_EN));
    assert!(resolved.contains("Your output MUST be entirely in **Klingon**."));
    assert!(resolved.contains("Translate all section headers and content to Klingon."));
}

#[test]
fn directive_preserves_the_requested_spelling() {
    let resolved = resolve_system_prompt("  Esperanto  ");
    // Trimmed, but otherwise verbatim
    assert!(resolved.contains("**Esperanto**"));
    assert!(!resolved.contains("esperanto"));
}

#[test]
fn catalog_covers_eleven_languages() {
    assert_eq!(CATALOG.len(), 11);
    let names: Vec<_> = CATALOG.iter().map(|e| e.language).collect();
    assert!(names.contains(&"English (EN)"));
    assert!(names.contains(&"Hebrew (HE)"));
}
